use super::*;
use pretty_assertions::assert_eq;

fn at(offset: u32) -> Position {
    Position::new(offset, 1, offset + 1)
}

fn sample() -> ParserError {
    ParserError::UnableToParse {
        position: at(0),
        errors: vec![
            ParserError::KeywordExpected {
                position: at(0),
                keyword: Keyword::Let,
            },
            ParserError::UnableToParse {
                position: at(2),
                errors: vec![
                    ParserError::IdentifierExpected { position: at(4) },
                    ParserError::PunctuationExpected {
                        position: at(4),
                        punctuation: Punctuation::LeftParen,
                    },
                ],
            },
            ParserError::LiteralExpected { position: at(4) },
            ParserError::IdentifierExpected { position: at(4) },
        ],
    }
}

#[test]
fn position_of_aggregate_is_its_start() {
    assert_eq!(sample().position(), at(0));
}

#[test]
fn leaves_are_depth_first() {
    let error = sample();
    let offsets: Vec<u32> = error.leaves().iter().map(|e| e.position().offset).collect();
    assert_eq!(offsets, vec![0, 4, 4, 4, 4]);
}

#[test]
fn deepest_prefers_the_first_leaf_on_ties() {
    let error = sample();
    assert_eq!(
        error.deepest(),
        &ParserError::IdentifierExpected { position: at(4) }
    );
}

#[test]
fn deepest_of_a_leaf_is_itself() {
    let error = ParserError::NotAtEnd { position: at(7) };
    assert_eq!(error.deepest(), &error);
}

#[test]
fn deepest_of_an_empty_aggregate_is_itself() {
    let error = ParserError::UnableToParse {
        position: at(3),
        errors: Vec::new(),
    };
    assert_eq!(error.deepest(), &error);
    assert!(error.expected().is_empty());
}

#[test]
fn expected_lists_spellings_at_the_deepest_position() {
    assert_eq!(sample().expected(), vec!["identifier", "(", "literal"]);
}

#[test]
fn display_names_the_expectation() {
    let error = ParserError::PunctuationExpected {
        position: Position::new(10, 2, 3),
        punctuation: Punctuation::RightCurly,
    };
    assert_eq!(error.to_string(), "2:3: expected `}`");
    assert_eq!(sample().to_string(), "1:1: unable to parse (4 alternatives failed)");
}
