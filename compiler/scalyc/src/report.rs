//! Syntax error rendering.
//!
//! Reports point at the deepest failure the parser reached, which is where
//! the input stopped making sense, and list what would have been accepted
//! there.

use ariadne::{Config, Label, Report, ReportKind, Source};
use scaly_parse::ParserError;
use std::ops::Range;

/// Render `error` against the source `text` of `file_name`.
///
/// Output is plain text without colors.
pub fn render_syntax_error(file_name: &str, text: &str, error: &ParserError) -> String {
    let deepest = error.deepest();
    let span = char_span(text, deepest.position().offset as usize);
    let expected = error.expected();

    let mut report = Report::build(ReportKind::Error, file_name, span.start)
        .with_config(Config::default().with_color(false))
        .with_message(deepest.to_string())
        .with_label(Label::new((file_name, span)).with_message(match expected.as_slice() {
            [] => "unexpected input".to_string(),
            [only] => format!("expected {only}"),
            _ => format!("expected one of {}", expected.join(", ")),
        }));
    if let ParserError::UnableToParse { position, errors } = error {
        report = report.with_note(format!(
            "{} alternatives starting at {position} failed",
            errors.len()
        ));
    }

    let mut buffer = Vec::new();
    if report
        .finish()
        .write((file_name, Source::from(text)), &mut buffer)
        .is_err()
    {
        return format!("{file_name}: {deepest}\n");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Character range of the token starting at byte `offset`, or the last
/// character when `offset` is the end of the text.
fn char_span(text: &str, offset: usize) -> Range<usize> {
    let offset = offset.min(text.len());
    let start = text
        .char_indices()
        .take_while(|&(index, _)| index < offset)
        .count();
    let length = text.chars().count();
    if start < length {
        start..start + 1
    } else {
        start.saturating_sub(1)..length
    }
}

#[cfg(test)]
mod tests;
