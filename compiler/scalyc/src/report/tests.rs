#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{char_span, render_syntax_error};
use pretty_assertions::assert_eq;
use scaly_ir::StringInterner;

fn report(source: &str) -> String {
    let interner = StringInterner::new();
    let output = scaly_parse::parse(source, "broken.scaly", &interner);
    let error = output.result.unwrap_err();
    render_syntax_error("broken.scaly", source, &error)
}

#[test]
fn points_at_the_missing_brace() {
    let text = report("class C {");
    assert!(text.contains("1:10: expected `}`"), "{text}");
    assert!(text.contains("broken.scaly"), "{text}");
    assert!(text.contains("expected }"), "{text}");
    assert!(text.contains("alternatives starting at"), "{text}");
}

#[test]
fn trailing_input_is_reported_as_such() {
    let text = report("x }");
    assert!(text.contains("1:3: expected end of input"), "{text}");
    assert!(text.contains("expected end of input"), "{text}");
}

#[test]
fn output_has_no_color_codes() {
    assert!(!report("let = 1").contains('\u{1b}'));
}

#[test]
fn char_spans() {
    assert_eq!(char_span("abc", 1), 1..2);
    assert_eq!(char_span("é x", 3), 2..3);
    assert_eq!(char_span("abc", 3), 2..3);
    assert_eq!(char_span("abc", 10), 2..3);
    assert_eq!(char_span("", 0), 0..0);
}
