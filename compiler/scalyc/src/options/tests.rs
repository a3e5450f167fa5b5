#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{Options, OptionsError};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn files_and_output() {
    let options = Options::parse_arguments(["a.scaly", "-o", "out", "b.scaly"]).unwrap();
    assert_eq!(
        options,
        Options {
            files: vec![PathBuf::from("a.scaly"), PathBuf::from("b.scaly")],
            output: PathBuf::from("out"),
        }
    );
}

#[test]
fn last_output_wins() {
    let options = Options::parse_arguments(["-o", "first", "-o", "second", "a.scaly"]).unwrap();
    assert_eq!(options.output, PathBuf::from("second"));
}

#[test]
fn output_without_value() {
    let error = Options::parse_arguments(["a.scaly", "-o"]).unwrap_err();
    assert_eq!(error, OptionsError::InvalidOption("-o".to_string()));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn unknown_option() {
    let error = Options::parse_arguments(["-x", "a.scaly"]).unwrap_err();
    assert_eq!(error, OptionsError::UnknownOption("-x".to_string()));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn missing_output() {
    let error = Options::parse_arguments(["a.scaly"]).unwrap_err();
    assert_eq!(error, OptionsError::NoOutputOption);
    assert_eq!(error.exit_code(), 3);
}

#[test]
fn missing_files() {
    let error = Options::parse_arguments(["-o", "out"]).unwrap_err();
    assert_eq!(error, OptionsError::NoFilesToCompile);
    assert_eq!(error.exit_code(), 4);
}

#[test]
fn missing_output_is_reported_before_missing_files() {
    let error = Options::parse_arguments(Vec::<String>::new()).unwrap_err();
    assert_eq!(error, OptionsError::NoOutputOption);
}

#[test]
fn messages() {
    assert_eq!(
        OptionsError::InvalidOption("-o".to_string()).to_string(),
        "option `-o` requires a value"
    );
    assert_eq!(
        OptionsError::UnknownOption("--verbose".to_string()).to_string(),
        "unknown option `--verbose`"
    );
}
