//! End-to-end runs of the `scalyc` binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use std::fs;
use std::process::{Command, Output};

fn scalyc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scalyc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn no_arguments_prints_usage() {
    let output = scalyc(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: scalyc"));
}

#[test]
fn option_errors_map_to_exit_codes() {
    assert_eq!(scalyc(&["a.scaly", "-o"]).status.code(), Some(2));
    assert_eq!(scalyc(&["-q", "a.scaly"]).status.code(), Some(2));
    assert_eq!(scalyc(&["a.scaly"]).status.code(), Some(3));
    assert_eq!(scalyc(&["-o", "out"]).status.code(), Some(4));
}

#[test]
fn compiles_into_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("point.scaly");
    fs::write(
        &source,
        "class Point { let x: Int = 0 let y: Int = 0 }\nlet origin = Point()\n",
    )
    .unwrap();
    let out = dir.path().join("out");

    let output = scalyc(&[source.to_str().unwrap(), "-o", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "{output:?}");
    let outline = fs::read_to_string(out.join("point.outline")).unwrap();
    assert!(outline.contains("ClassDeclaration 1:1..1:46 Point"), "{outline}");
    assert!(outline.contains("IdentifierPattern 2:5..2:11 origin"), "{outline}");
}

#[test]
fn syntax_errors_are_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("broken.scaly");
    fs::write(&source, "function f( {").unwrap();
    let out = dir.path().join("out");

    let output = scalyc(&[source.to_str().unwrap(), "-o", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.scaly"), "{stderr}");
    assert!(stderr.contains("Error"), "{stderr}");
    assert!(!out.join("broken.outline").exists());
}
