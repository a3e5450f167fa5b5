//! Grammar productions.
//!
//! One method per production, grouped by what they build:
//!
//! - `declarations`: statements, bindings, functions, enums and classes
//! - `expressions`: operators, postfixes, control flow and switch
//! - `patterns`: patterns, types and lifetimes
//!
//! Sequence productions propagate the first failing required step's error
//! unchanged. Choice productions go through `Parser::choice`, list
//! productions through `Parser::list`, optional parts through
//! `Parser::optional`.

mod declarations;
mod expressions;
mod patterns;
