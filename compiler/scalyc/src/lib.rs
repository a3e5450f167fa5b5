//! Scaly compiler driver.
//!
//! Parses command-line options, compiles each source file into a syntax tree
//! and writes an outline of every tree to the output directory. Syntax errors
//! are rendered with source excerpts.

mod compiler;
mod options;
mod outline;
mod report;
mod tracing_setup;

pub use compiler::{compile_unit, outline_path, CompiledUnit, Compiler, CompilerError};
pub use options::{Options, OptionsError};
pub use outline::{outline, Outline};
pub use report::render_syntax_error;
pub use tracing_setup::init_tracing;
