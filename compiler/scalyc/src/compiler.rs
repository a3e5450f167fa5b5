//! Multi-file compilation.
//!
//! Compilation units are independent: each gets its own tree and lexer, and
//! only the string interner is shared. Units are parsed in parallel; every
//! unit that fails contributes one error, so a single run reports all broken
//! files.

use crate::options::Options;
use crate::outline::outline;
use crate::report::render_syntax_error;
use rayon::prelude::*;
use scaly_ir::ast::CompilationUnit;
use scaly_ir::{Id, StringInterner, SyntaxTree};
use scaly_parse::ParserError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("unable to read `{}`: {source}", file.display())]
    UnableToReadFile { file: PathBuf, source: io::Error },
    #[error("unable to create output directory `{}`: {source}", directory.display())]
    UnableToCreateOutputDirectory {
        directory: PathBuf,
        source: io::Error,
    },
    #[error("unable to write `{}`: {source}", file.display())]
    UnableToWriteFile { file: PathBuf, source: io::Error },
    #[error("syntax error in `{}`: {error}", file.display())]
    SyntaxError {
        file: PathBuf,
        error: ParserError,
        /// Rendered diagnostic, ready to print.
        report: String,
    },
}

/// A successfully parsed compilation unit.
#[derive(Debug)]
pub struct CompiledUnit {
    pub tree: SyntaxTree,
    pub root: Id<CompilationUnit>,
}

/// Parse the source `text` of one compilation unit.
pub fn compile_unit(
    file_name: &str,
    text: &str,
    interner: &StringInterner,
) -> Result<CompiledUnit, ParserError> {
    let output = scaly_parse::parse(text, file_name, interner);
    let root = output.result?;
    Ok(CompiledUnit {
        tree: output.tree,
        root,
    })
}

/// Compiler session.
pub struct Compiler {
    interner: StringInterner,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            interner: StringInterner::new(),
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Compile every file named in `options`, writing one outline per file
    /// into the output directory.
    ///
    /// Returns the errors of all files that failed, in command-line order.
    pub fn compile_files(&self, options: &Options) -> Result<(), Vec<CompilerError>> {
        fs::create_dir_all(&options.output).map_err(|source| {
            vec![CompilerError::UnableToCreateOutputDirectory {
                directory: options.output.clone(),
                source,
            }]
        })?;

        let errors: Vec<CompilerError> = options
            .files
            .par_iter()
            .filter_map(|file| self.compile_file(file, &options.output).err())
            .collect();

        info!(
            files = options.files.len(),
            failed = errors.len(),
            "compilation finished"
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn compile_file(&self, file: &Path, output: &Path) -> Result<(), CompilerError> {
        let text = fs::read_to_string(file).map_err(|source| CompilerError::UnableToReadFile {
            file: file.to_path_buf(),
            source,
        })?;
        let file_name = file.to_string_lossy();
        debug!(file = %file_name, bytes = text.len(), "compiling unit");

        let unit = compile_unit(&file_name, &text, &self.interner).map_err(|error| {
            CompilerError::SyntaxError {
                file: file.to_path_buf(),
                report: render_syntax_error(&file_name, &text, &error),
                error,
            }
        })?;

        let target = outline_path(file, output);
        let text = outline(&unit.tree, unit.root, &self.interner);
        fs::write(&target, text).map_err(|source| CompilerError::UnableToWriteFile {
            file: target.clone(),
            source,
        })?;
        debug!(file = %target.display(), nodes = unit.tree.node_count(), "outline written");
        Ok(())
    }
}

/// `<output>/<stem>.outline`
pub fn outline_path(file: &Path, output: &Path) -> PathBuf {
    let mut name = file.file_stem().unwrap_or(file.as_os_str()).to_os_string();
    name.push(".outline");
    output.join(name)
}
