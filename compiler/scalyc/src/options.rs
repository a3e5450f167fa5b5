//! Command-line options.

use std::path::PathBuf;
use thiserror::Error;

/// What to compile and where to put the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Source files, in command-line order.
    pub files: Vec<PathBuf>,
    /// Directory the outlines are written to.
    pub output: PathBuf,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("option `{0}` requires a value")]
    InvalidOption(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("no output given (use `-o <directory>`)")]
    NoOutputOption,
    #[error("no files to compile")]
    NoFilesToCompile,
}

impl OptionsError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            OptionsError::InvalidOption(_) | OptionsError::UnknownOption(_) => 2,
            OptionsError::NoOutputOption => 3,
            OptionsError::NoFilesToCompile => 4,
        }
    }
}

impl Options {
    /// Parse the arguments following the program name.
    ///
    /// Arguments not starting with `-` are source files. `-o <output>` names
    /// the output directory; the last one given wins.
    pub fn parse_arguments<I, S>(args: I) -> Result<Options, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut files = Vec::new();
        let mut output = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            if !arg.starts_with('-') {
                files.push(PathBuf::from(arg));
                continue;
            }
            match arg.as_str() {
                "-o" => match args.next() {
                    Some(value) => output = Some(PathBuf::from(value)),
                    None => return Err(OptionsError::InvalidOption(arg)),
                },
                _ => return Err(OptionsError::UnknownOption(arg)),
            }
        }

        let output = output.ok_or(OptionsError::NoOutputOption)?;
        if files.is_empty() {
            return Err(OptionsError::NoFilesToCompile);
        }
        Ok(Options { files, output })
    }
}

#[cfg(test)]
mod tests;
