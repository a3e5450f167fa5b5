//! Scaly compiler CLI

use scalyc::{init_tracing, Compiler, CompilerError, Options};
use std::process::ExitCode;

fn print_usage() {
    eprintln!("Usage: scalyc -o <output directory> <file.scaly>...");
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return ExitCode::from(1);
    }

    let options = match Options::parse_arguments(args) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("error: {error}");
            print_usage();
            return ExitCode::from(error.exit_code());
        }
    };

    match Compiler::new().compile_files(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(errors) => {
            for error in &errors {
                match error {
                    CompilerError::SyntaxError { report, .. } => eprint!("{report}"),
                    other => eprintln!("error: {other}"),
                }
            }
            ExitCode::from(2)
        }
    }
}
