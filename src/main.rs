//! crossdupe - Cross-Tree Duplicate Auditor
//!
//! Entry point for the crossdupe CLI binary.

use clap::Parser;
use crossdupe::{
    cli::Cli,
    error::{ExitCode, StructuredError},
    logging::init_logging,
};

fn main() {
    // Map argument errors to exit status 1 rather than clap's default 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are "errors" to clap but not to us
            if err.use_stderr() {
                err.print().ok();
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
            err.print().ok();
            std::process::exit(ExitCode::Success.as_i32());
        }
    };

    let json_errors = cli.json_errors;
    init_logging(cli.verbose, cli.quiet);

    match crossdupe::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::GeneralError;
            if json_errors {
                let structured = StructuredError::new(&err, exit_code);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    eprintln!("{json}");
                } else {
                    eprintln!("[{}] Error: {err:#}", exit_code.code_prefix());
                }
            } else {
                eprintln!("[{}] Error: {err:#}", exit_code.code_prefix());
            }
            std::process::exit(exit_code.as_i32());
        }
    }
}
