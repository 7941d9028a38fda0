use std::process::ExitCode;

use clap::Parser;
use poglot::cli::{Arguments, ExitStatus, print_error};

fn main() -> ExitCode {
    let args = Arguments::parse();
    poglot::logging::setup_logging(args.verbose());

    match poglot::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
