//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: one handler per subcommand
//! - `context`: config loading and registry setup shared by the handlers
//! - `report`: output helpers

mod args;
mod commands;
mod context;
mod exit_status;
mod report;
mod run;

pub use args::{
    Arguments, Command, CommonArgs, DumpCommand, LanguagesCommand, TranslateCommand,
};
pub use exit_status::ExitStatus;
pub use report::print_error;
pub use run::run_cli;
