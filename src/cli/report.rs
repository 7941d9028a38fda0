//! Shared output formatting for CLI commands.

use colored::Colorize;

/// Success mark for consistent output formatting.
const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a completed action to stdout, prefixed with the success mark.
pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print a diagnostic to stderr in the `error: ...` style.
pub fn print_error_message(message: &str) {
    eprintln!("{} {}", "error:".bold().red(), message);
}

/// Print a top-level error, including its context chain.
pub fn print_error(err: &anyhow::Error) {
    print_error_message(&format!("{err:#}"));
}
