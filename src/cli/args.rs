//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `languages`: List the languages available in the translations root
//! - `translate`: Look up one or more message identifiers
//! - `dump`: Print a whole domain catalog as JSON
//! - `init`: Initialize a poglot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Dump(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Translations root directory (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Language to translate into (overrides config file)
    #[arg(short, long, env = "POGLOT_LANGUAGE")]
    pub language: Option<String>,

    /// Domain used when none is given (overrides config file)
    #[arg(long)]
    pub default_domain: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Message identifiers to translate
    #[arg(required = true)]
    pub message_ids: Vec<String>,

    /// Domain to look the identifiers up in (default: the default domain)
    #[arg(short, long)]
    pub domain: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    /// Domain to print (default: the default domain)
    #[arg(short, long)]
    pub domain: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available languages
    Languages(LanguagesCommand),
    /// Translate message identifiers in the selected language
    Translate(TranslateCommand),
    /// Print every entry of a domain catalog as JSON
    Dump(DumpCommand),
    /// Initialize a new .poglotrc.json configuration file
    Init,
}
