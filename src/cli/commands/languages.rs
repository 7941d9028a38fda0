use anyhow::Result;

use super::super::args::LanguagesCommand;
use super::super::context::CliContext;
use super::super::exit_status::ExitStatus;

/// Print available languages, sorted, one per line.
pub fn languages(cmd: LanguagesCommand) -> Result<ExitStatus> {
    let ctx = CliContext::new(&cmd.common)?;

    let mut languages = ctx.registry.languages()?;
    languages.sort();

    if cmd.common.verbose {
        eprintln!(
            "Found {} language(s) in {}",
            languages.len(),
            ctx.root.display()
        );
    }

    for language in languages {
        println!("{}", language);
    }

    Ok(ExitStatus::Success)
}
