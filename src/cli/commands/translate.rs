use anyhow::Result;

use super::super::args::TranslateCommand;
use super::super::context::CliContext;
use super::super::exit_status::ExitStatus;

/// Print the translation of each identifier on its own line, in order.
pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let mut ctx = CliContext::with_language(&cmd.common)?;

    for message_id in &cmd.message_ids {
        let translation = match &cmd.domain {
            Some(domain) => ctx.registry.translate_in(domain, message_id)?,
            None => ctx.registry.translate(message_id)?,
        };
        println!("{}", translation);
    }

    Ok(ExitStatus::Success)
}
