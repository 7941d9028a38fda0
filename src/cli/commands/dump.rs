use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::super::args::DumpCommand;
use super::super::context::CliContext;
use super::super::exit_status::ExitStatus;

/// Print a domain catalog as pretty JSON, keys sorted.
pub fn dump(cmd: DumpCommand) -> Result<ExitStatus> {
    let mut ctx = CliContext::with_language(&cmd.common)?;

    let domain = match &cmd.domain {
        Some(domain) => domain.clone(),
        None => ctx
            .registry
            .default_domain()
            .context("Registry is not initialised")?
            .to_string(),
    };

    if ctx.registry.catalog(&domain).is_none() {
        ctx.registry.load_domain(&domain)?;
    }
    let catalog = ctx
        .registry
        .catalog(&domain)
        .with_context(|| format!("Domain {} was not loaded", domain))?;

    let entries: BTreeMap<&str, &str> = catalog.iter().collect();
    let json = serde_json::to_string_pretty(&entries).context("Failed to serialize catalog")?;
    println!("{}", json);

    Ok(ExitStatus::Success)
}
