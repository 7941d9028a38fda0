use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::exit_status::ExitStatus;
use super::super::report::{print_error_message, print_success};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.poglotrc.json` into the current directory.
///
/// An existing file is left untouched and the command is refused.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        print_error_message(&format!("{CONFIG_FILE_NAME} already exists"));
        return Ok(ExitStatus::Failure);
    }

    let json = default_config_json()?;
    fs::write(config_path, json)
        .with_context(|| format!("Failed to write {CONFIG_FILE_NAME}"))?;
    print_success(&format!("Created {CONFIG_FILE_NAME}"));

    Ok(ExitStatus::Success)
}
