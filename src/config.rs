use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::registry::DEFAULT_DOMAIN;

pub const CONFIG_FILE_NAME: &str = ".poglotrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translations_root", alias = "translationsDir")]
    pub translations_root: String,
    #[serde(default = "default_domain")]
    pub default_domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_root: default_translations_root(),
            default_domain: default_domain(),
            language: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the default domain or language could never name a
    /// catalog file or language folder.
    pub fn validate(&self) -> Result<()> {
        if self.default_domain.is_empty() || self.default_domain.contains(['/', '\\']) {
            bail!(
                "Invalid 'defaultDomain': \"{}\" must be a plain file stem",
                self.default_domain
            );
        }

        if let Some(language) = &self.language
            && (language.is_empty() || language.starts_with('.'))
        {
            bail!("Invalid 'language': \"{}\"", language);
        }

        Ok(())
    }

    /// The translations root, with relative paths taken from `base_dir`.
    pub fn resolve_root(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.translations_root)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config are resolved against: the
    /// config file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
