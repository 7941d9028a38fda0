use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::registry::Registry;

/// Registry set up from the config file and command-line overrides.
pub struct CliContext {
    pub registry: Registry,
    pub root: PathBuf,
    pub language: Option<String>,
}

impl CliContext {
    /// Initialise a registry for the current directory.
    ///
    /// Flags win over `.poglotrc.json`, which wins over defaults. A language
    /// is selected if one is known.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let config_result = load_config(&cwd)?;

        if args.verbose && !config_result.from_file {
            eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let config = config_result.config;
        let root = match &args.root {
            Some(root) => cwd.join(root),
            None => config.resolve_root(&config_result.base_dir),
        };
        let default_domain = args
            .default_domain
            .clone()
            .unwrap_or(config.default_domain);
        let language = args.language.clone().or(config.language);

        let mut registry = Registry::new();
        registry
            .init_with_domain(&root, default_domain)
            .with_context(|| format!("Cannot use translations root '{}'", root.display()))?;

        if let Some(language) = &language {
            registry.select_language(language)?;
        }

        Ok(Self {
            registry,
            root,
            language,
        })
    }

    /// Like [`CliContext::new`], but fails if no language was given by flag,
    /// environment or config file.
    pub fn with_language(args: &CommonArgs) -> Result<Self> {
        let ctx = Self::new(args)?;
        if ctx.language.is_none() {
            bail!(
                "No language selected.\n\
                 Hint: Pass --language or set 'language' in {}.",
                CONFIG_FILE_NAME
            );
        }
        Ok(ctx)
    }
}
