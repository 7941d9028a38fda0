//! Translation registry: language selection, domain cache and lookups.
//!
//! The registry expects a translations root with one folder per language and
//! one `.po` file per domain inside each language:
//!
//! ```text
//! translations/
//!     en-GB/
//!         messages.po
//!         help.po
//!     de/
//!         messages.po
//!         help.po
//! ```
//!
//! Call [`Registry::init`] first, then [`Registry::select_language`]. Lookups
//! that find no translation return the message identifier unchanged.
//!
//! A `Registry` has no internal locking. Hosts that share one between threads
//! should use [`SharedRegistry`].

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tracing::{debug, info, trace};

use crate::error::{Error, Result};
use crate::messages::Catalog;
use crate::parsers::po;

pub mod provider;
pub mod shared;

pub use provider::{DirectoryProvider, FileSystem};
pub use shared::SharedRegistry;

/// Domain used when `init` is not given one.
pub const DEFAULT_DOMAIN: &str = "messages";

/// File extension of catalog files.
pub const CATALOG_EXTENSION: &str = "po";

#[derive(Debug)]
struct State {
    root: PathBuf,
    default_domain: String,
    language: Option<String>,
    /// Catalogs of `language`, keyed by domain.
    cache: HashMap<String, Catalog>,
}

impl State {
    fn domain_path(&self, language: &str, domain: &str) -> PathBuf {
        self.root
            .join(language)
            .join(format!("{domain}.{CATALOG_EXTENSION}"))
    }
}

#[derive(Debug)]
pub struct Registry<P = FileSystem> {
    provider: P,
    state: Option<State>,
}

impl Registry {
    /// Create an uninitialised registry reading from the local filesystem.
    pub fn new() -> Self {
        Self::with_provider(FileSystem)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DirectoryProvider> Registry<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            state: None,
        }
    }

    /// Initialise with `root` and the [`DEFAULT_DOMAIN`].
    ///
    /// See [`Registry::init_with_domain`].
    pub fn init(&mut self, root: impl Into<PathBuf>) -> Result<()> {
        self.init_with_domain(root, DEFAULT_DOMAIN)
    }

    /// Initialise the registry. Must be called before anything but `reset`.
    ///
    /// Any previous state is discarded. No language is selected and nothing is
    /// loaded, so until [`Registry::select_language`] is called lookups fail
    /// to find a catalog for the default domain.
    ///
    /// Fails with [`Error::Config`] if `root` is not a directory, in which case
    /// the previous state is kept.
    pub fn init_with_domain(
        &mut self,
        root: impl Into<PathBuf>,
        default_domain: impl Into<String>,
    ) -> Result<()> {
        let root = root.into();
        if !self.provider.is_dir(&root) {
            return Err(Error::config(format!(
                "Translations root {} must be a directory",
                root.display()
            )));
        }

        self.reset();

        let default_domain = default_domain.into();
        info!(
            root = %root.display(),
            default_domain = %default_domain,
            "translation registry initialised"
        );
        self.state = Some(State {
            root,
            default_domain,
            language: None,
            cache: HashMap::new(),
        });
        Ok(())
    }

    /// All available languages: folders in the root not starting with `.`.
    pub fn languages(&self) -> Result<Vec<String>> {
        let state = self.state()?;
        let names = self
            .provider
            .list_dirs(&state.root)
            .map_err(|e| Error::io(&state.root, e))?;

        Ok(names
            .into_iter()
            .filter(|name| !name.starts_with('.'))
            .collect())
    }

    /// Switch to `language`, dropping every cached catalog and loading the
    /// default domain for the new language.
    ///
    /// Fails with [`Error::Config`] if the language folder does not exist or
    /// is hidden, and with whatever loading the default domain fails with.
    pub fn select_language(&mut self, language: &str) -> Result<()> {
        let state = self.state()?;
        if !is_language_name(language) || !self.provider.is_dir(&state.root.join(language)) {
            return Err(Error::config(format!("Language {language} is not available")));
        }

        let state = self.state_mut()?;
        state.language = Some(language.to_string());
        state.cache.clear();
        info!(language, "language selected");

        let default_domain = state.default_domain.clone();
        self.load_domain(&default_domain)
    }

    /// Parse `domain` for the current language and cache it, replacing any
    /// catalog already cached for it.
    ///
    /// Fails with [`Error::Config`] if no language is selected or the domain
    /// file does not exist.
    pub fn load_domain(&mut self, domain: &str) -> Result<()> {
        let state = self.state()?;
        let path = match state.language.as_deref() {
            Some(language) => state.domain_path(language, domain),
            None => {
                return Err(Error::config(format!(
                    "Domain {domain} cannot be loaded before a language is selected"
                )));
            }
        };

        if !self.provider.is_file(&path) {
            return Err(Error::config(format!(
                "Domain {domain} does not exist in language {}",
                state.language.as_deref().unwrap_or_default()
            )));
        }

        let catalog = read_catalog(&self.provider, &path)?;
        debug!(domain, path = %path.display(), entries = catalog.len(), "domain loaded");

        self.state_mut()?
            .cache
            .insert(domain.to_string(), catalog);
        Ok(())
    }

    /// Translate `message_id` using the default domain.
    pub fn translate(&mut self, message_id: &str) -> Result<String> {
        let domain = self.state()?.default_domain.clone();
        self.translate_in(&domain, message_id)
    }

    /// Translate `message_id` using `domain`, loading the domain first if it
    /// is not cached.
    ///
    /// Identifiers missing from the catalog fall back to `message_id` itself.
    /// A blank translation is returned as the empty string.
    pub fn translate_in(&mut self, domain: &str, message_id: &str) -> Result<String> {
        if self.state()?.cache.contains_key(domain) {
            trace!(domain, "domain cache hit");
        } else {
            self.load_domain(domain)?;
        }

        let translation = self
            .state()?
            .cache
            .get(domain)
            .and_then(|catalog| catalog.get(message_id))
            .unwrap_or(message_id);

        Ok(translation.to_string())
    }

    /// Drop all state. `init` must be called again before further use.
    pub fn reset(&mut self) {
        self.state = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn root(&self) -> Option<&Path> {
        self.state.as_ref().map(|state| state.root.as_path())
    }

    pub fn default_domain(&self) -> Option<&str> {
        self.state.as_ref().map(|state| state.default_domain.as_str())
    }

    pub fn language(&self) -> Option<&str> {
        self.state.as_ref().and_then(|state| state.language.as_deref())
    }

    /// The cached catalog for `domain`, without loading it.
    pub fn catalog(&self, domain: &str) -> Option<&Catalog> {
        self.state.as_ref().and_then(|state| state.cache.get(domain))
    }

    fn state(&self) -> Result<&State> {
        self.state.as_ref().ok_or(Error::State)
    }

    fn state_mut(&mut self) -> Result<&mut State> {
        self.state.as_mut().ok_or(Error::State)
    }
}

/// A language name must be a single, visible path component.
fn is_language_name(language: &str) -> bool {
    !language.is_empty()
        && !language.starts_with('.')
        && !language.contains(['/', '\\'])
}

fn read_catalog<P: DirectoryProvider>(provider: &P, path: &Path) -> Result<Catalog> {
    let reader = provider.open(path).map_err(|e| Error::io(path, e))?;
    po::parse_reader(reader, path)
}
