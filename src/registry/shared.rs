//! Mutex-guarded registry for hosts that translate from several threads.

use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::error::Result;
use crate::registry::{DirectoryProvider, FileSystem, Registry};

/// A [`Registry`] behind a mutex, for hosts that call it from several threads.
///
/// Every call holds the lock for its whole duration, so a language switch
/// (clear, then reload of the default domain) is never observed half done.
#[derive(Debug)]
pub struct SharedRegistry<P = FileSystem> {
    inner: Mutex<Registry<P>>,
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}

impl<P: DirectoryProvider> SharedRegistry<P> {
    pub fn new(registry: Registry<P>) -> Self {
        Self {
            inner: Mutex::new(registry),
        }
    }

    pub fn init(&self, root: impl Into<PathBuf>) -> Result<()> {
        self.lock().init(root)
    }

    pub fn init_with_domain(
        &self,
        root: impl Into<PathBuf>,
        default_domain: impl Into<String>,
    ) -> Result<()> {
        self.lock().init_with_domain(root, default_domain)
    }

    pub fn languages(&self) -> Result<Vec<String>> {
        self.lock().languages()
    }

    pub fn select_language(&self, language: &str) -> Result<()> {
        self.lock().select_language(language)
    }

    pub fn load_domain(&self, domain: &str) -> Result<()> {
        self.lock().load_domain(domain)
    }

    pub fn translate(&self, message_id: &str) -> Result<String> {
        self.lock().translate(message_id)
    }

    pub fn translate_in(&self, domain: &str, message_id: &str) -> Result<String> {
        self.lock().translate_in(domain, message_id)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn language(&self) -> Option<String> {
        self.lock().language().map(str::to_string)
    }

    /// Run several registry calls under a single lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut Registry<P>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn into_inner(self) -> Registry<P> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Registry<P>> {
        // Poisoning is ignored: `init` or `select_language` restore a usable state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: DirectoryProvider> From<Registry<P>> for SharedRegistry<P> {
    fn from(registry: Registry<P>) -> Self {
        Self::new(registry)
    }
}
