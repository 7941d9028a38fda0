//! Catalog type for parsed translation files.
//!
//! A [`Catalog`] is what one `.po` file for one language turns into: a flat
//! mapping from message identifier to translated string.

use std::collections::{HashMap, hash_map};

/// Identifier of the entry that carries file metadata (headers).
pub const METADATA_KEY: &str = "";

/// All translations of a single domain in a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the translation for a message identifier.
    pub fn get(&self, message_id: &str) -> Option<&str> {
        self.entries.get(message_id).map(String::as_str)
    }

    /// Check if an identifier exists.
    pub fn contains_key(&self, message_id: &str) -> bool {
        self.entries.contains_key(message_id)
    }

    /// The metadata blob stored under the empty identifier, if any.
    ///
    /// The content is opaque; no header parsing is done.
    pub fn metadata(&self) -> Option<&str> {
        self.get(METADATA_KEY)
    }

    /// Iterate over `(identifier, translation)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the number of entries, the metadata entry included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, message_id: String, translation: String) {
        self.entries.insert(message_id, translation);
    }

    pub(crate) fn insert_if_absent(&mut self, message_id: String, translation: String) {
        if let hash_map::Entry::Vacant(slot) = self.entries.entry(message_id) {
            slot.insert(translation);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Catalog {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
