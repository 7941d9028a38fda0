//! Error types shared by the catalog parser and the registry.
//!
//! Callers are expected to match on the variant: a [`Error::State`] means the
//! registry was used before `init`, [`Error::Config`] means an argument named
//! something that does not exist, and [`Error::Format`]/[`Error::Escape`] mean
//! a catalog file is broken.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// An operation that needs an initialized registry was called before `init`.
    #[error("registry must be initialised with `init` before use")]
    State,

    /// A root, language or domain argument does not point at anything usable.
    #[error("{0}")]
    Config(String),

    /// A catalog line that is neither `msgid`, `msgstr`, a continuation nor blank.
    #[error("unexpected line {line}: '{content}'")]
    Format { line: usize, content: String },

    /// A backslash followed by anything other than `n`, `r` or `"`.
    #[error("unknown escape char '{ch}' on line {line}")]
    Escape { line: usize, ch: char },

    #[error("failed to read catalog {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
