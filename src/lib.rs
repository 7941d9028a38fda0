//! Poglot - runtime translation lookups from gettext `.po` catalogs
//!
//! Poglot reads a translations root holding one folder per language and one
//! `.po` file per domain, and answers "what is this message in the current
//! language" with the message identifier itself as the fallback.
//!
//! ```no_run
//! use poglot::Registry;
//!
//! let mut registry = Registry::new();
//! registry.init("translations")?;
//! registry.select_language("de")?;
//! assert_eq!(registry.translate("Hack the planet!")?, "Hacke den Planeten!");
//! # Ok::<(), poglot::Error>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `error`: Error type shared by parser and registry
//! - `logging`: tracing subscriber setup for the binary
//! - `messages`: The parsed `Catalog` type
//! - `parsers`: Catalog file parsers
//! - `registry`: Language selection, domain cache and lookups

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod messages;
pub mod parsers;
pub mod registry;

pub use error::{Error, Result};
pub use messages::Catalog;
pub use registry::{DirectoryProvider, FileSystem, Registry, SharedRegistry};
