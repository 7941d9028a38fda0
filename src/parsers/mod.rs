//! Catalog file parsers.
//!
//! - `po`: gettext `.po` files (singular `msgid`/`msgstr` entries)

pub mod po;
