//! Parser for gettext `.po` catalog files.
//!
//! The file is a sequence of blocks separated by blank lines. Each block holds
//! one `msgid` and one `msgstr`, either of which may continue over several
//! bare quoted lines:
//!
//! ```text
//! msgid "Hack the planet!"
//! msgstr ""
//! "Hacke den "
//! "Planeten!"
//! ```
//!
//! Only the singular form is understood. Comments, plural forms and
//! contexts are not part of the format accepted here and are rejected as
//! unexpected lines.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{Error, Result};
use crate::messages::Catalog;

const MSGID_PREFIX: &str = "msgid ";
const MSGSTR_PREFIX: &str = "msgstr ";

/// Which field bare quoted lines currently continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    AwaitingField,
    InIdentifier,
    InTranslation,
}

/// Buffers of the block being read.
#[derive(Debug, Default)]
struct Block {
    message_id: String,
    translation: String,
    /// Set once any field line was seen in this block.
    touched: bool,
}

impl Block {
    fn buffer(&mut self, state: FieldState) -> Option<&mut String> {
        match state {
            FieldState::AwaitingField => None,
            FieldState::InIdentifier => Some(&mut self.message_id),
            FieldState::InTranslation => Some(&mut self.translation),
        }
    }

    /// Move the block into the catalog.
    ///
    /// A block without any field lines (a run of blank lines, or trailing
    /// blanks at the end of the file) still yields the empty-identifier entry,
    /// but never replaces metadata that was already read.
    fn commit(&mut self, catalog: &mut Catalog) {
        let Block {
            message_id,
            translation,
            touched,
        } = std::mem::take(self);

        if touched {
            catalog.insert(message_id, translation);
        } else {
            catalog.insert_if_absent(message_id, translation);
        }
    }
}

/// Line-at-a-time state machine behind every `parse_*` entry point.
#[derive(Debug)]
struct Parser {
    catalog: Catalog,
    block: Block,
    state: FieldState,
}

impl Parser {
    fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            block: Block::default(),
            state: FieldState::AwaitingField,
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            self.end_block();
            return Ok(());
        }

        let (fragment, state) = if let Some(rest) = line.strip_prefix(MSGID_PREFIX) {
            (rest, FieldState::InIdentifier)
        } else if let Some(rest) = line.strip_prefix(MSGSTR_PREFIX) {
            (rest, FieldState::InTranslation)
        } else if line.starts_with('"') {
            (line, self.state)
        } else {
            return Err(unexpected_line(line_number, line));
        };

        let Some(buffer) = self.block.buffer(state) else {
            return Err(unexpected_line(line_number, line));
        };
        decode_into(fragment, line_number, buffer)?;

        self.block.touched = true;
        self.state = state;
        Ok(())
    }

    /// The active field carries over, so a bare quoted line after a blank
    /// line continues the same field of the next block.
    fn end_block(&mut self) {
        self.block.commit(&mut self.catalog);
    }

    fn finish(mut self) -> Catalog {
        self.end_block();
        self.catalog
    }
}

fn unexpected_line(line: usize, content: &str) -> Error {
    Error::Format {
        line,
        content: content.to_string(),
    }
}

/// Decode the quoted part of `fragment` and append it to `target`.
///
/// Characters before the opening quote are skipped, but escapes are checked
/// everywhere. Decoding stops at the closing quote.
fn decode_into(fragment: &str, line: usize, target: &mut String) -> Result<()> {
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in fragment.chars() {
        if escaped {
            let decoded = unescape(ch, line)?;
            if in_quotes {
                target.push(decoded);
            }
            escaped = false;
            continue;
        }

        match ch {
            '"' if in_quotes => return Ok(()),
            '"' => in_quotes = true,
            '\\' => escaped = true,
            _ if in_quotes => target.push(ch),
            _ => {}
        }
    }

    Ok(())
}

fn unescape(ch: char, line: usize) -> Result<char> {
    match ch {
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        '"' => Ok('"'),
        _ => Err(Error::Escape { line, ch }),
    }
}

/// Parse catalog lines (without their line terminators).
///
/// Aborts on the first malformed line; no partial catalog is returned.
pub fn parse_lines<I, S>(lines: I) -> Result<Catalog>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    for (index, line) in lines.into_iter().enumerate() {
        parser.feed(index + 1, line.as_ref())?;
    }
    Ok(parser.finish())
}

/// Parse a catalog from a buffered reader.
///
/// `path` only labels I/O errors.
pub fn parse_reader<R: BufRead>(reader: R, path: &Path) -> Result<Catalog> {
    let mut parser = Parser::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        parser.feed(index + 1, &line)?;
    }
    Ok(parser.finish())
}

/// Open and parse a catalog file. The file is closed before returning.
pub fn parse_file(path: &Path) -> Result<Catalog> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    parse_reader(BufReader::new(file), path)
}
