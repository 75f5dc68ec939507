//! INI text parsing.
//!
//! This module provides the [`Parser`] that turns INI text into a [`Document`].
//!
//! ## Overview
//!
//! Parsing is a single forward pass over the lines of the input, carrying one
//! piece of state: the section currently being filled.
//!
//! - **Section headers**: a line starting with `[` and ending with `]` commits the
//!   open section (if any) and opens a new one named by the interior
//! - **Entry lines**: a line containing `=` while a section is open becomes an
//!   entry; the literal after `=` goes through [`Value::infer`](crate::Value::infer)
//! - **Everything else** (blank lines, free text, entries before the first header)
//!   is ignored
//!
//! The first invalid literal or repeated name aborts the whole parse; no partial
//! document is ever returned. Errors carry the line they were raised on.
//!
//! ## Usage
//!
//! Most users should use [`from_str`](crate::from_str) or [`Document::parse`]:
//!
//! ```rust
//! use serde_ini::{Parser, IniOptions, Value};
//!
//! let doc = Parser::with_options("[User]\r\nAge = 30\r\n", &IniOptions::new())
//!     .parse()
//!     .unwrap();
//! assert_eq!(doc.value("User", "Age").unwrap(), &Value::Int32(30));
//! ```

use crate::entry::{Entry, EQUALS};
use crate::list::NamedList;
use crate::section::{header_name, Section};
use crate::{Document, IniOptions, Result};

/// The INI parser.
///
/// Created via [`Parser::new`] or [`Parser::with_options`] and consumed by
/// [`Parser::parse`].
pub struct Parser<'a> {
    input: &'a str,
    normalize_line_endings: bool,
    sections: NamedList<Section>,
    // Section being filled, with the line of its header.
    current: Option<(usize, Section)>,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &IniOptions::default())
    }

    /// Creates a parser with custom options.
    #[must_use]
    pub fn with_options(input: &'a str, options: &IniOptions) -> Self {
        Parser {
            input,
            normalize_line_endings: options.normalize_line_endings,
            sections: NamedList::new(),
            current: None,
        }
    }

    /// Parses the whole input into a loaded [`Document`].
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidValue`](crate::Error::InvalidValue) or
    /// [`Error::DuplicateName`](crate::Error::DuplicateName), wrapped in
    /// [`Error::Line`](crate::Error::Line).
    pub fn parse(mut self) -> Result<Document> {
        let input = self.input;
        for (index, raw) in input.split('\n').enumerate() {
            let line = if self.normalize_line_endings {
                raw.strip_suffix('\r').unwrap_or(raw)
            } else {
                raw
            };
            self.parse_line(index + 1, line)?;
        }
        self.commit()?;

        tracing::debug!(sections = self.sections.len(), "parsed INI document");
        Ok(Document::from_list(self.sections))
    }

    fn parse_line(&mut self, number: usize, line: &str) -> Result<()> {
        if let Some(name) = header_name(line) {
            self.commit()?;
            self.current = Some((number, Section::new(name)));
            return Ok(());
        }

        if let Some((_, section)) = self.current.as_mut() {
            if line.contains(EQUALS) {
                Entry::from_line(line)
                    .and_then(|entry| section.push(entry))
                    .map_err(|e| e.at_line(number))?;
            }
        }

        Ok(())
    }

    /// Moves the open section, if any, into the document.
    fn commit(&mut self) -> Result<()> {
        if let Some((number, section)) = self.current.take() {
            tracing::trace!(section = section.name(), entries = section.len(), "committing section");
            self.sections.push(section).map_err(|e| e.at_line(number))?;
        }
        Ok(())
    }
}
