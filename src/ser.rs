//! INI text and JSON rendering.
//!
//! This module provides the [`Writer`] that renders a [`Document`] back to INI
//! text, plus the JSON export.
//!
//! ## Layout
//!
//! ```text
//! [SectionName]
//! EntryName = "text value"
//! EntryName2 = 'c'
//!
//! [Other]
//! EntryName3 = 42
//! ```
//!
//! Sections and entries are written in their stored order with a blank line
//! between sections. Entries are always written as `name = literal`, so the
//! output parses back into an equal document (see [`Value`](crate::Value) for
//! the numeric caveats).
//!
//! ## JSON
//!
//! The JSON export maps every section to an object of entry names to the bare
//! text of their values. It is a one-way export: every value becomes a JSON
//! string, so value kinds are not preserved.
//!
//! ```rust
//! use serde_ini::{from_str, to_json_string};
//!
//! let doc = from_str("[User]\nName = \"Ann\"\nAge = 30").unwrap();
//! assert_eq!(
//!     to_json_string(&doc).unwrap(),
//!     r#"{"User":{"Name":"Ann","Age":"30"}}"#
//! );
//! ```

use crate::entry::Entry;
use crate::section::{Section, SECTION_END, SECTION_START};
use crate::{Document, IniOptions, Result};

/// The INI text writer.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{Document, Entry, IniOptions, Section, Writer};
///
/// let mut doc = Document::new();
/// doc.push(Section::from_entries("A", [Entry::new("X", 1)]).unwrap()).unwrap();
/// doc.push(Section::new("B")).unwrap();
///
/// let mut writer = Writer::new(IniOptions::new());
/// writer.write_document(&doc);
/// assert_eq!(writer.into_inner(), "[A]\nX = 1\n\n[B]");
/// ```
pub struct Writer {
    output: String,
    options: IniOptions,
}

impl Writer {
    /// Creates a writer with an empty buffer.
    ///
    /// Only [`IniOptions::newline`] affects rendering; the other options are
    /// read by the parser and the JSON export.
    #[must_use]
    pub fn new(options: IniOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Consumes the writer and returns the rendered text.
    ///
    /// Surrounding whitespace is trimmed, so the text never ends with a line
    /// terminator. An empty writer yields an empty string.
    #[must_use]
    pub fn into_inner(self) -> String {
        let trimmed = self.output.trim();
        if trimmed.len() == self.output.len() {
            self.output
        } else {
            trimmed.to_string()
        }
    }

    /// Writes every section, separated by a blank line.
    pub fn write_document(&mut self, document: &Document) {
        for (index, section) in document.iter().enumerate() {
            if index > 0 {
                self.write_newline();
                self.write_newline();
            }
            self.write_section(section);
        }
    }

    /// Writes a `[name]` header followed by one line per entry.
    pub fn write_section(&mut self, section: &Section) {
        self.output.push(SECTION_START);
        self.output.push_str(section.name());
        self.output.push(SECTION_END);

        for entry in section {
            self.write_newline();
            self.write_entry(entry);
        }
    }

    /// Writes a single `name = literal` line without a terminator.
    pub fn write_entry(&mut self, entry: &Entry) {
        self.output.push_str(&entry.to_line());
    }

    fn write_newline(&mut self) {
        self.output.push_str(self.options.newline.as_str());
    }
}

/// Renders a document as JSON text, compact or indented per `options`.
pub(crate) fn document_to_json(document: &Document, options: &IniOptions) -> Result<String> {
    let json = if options.pretty_json {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}
