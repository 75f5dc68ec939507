//! # serde_ini
//!
//! An ordered, name-unique document model for the classic INI format, with typed
//! values, lossless text round-tripping, and JSON export.
//!
//! ## Data Model
//!
//! - [`Document`]: an ordered collection of uniquely named [`Section`]s
//! - [`Section`]: an ordered collection of uniquely named [`Entry`]s
//! - [`Entry`]: a name and a typed [`Value`]
//! - [`Value`]: text, character, 32/64-bit integer, or single/double float, with
//!   the kind inferred from literal syntax
//!
//! Both collection levels share the [`NamedList`] shape: positional and by-name
//! access, insertion at an index, renaming in place, and strict name uniqueness.
//! A rejected operation never changes the collection.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_ini = "0.1"
//! ```
//!
//! ### Parsing and Rendering
//!
//! ```rust
//! use serde_ini::{from_str, to_string, Value};
//!
//! let doc = from_str("[User]\nName = \"Ann\"\nAge = 30\n").unwrap();
//!
//! let user = doc.section("User").unwrap();
//! assert_eq!(user.value("Name").unwrap(), &Value::Text("Ann".to_string()));
//! assert_eq!(user.value("Age").unwrap(), &Value::Int32(30));
//!
//! assert_eq!(to_string(&doc), "[User]\nName = \"Ann\"\nAge = 30");
//! ```
//!
//! ### Building Documents
//!
//! ```rust
//! use serde_ini::{Document, Entry, Section};
//!
//! let mut doc = Document::new();
//! doc.push(Section::new("B")).unwrap();
//! doc.insert(0, Section::from_entries("A", [Entry::new("X", 1)]).unwrap()).unwrap();
//!
//! // Names are unique per scope
//! assert!(doc.push(Section::new("A")).is_err());
//!
//! doc.rename_section("B", "C").unwrap();
//! assert_eq!(doc.to_text(), "[A]\nX = 1\n\n[C]");
//! ```
//!
//! ### Literal Documents with ini! Macro
//!
//! ```rust
//! use serde_ini::{ini, to_json_string};
//!
//! let doc = ini!({
//!     "User": { "Name": "Ann", "Age": 30 }
//! })
//! .unwrap();
//!
//! assert_eq!(to_json_string(&doc).unwrap(), r#"{"User":{"Name":"Ann","Age":"30"}}"#);
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result`]. Parsing is all-or-nothing: the
//! first invalid literal or repeated name aborts it, and the error carries the
//! offending line. See [`Error`] and [`ErrorKind`].
//!
//! ## Threading
//!
//! Every type here is plain owned data with no internal locking. Share a
//! document across threads the usual way (e.g. behind a `Mutex`).
//!
//! ## Format Reference
//!
//! See the [`format`] module for the exact dialect.

pub mod de;
pub mod document;
pub mod entry;
pub mod error;
pub mod format;
pub mod list;
pub mod macros;
pub mod options;
pub mod section;
pub mod ser;
pub mod table;
pub mod value;

pub use de::Parser;
pub use document::Document;
pub use entry::{Entry, EQUALS};
pub use error::{Error, ErrorKind, Result};
pub use list::{ElementMut, Named, NamedList};
pub use options::{IniOptions, Newline};
pub use section::{Section, SECTION_END, SECTION_START};
pub use ser::Writer;
pub use table::{Table, NAME_COLUMN, VALUE_COLUMN};
pub use value::{Value, ValueKind, CHAR_QUOTE, TEXT_QUOTE};

use std::io;
use std::path::Path;

/// Renders a document as INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{to_string, Document, Section};
///
/// let doc = Document::from_sections([Section::new("A"), Section::new("B")]).unwrap();
/// assert_eq!(to_string(&doc), "[A]\n\n[B]");
/// ```
#[must_use]
pub fn to_string(document: &Document) -> String {
    document.to_text()
}

/// Renders a document as INI text with custom options.
#[must_use]
pub fn to_string_with_options(document: &Document, options: &IniOptions) -> String {
    document.to_text_with_options(options)
}

/// Writes a document's INI text to a writer, without a trailing newline.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{from_str, to_writer};
///
/// let doc = from_str("[A]\nX = 1").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[A]\nX = 1");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(document.to_text().as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Saves a document to `path`, overwriting it. See [`Document::save`].
///
/// # Errors
///
/// Returns an error if the file cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_path(path: impl AsRef<Path>, document: &Document) -> Result<()> {
    document.save(path)
}

/// Renders a document as compact JSON, every value stringified.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string(document: &Document) -> Result<String> {
    document.to_json(&IniOptions::compact())
}

/// Renders a document as indented JSON, every value stringified.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string_pretty(document: &Document) -> Result<String> {
    document.to_json(&IniOptions::new())
}

/// Parses INI text into a document.
///
/// # Errors
///
/// Returns the first invalid literal or repeated name, with its line number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    Parser::new(s).parse()
}

/// Parses INI text with custom options.
///
/// # Errors
///
/// Returns the first invalid literal or repeated name, with its line number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &IniOptions) -> Result<Document> {
    Parser::with_options(s, options).parse()
}

/// Parses INI text from a byte slice.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(Error::invalid_argument)?;
    from_str(s)
}

/// Reads a reader to the end and parses its contents.
///
/// # Examples
///
/// ```rust
/// use serde_ini::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[A]\nX = 1")).unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Loads and parses the file at `path`. See [`Document::load`].
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] for a missing file, or any read/parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path(path: impl AsRef<Path>) -> Result<Document> {
    Document::load(path)
}
