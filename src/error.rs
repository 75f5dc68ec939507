//! Error types for INI document manipulation and parsing.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side is
//! the single [`Error`] enum defined here.
//!
//! ## Error Categories
//!
//! - **Lookup errors**: [`Error::NotFound`] and [`Error::IndexOutOfRange`]
//! - **Uniqueness violations**: [`Error::DuplicateName`] when an insert, rename or
//!   replace would make two sections (or two entries in one section) share a name
//! - **Literal errors**: [`Error::InvalidValue`] when a value literal matches none of
//!   the recognized syntaxes
//! - **Conversion errors**: [`Error::InvalidArgument`] for malformed input to a
//!   conversion routine (wrong row shape, text that is not a section block), or a
//!   name that could not be written back as text
//! - **I/O errors**: [`Error::FileNotFound`] and [`Error::Io`]
//!
//! Errors raised while parsing text are wrapped in [`Error::Line`] so the message
//! points at the offending line. Use [`Error::kind`] to match on the category
//! without caring about the wrapper.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{from_str, ErrorKind};
//!
//! let err = from_str("[A]\n[A]\n").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DuplicateName);
//! assert!(err.to_string().contains("line 2"));
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Represents all possible errors raised by the document model and the codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Lookup by name found no match
    #[error("Not found: {0}")]
    NotFound(String),

    /// Two sections, or two entries of one section, would share a name
    #[error("Duplicate name: `{0}` is already in use")]
    DuplicateName(String),

    /// Index outside the valid range of the collection
    #[error("Index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A value literal matched none of the recognized syntaxes
    #[error("Invalid value literal: {0:?}")]
    InvalidValue(String),

    /// Malformed input to a conversion routine
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The file to load does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// JSON rendering failure
    #[error("JSON error: {0}")]
    Json(String),

    /// An error raised while parsing a specific line of text
    #[error("Error at line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

/// The category of an [`Error`], independent of any line information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    DuplicateName,
    IndexOutOfRange,
    InvalidValue,
    InvalidArgument,
    FileNotFound,
    Io,
    Json,
}

impl Error {
    /// Creates a not-found error for a missing section or entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Error;
    ///
    /// let err = Error::not_found("section", "Database");
    /// assert!(err.to_string().contains("Database"));
    /// ```
    pub fn not_found(what: &str, name: &str) -> Self {
        Error::NotFound(format!("no {} named `{}`", what, name))
    }

    /// Creates a duplicate-name error.
    pub fn duplicate_name(name: &str) -> Self {
        Error::DuplicateName(name.to_string())
    }

    /// Creates an index error for `index` in a collection of `len` elements.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates an invalid-value error carrying the rejected literal.
    pub fn invalid_value(literal: &str) -> Self {
        Error::InvalidValue(literal.to_string())
    }

    /// Creates an invalid-argument error with a display message.
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Wraps this error with the 1-based line number it was raised on.
    ///
    /// An error that already carries a line is returned unchanged.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Error::Line { .. } => self,
            other => Error::Line {
                line,
                source: Box::new(other),
            },
        }
    }

    /// Returns the line number for errors raised while parsing text.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Line { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the category of this error, looking through [`Error::Line`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::{Error, ErrorKind};
    ///
    /// let err = Error::invalid_value("nope").at_line(3);
    /// assert_eq!(err.kind(), ErrorKind::InvalidValue);
    /// assert_eq!(err.line(), Some(3));
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::DuplicateName(_) => ErrorKind::DuplicateName,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::InvalidValue(_) => ErrorKind::InvalidValue,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::FileNotFound(_) => ErrorKind::FileNotFound,
            Error::Io(_) => ErrorKind::Io,
            Error::Json(_) => ErrorKind::Json,
            Error::Line { source, .. } => source.kind(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
