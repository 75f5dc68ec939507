//! Configuration options for reading and writing INI documents.
//!
//! This module provides types to customize the codec:
//!
//! - [`IniOptions`]: Main configuration struct
//! - [`Newline`]: Line terminator written between rendered lines
//!
//! The structural delimiters (`[`, `]`, `=`, quotes) are fixed constants and
//! cannot be configured.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{from_str, to_string_with_options, IniOptions, Newline};
//!
//! let doc = from_str("[A]\nX = 1").unwrap();
//!
//! let options = IniOptions::new().with_newline(Newline::CrLf);
//! let text = to_string_with_options(&doc, &options);
//! assert_eq!(text, "[A]\r\nX = 1");
//! ```

/// Line terminator used when rendering INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini::Newline;
///
/// assert_eq!(Newline::Lf.as_str(), "\n");
/// assert_eq!(Newline::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
}

impl Newline {
    /// Returns the string representation of this line terminator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// Configuration options for the INI codec.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{IniOptions, Newline};
///
/// // Defaults: LF output, CR stripping on input, indented JSON
/// let options = IniOptions::new();
/// assert!(options.normalize_line_endings);
/// assert!(options.pretty_json);
///
/// let options = IniOptions::compact()
///     .with_newline(Newline::CrLf)
///     .with_normalize_line_endings(false);
/// assert!(!options.pretty_json);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniOptions {
    /// Line terminator written between rendered lines.
    pub newline: Newline,
    /// Strip one trailing `\r` from every input line before parsing.
    pub normalize_line_endings: bool,
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            newline: Newline::default(),
            normalize_line_endings: true,
            pretty_json: true,
        }
    }
}

impl IniOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for single-line JSON output.
    #[must_use]
    pub fn compact() -> Self {
        IniOptions {
            pretty_json: false,
            ..Default::default()
        }
    }

    /// Sets the line terminator for rendered text.
    #[must_use]
    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }

    /// Sets whether a trailing `\r` is stripped from each input line.
    ///
    /// When disabled, carriage returns stay part of the line, so a CRLF header
    /// such as `"[A]\r"` is no longer recognized.
    #[must_use]
    pub fn with_normalize_line_endings(mut self, normalize: bool) -> Self {
        self.normalize_line_endings = normalize;
        self
    }

    /// Sets whether JSON output is indented.
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }
}
