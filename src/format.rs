//! INI Format Reference
//!
//! This module documents the INI dialect read and written by this library.
//!
//! # Overview
//!
//! A document is a sequence of named sections, each holding a sequence of
//! named, typed entries. Order is significant at both levels and is preserved
//! through a parse/render round trip.
//!
//! ```text
//! [SectionName]
//! EntryName = "text value"
//! EntryName2 = 'c'
//! EntryName3 = 42
//!
//! [Other]
//! Ratio = 0.75
//! ```
//!
//! # Lines
//!
//! Input is split on `\n`. By default one trailing `\r` is removed from every
//! line, so CRLF files read the same as LF files (see
//! [`IniOptions::with_normalize_line_endings`](crate::IniOptions::with_normalize_line_endings)).
//!
//! | Line | Meaning |
//! |------|---------|
//! | Starts with `[` and ends with `]` | Section header; the name is the interior |
//! | Contains `=` inside a section | Entry line |
//! | Anything else | Ignored |
//!
//! **Rules**:
//! - Header detection looks at the raw line: `" [A]"` is not a header
//! - A header line is never also an entry line, even if it contains `=`
//! - Entry lines before the first header are ignored
//! - The entry name is the text before the first `=`, trimmed of whitespace
//! - The literal is the text after the first `=`, trimmed of whitespace
//! - Section names are unique within a document; entry names are unique within
//!   their section; both comparisons are case-sensitive
//!
//! # Literals
//!
//! | Literal | Kind | Example |
//! |---------|------|---------|
//! | `"…"` | Text | `Name = "Ann"` |
//! | `'…'` | Char (first character of the interior) | `Grade = 'A'` |
//! | 32-bit integer | Int32 | `Age = 30` |
//! | 64-bit integer | Int64 | `Size = 8589934592` |
//! | Float | Float64 | `Ratio = 0.75` |
//!
//! Quotes are stripped without escape processing, so `"a\"b"` is the text
//! `a\"b`. Anything else, including bare words, is an invalid literal and
//! aborts the parse.
//!
//! # Rendering
//!
//! Each section renders as its header followed by `name = literal` lines;
//! sections are separated by one blank line and the whole output is trimmed.
//! Floats always render with a fractional part or exponent (`1.0`), so they
//! parse back as floats.
//!
//! # Names
//!
//! Collections reject names that could not be written back as text, with
//! [`Error::InvalidArgument`](crate::Error::InvalidArgument):
//!
//! | Name | Rejected when it |
//! |------|------------------|
//! | Section | contains a line break |
//! | Entry | contains `=` or a line break, or starts or ends with whitespace |
//!
//! Anything else round-trips, including empty names, brackets inside names,
//! inner spaces, and section names with `=` or surrounding spaces.
//!
//! Known asymmetries:
//! - `Float32` values parse back as `Float64`
//! - `Int64` values inside the `i32` range parse back as `Int32`
//! - Text or a character containing a line break cannot be represented
//! - `NaN` renders and re-parses, but never compares equal to itself
//!
//! # Not Supported
//!
//! - Comments
//! - Nested sections
//! - Multi-line values and line continuations
//! - Escape sequences in quoted literals
