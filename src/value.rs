//! Typed scalar values held by INI entries.
//!
//! This module provides the [`Value`] enum, a closed set of scalar variants whose
//! tag is inferred from the literal syntax on the right-hand side of an entry line.
//!
//! ## Literal Syntax
//!
//! | Literal | Variant | Example |
//! |---------|---------|---------|
//! | Double-quoted | [`Value::Text`] | `"hello"` |
//! | Single-quoted | [`Value::Char`] | `'Q'` |
//! | Fits in `i32` | [`Value::Int32`] | `42` |
//! | Fits in `i64` | [`Value::Int64`] | `9000000000` |
//! | Parses as `f64` | [`Value::Float64`] | `2.5` |
//!
//! [`Value::Float32`] is never produced by inference; it only exists for values built
//! in memory, and renders to a literal that re-parses as [`Value::Float64`].
//!
//! `NaN`, `inf` and `-inf` are accepted as float literals. A `NaN` value never
//! equals anything, itself included, so a document holding one never compares
//! equal to its own round trip even though the text is identical.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use serde_ini::Value;
//!
//! let value = Value::infer("'Q'").unwrap();
//! assert_eq!(value, Value::Char('Q'));
//! assert_eq!(value.to_literal(), "'Q'");
//!
//! // Display gives the bare text without quotes
//! assert_eq!(Value::from("Ann").to_string(), "Ann");
//! ```

use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Opening and closing delimiter of a text literal.
pub const TEXT_QUOTE: char = '"';

/// Opening and closing delimiter of a character literal.
pub const CHAR_QUOTE: char = '\'';

/// A typed scalar value.
///
/// The variant always matches the payload; a value is replaced as a whole rather
/// than having its payload and tag changed independently.
///
/// # Examples
///
/// ```rust
/// use serde_ini::Value;
///
/// let text = Value::from("hello");
/// let num = Value::from(42);
///
/// assert!(text.is_text());
/// assert!(num.is_integer());
/// assert_eq!(num.as_i64(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Char(char),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

/// The tag of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Char,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Char => "char",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
        };
        f.write_str(name)
    }
}

impl Default for Value {
    /// An absent value is an empty text value.
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl Value {
    /// Infers a typed value from its literal syntax.
    ///
    /// The first matching rule wins: double-quoted text, single-quoted character,
    /// 32-bit integer, 64-bit integer, double-precision float. Quotes are stripped
    /// without any escape processing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Value;
    ///
    /// assert_eq!(Value::infer("\"Ann\"").unwrap(), Value::Text("Ann".to_string()));
    /// assert_eq!(Value::infer("30").unwrap(), Value::Int32(30));
    /// assert_eq!(Value::infer("2.5").unwrap(), Value::Float64(2.5));
    /// assert!(Value::infer("bare words").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the literal matches none of the syntaxes.
    pub fn infer(literal: &str) -> Result<Value> {
        if let Some(inner) = strip_quotes(literal, TEXT_QUOTE) {
            return Ok(Value::Text(inner.to_string()));
        }

        if let Some(inner) = strip_quotes(literal, CHAR_QUOTE) {
            return inner
                .chars()
                .next()
                .map(Value::Char)
                .ok_or_else(|| Error::invalid_value(literal));
        }

        if let Ok(i) = literal.parse::<i32>() {
            return Ok(Value::Int32(i));
        }

        if let Ok(i) = literal.parse::<i64>() {
            return Ok(Value::Int64(i));
        }

        if let Ok(f) = literal.parse::<f64>() {
            return Ok(Value::Float64(f));
        }

        Err(Error::invalid_value(literal))
    }

    /// Renders the value in literal syntax, the inverse of [`Value::infer`].
    ///
    /// Text is wrapped in double quotes and characters in single quotes. Floats
    /// always keep a fractional part or exponent so they re-infer as floats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Value;
    ///
    /// assert_eq!(Value::from("hi").to_literal(), "\"hi\"");
    /// assert_eq!(Value::Char('Q').to_literal(), "'Q'");
    /// assert_eq!(Value::Int32(7).to_literal(), "7");
    /// assert_eq!(Value::Float64(1.0).to_literal(), "1.0");
    /// ```
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Value::Text(s) => format!("{}{}{}", TEXT_QUOTE, s, TEXT_QUOTE),
            Value::Char(c) => format!("{}{}{}", CHAR_QUOTE, c, CHAR_QUOTE),
            Value::Int32(i) => i.to_string(),
            Value::Int64(i) => i.to_string(),
            // Debug keeps the `.0` on whole floats; Display would drop it.
            Value::Float32(f) => format!("{:?}", f),
            Value::Float64(f) => format!("{:?}", f),
        }
    }

    /// Returns the tag of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Char(_) => ValueKind::Char,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
        }
    }

    /// Returns `true` if the value is text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if the value is a single character.
    #[inline]
    #[must_use]
    pub const fn is_char(&self) -> bool {
        matches!(self, Value::Char(_))
    }

    /// Returns `true` if the value is a 32- or 64-bit integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Int32(_) | Value::Int64(_))
    }

    /// Returns `true` if the value is a single- or double-precision float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float32(_) | Value::Float64(_))
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a character, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// If the value is an integer of either width, returns it widened to `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Value;
    ///
    /// assert_eq!(Value::Int32(-3).as_i64(), Some(-3));
    /// assert_eq!(Value::Int64(1 << 40).as_i64(), Some(1 << 40));
    /// assert_eq!(Value::Float64(1.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(i) => Some(i64::from(*i)),
            Value::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int32(i) => Some(f64::from(*i)),
            Value::Int64(i) => Some(*i as f64),
            Value::Float32(f) => Some(f64::from(*f)),
            Value::Float64(f) => Some(*f),
            _ => None,
        }
    }
}

/// Returns the interior of `literal` if it is wrapped in `quote` on both ends.
fn strip_quotes(literal: &str, quote: char) -> Option<&str> {
    literal
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Char(c) => write!(f, "{}", c),
            Value::Int32(i) => write!(f, "{}", i),
            Value::Int64(i) => write!(f, "{}", i),
            Value::Float32(fl) => write!(f, "{}", fl),
            Value::Float64(fl) => write!(f, "{}", fl),
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Value::infer(s)
    }
}

/// Signed zeros compare equal, so both hash as `+0.0`. NaN is never equal to
/// itself, so its hash carries no guarantee.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Text(s) => s.hash(state),
            Value::Char(c) => c.hash(state),
            Value::Int32(i) => i.hash(state),
            Value::Int64(i) => i.hash(state),
            Value::Float32(f) => (if *f == 0.0 { 0.0f32 } else { *f }).to_bits().hash(state),
            Value::Float64(f) => (if *f == 0.0 { 0.0f64 } else { *f }).to_bits().hash(state),
        }
    }
}

/// Values export as their bare text, whatever their kind.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// TryFrom implementations for extracting payloads from Value
impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(Error::invalid_argument(format!(
                "expected text, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for char {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Char(c) => Ok(c),
            other => Err(Error::invalid_argument(format!(
                "expected char, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_i64().ok_or_else(|| {
            Error::invalid_argument(format!("expected integer, found {}", value.kind()))
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_f64().ok_or_else(|| {
            Error::invalid_argument(format!("expected number, found {}", value.kind()))
        })
    }
}

// From implementations for creating Value from primitives
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

/// `None` becomes an empty text value rather than being rejected.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_signed_zero_hashes_equally() {
        assert_eq!(Value::Float64(0.0), Value::Float64(-0.0));
        assert_eq!(hash_of(&Value::Float64(0.0)), hash_of(&Value::Float64(-0.0)));
        assert_eq!(hash_of(&Value::Float32(0.0)), hash_of(&Value::Float32(-0.0)));
    }

    #[test]
    fn test_nan_literal() {
        let nan = Value::infer("NaN").unwrap();
        assert!(nan.as_f64().unwrap().is_nan());
        assert_eq!(nan.to_literal(), "NaN");
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn test_infer_precedence() {
        assert_eq!(Value::infer("\"42\"").unwrap(), Value::Text("42".to_string()));
        assert_eq!(Value::infer("'4'").unwrap(), Value::Char('4'));
        assert_eq!(Value::infer("42").unwrap(), Value::Int32(42));
        assert_eq!(
            Value::infer("4294967296").unwrap(),
            Value::Int64(4_294_967_296)
        );
        assert_eq!(Value::infer("-0.5").unwrap(), Value::Float64(-0.5));
    }

    #[test]
    fn test_infer_quotes_are_not_unescaped() {
        assert_eq!(
            Value::infer(r#""a\"b""#).unwrap(),
            Value::Text(r#"a\"b"#.to_string())
        );
        assert_eq!(Value::infer("\"\"").unwrap(), Value::Text(String::new()));
    }

    #[test]
    fn test_infer_char_takes_first_character() {
        assert_eq!(Value::infer("'xyz'").unwrap(), Value::Char('x'));
        assert_eq!(Value::infer("'é'").unwrap(), Value::Char('é'));
    }

    #[test]
    fn test_infer_rejects_unrecognized() {
        for literal in ["", "\"", "'", "''", "abc", "\"open", "1,5"] {
            let err = Value::infer(literal).unwrap_err();
            assert_eq!(err, Error::InvalidValue(literal.to_string()), "{literal:?}");
        }
    }

    #[test]
    fn test_literal_roundtrip() {
        let values = [
            Value::from("Ann"),
            Value::Char('Q'),
            Value::Int32(i32::MIN),
            Value::Int64(i64::MAX),
            Value::Float64(1.0),
            Value::Float64(1e300),
            Value::Float64(-0.125),
        ];
        for value in values {
            assert_eq!(Value::infer(&value.to_literal()).unwrap(), value);
        }
    }

    #[test]
    fn test_float32_widens_on_reparse() {
        let literal = Value::Float32(1.5).to_literal();
        assert_eq!(literal, "1.5");
        assert_eq!(Value::infer(&literal).unwrap(), Value::Float64(1.5));
    }

    #[test]
    fn test_display_is_unquoted() {
        assert_eq!(Value::from("x y").to_string(), "x y");
        assert_eq!(Value::Char('c').to_string(), "c");
        assert_eq!(Value::Float64(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_none_is_empty_text() {
        assert_eq!(Value::from(None::<i32>), Value::Text(String::new()));
        assert_eq!(Value::from(Some(3)), Value::Int32(3));
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(String::try_from(Value::from("s")).unwrap(), "s");
        assert_eq!(char::try_from(Value::Char('z')).unwrap(), 'z');
        assert_eq!(i64::try_from(Value::Int32(5)).unwrap(), 5);
        assert_eq!(f64::try_from(Value::Int64(2)).unwrap(), 2.0);
        assert!(i64::try_from(Value::from("5")).is_err());
        assert!(String::try_from(Value::Int32(5)).is_err());
    }

    #[test]
    fn test_kind_distinguishes_widths() {
        assert_ne!(Value::Int32(1), Value::Int64(1));
        assert_eq!(Value::Int32(1).kind(), ValueKind::Int32);
        assert_eq!(Value::Float32(1.0).kind().to_string(), "float32");
    }
}
