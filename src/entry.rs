//! Named values, the leaves of a document.

use crate::list::{private::Rename, ElementMut, Named};
use crate::value::Value;
use crate::{Error, Result};

/// Separator between an entry's name and its value literal.
pub const EQUALS: char = '=';

/// A name/value pair owned by a [`Section`](crate::Section).
///
/// Equality is structural: two entries are equal when both name and value are.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{Entry, Value};
///
/// let entry = Entry::new("Age", 30);
/// assert_eq!(entry.name(), "Age");
/// assert_eq!(entry.value(), &Value::Int32(30));
/// assert_eq!(entry.to_line(), "Age = 30");
/// ```
#[derive(Clone, Debug, PartialEq, Hash)]
pub struct Entry {
    name: String,
    value: Value,
}

impl Entry {
    /// Creates an entry from a name and anything convertible into a [`Value`].
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Entry {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an entry from optional parts.
    ///
    /// A missing name becomes the empty string and a missing value becomes empty text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::{Entry, Value};
    ///
    /// let entry = Entry::from_parts(None, None);
    /// assert_eq!(entry.name(), "");
    /// assert_eq!(entry.value(), &Value::Text(String::new()));
    /// ```
    pub fn from_parts(name: Option<String>, value: Option<Value>) -> Self {
        Entry {
            name: name.unwrap_or_default(),
            value: value.unwrap_or_default(),
        }
    }

    /// Parses a single `name = literal` line.
    ///
    /// The name is the text before the first `=` and the literal the text after
    /// it, both trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the line has no `=` and
    /// [`Error::InvalidValue`] if the literal is not recognized.
    pub fn from_line(line: &str) -> Result<Self> {
        let (name, literal) = line
            .split_once(EQUALS)
            .ok_or_else(|| Error::invalid_argument(format!("not an entry line: {:?}", line)))?;

        Ok(Entry {
            name: name.trim().to_string(),
            value: Value::infer(literal.trim())?,
        })
    }

    /// The entry's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry's value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replaces the value as a whole, returning the previous one.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.value, value.into())
    }

    /// Renders the entry as a `name = literal` line.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.name, EQUALS, self.value.to_literal())
    }

    /// Returns the name and the value's bare text.
    #[must_use]
    pub fn to_pair(&self) -> [String; 2] {
        [self.name.clone(), self.value.to_string()]
    }

    /// Consumes the entry, returning its name and value.
    #[must_use]
    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

impl Named for Entry {
    const KIND: &'static str = "entry";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Rename for Entry {
    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// An entry line splits on its first `=` and trims the name, so the name
    /// may hold neither `=` nor a line break, nor start or end with whitespace.
    fn check_name(name: &str) -> Result<()> {
        if name.contains(EQUALS) || name.contains('\n') || name.trim() != name {
            return Err(Error::invalid_argument(format!(
                "entry name {:?} cannot be written as an entry line",
                name
            )));
        }
        Ok(())
    }
}

impl ElementMut<'_, Entry> {
    /// Replaces the entry's value, returning the previous one.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Value {
        self.element.set_value(value)
    }
}

impl<V: Into<Value>> From<(String, V)> for Entry {
    fn from((name, value): (String, V)) -> Self {
        Entry::new(name, value)
    }
}

impl<V: Into<Value>> From<(&str, V)> for Entry {
    fn from((name, value): (&str, V)) -> Self {
        Entry::new(name, value)
    }
}

impl From<Entry> for (String, Value) {
    fn from(entry: Entry) -> Self {
        entry.into_parts()
    }
}

/// A two-item row of `[name, value]`; the value is stored as text.
impl TryFrom<Vec<String>> for Entry {
    type Error = Error;

    fn try_from(row: Vec<String>) -> Result<Self> {
        match <[String; 2]>::try_from(row) {
            Ok([name, value]) => Ok(Entry::new(name, value)),
            Err(row) => Err(Error::invalid_argument(format!(
                "an entry row must have 2 items, found {}",
                row.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_trims_whitespace() {
        let entry = Entry::from_line("Name = \"Ann\"").unwrap();
        assert_eq!(entry, Entry::new("Name", "Ann"));

        let entry = Entry::from_line("  Age=30  ").unwrap();
        assert_eq!(entry, Entry::new("Age", 30));

        let entry = Entry::from_line("Wide\t =\t'w'").unwrap();
        assert_eq!(entry, Entry::new("Wide", 'w'));
    }

    #[test]
    fn test_from_line_splits_on_first_equals() {
        let entry = Entry::from_line("Expr = \"1+1=2\"").unwrap();
        assert_eq!(entry.value(), &Value::Text("1+1=2".to_string()));
    }

    #[test]
    fn test_from_line_errors() {
        assert!(matches!(
            Entry::from_line("no delimiter"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Entry::from_line("Key = bare"),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn test_to_line() {
        assert_eq!(Entry::new("X", 1).to_line(), "X = 1");
        assert_eq!(Entry::new("S", "a b").to_line(), "S = \"a b\"");
        assert_eq!(Entry::new("F", 0.5).to_line(), "F = 0.5");
    }

    #[test]
    fn test_set_value_replaces_tag_and_payload() {
        let mut entry = Entry::new("K", 1);
        let old = entry.set_value("one");
        assert_eq!(old, Value::Int32(1));
        assert_eq!(entry.value(), &Value::Text("one".to_string()));

        entry.set_value(None::<i32>);
        assert_eq!(entry.value(), &Value::default());
    }

    #[test]
    fn test_row_conversion() {
        let entry = Entry::try_from(vec!["Port".to_string(), "8080".to_string()]).unwrap();
        assert_eq!(entry, Entry::new("Port", "8080"));
        assert_eq!(entry.to_pair(), ["Port".to_string(), "8080".to_string()]);

        assert!(matches!(
            Entry::try_from(vec!["Only".to_string()]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
