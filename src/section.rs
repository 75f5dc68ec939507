//! Named, ordered groups of entries.

use crate::entry::Entry;
use crate::list::{private::Rename, ElementMut, Named, NamedList};
use crate::ser::Writer;
use crate::value::Value;
use crate::{Error, IniOptions, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// Opening delimiter of a section header.
pub const SECTION_START: char = '[';

/// Closing delimiter of a section header.
pub const SECTION_END: char = ']';

/// A named, ordered collection of uniquely named [`Entry`] values.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{Entry, Section, Value};
///
/// let mut section = Section::new("User");
/// section.push(Entry::new("Name", "Ann")).unwrap();
/// section.push(Entry::new("Age", 30)).unwrap();
///
/// assert_eq!(section.value("Age").unwrap(), &Value::Int32(30));
/// assert_eq!(section.to_text(), "[User]\nName = \"Ann\"\nAge = 30");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    name: String,
    entries: NamedList<Entry>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            entries: NamedList::new(),
        }
    }

    /// Creates a section holding `entries`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if two entries share a name and
    /// [`Error::InvalidArgument`] for a name that cannot be written as an entry line.
    pub fn from_entries<I>(name: impl Into<String>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Entry>,
    {
        Ok(Section {
            name: name.into(),
            entries: NamedList::try_from_iter(entries)?,
        })
    }

    /// Parses a standalone section block: a `[name]` header followed by entry lines.
    ///
    /// Blank lines are skipped; every other line after the header must be an
    /// entry line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Section;
    ///
    /// let section = Section::parse_text("[Server]\nHost = \"localhost\"\nPort = 8080").unwrap();
    /// assert_eq!(section.name(), "Server");
    /// assert_eq!(section.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for empty text, a missing header or a
    /// line that is not an entry line, plus any error from value inference or
    /// the uniqueness check. Errors carry their line number.
    pub fn parse_text(text: &str) -> Result<Self> {
        let mut lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (header_index, header) = lines
            .next()
            .ok_or_else(|| Error::invalid_argument("text is empty"))?;
        let name = header_name(header.trim()).ok_or_else(|| {
            Error::invalid_argument("text does not start with a section header")
                .at_line(header_index + 1)
        })?;

        let mut section = Section::new(name);
        for (index, line) in lines {
            Entry::from_line(line)
                .and_then(|entry| section.push(entry))
                .map_err(|e| e.at_line(index + 1))?;
        }

        Ok(section)
    }

    /// The section's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The section's entries.
    #[must_use]
    pub fn entries(&self) -> &NamedList<Entry> {
        &self.entries
    }

    /// Mutable access to the entries; insertion, removal and renaming still go
    /// through the list's uniqueness checks.
    pub fn entries_mut(&mut self) -> &mut NamedList<Entry> {
        &mut self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if the entry's name is already in use and
    /// [`Error::InvalidArgument`] for a name that cannot be written as an entry line.
    pub fn push(&mut self, entry: Entry) -> Result<()> {
        self.entries.push(entry)
    }

    /// Returns the entry called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such entry.
    pub fn entry(&self, name: &str) -> Result<&Entry> {
        self.entries.get_by_name(name)
    }

    /// Returns the value of the entry called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such entry.
    pub fn value(&self, name: &str) -> Result<&Value> {
        self.entry(name).map(Entry::value)
    }

    /// Sets the value of the entry called `name`, appending a new entry if needed.
    ///
    /// Returns the previous value, if there was one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when appending an entry whose name
    /// cannot be written as an entry line.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        if let Ok(mut entry) = self.entries.get_by_name_mut(name) {
            return Ok(Some(entry.set_value(value)));
        }
        self.entries.push(Entry::new(name, value))?;
        Ok(None)
    }

    /// Renames the entry called `old` to `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// See [`NamedList::rename`].
    pub fn rename_entry(&mut self, old: &str, new: &str) -> Result<()> {
        self.entries.rename(old, new)
    }

    /// Returns an iterator over the entries, in order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Entry> {
        self.entries.iter()
    }

    /// Renders the section as a header line followed by one line per entry.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut writer = Writer::new(IniOptions::default());
        writer.write_section(self);
        writer.into_inner()
    }
}

/// Returns the interior of a `[name]` header line.
pub(crate) fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix(SECTION_START)
        .and_then(|rest| rest.strip_suffix(SECTION_END))
}

impl Named for Section {
    const KIND: &'static str = "section";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Rename for Section {
    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// A header is one line, so the name may not hold a line break.
    fn check_name(name: &str) -> Result<()> {
        if name.contains('\n') {
            return Err(Error::invalid_argument(format!(
                "section name {:?} cannot be written as a header",
                name
            )));
        }
        Ok(())
    }
}

/// Entry-level edits on a section held by a document.
impl ElementMut<'_, Section> {
    /// Mutable access to the entries.
    pub fn entries_mut(&mut self) -> &mut NamedList<Entry> {
        self.element.entries_mut()
    }

    /// See [`Section::push`].
    ///
    /// # Errors
    ///
    /// See [`Section::push`].
    pub fn push(&mut self, entry: Entry) -> Result<()> {
        self.element.push(entry)
    }

    /// See [`Section::set_value`].
    ///
    /// # Errors
    ///
    /// See [`Section::set_value`].
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        self.element.set_value(name, value)
    }

    /// See [`Section::rename_entry`].
    ///
    /// # Errors
    ///
    /// See [`Section::rename_entry`].
    pub fn rename_entry(&mut self, old: &str, new: &str) -> Result<()> {
        self.element.rename_entry(old, new)
    }
}

/// Hashes the name and entry count; equal sections always hash equally.
impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.entries.len().hash(state);
    }
}

/// Serializes as a map from entry name to the value's bare text.
impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.name(), entry.value())?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Entry;
    type IntoIter = indexmap::map::Values<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
