//! The root of an INI document.

use crate::de::Parser;
use crate::list::{ElementMut, NamedList};
use crate::section::Section;
use crate::ser::{self, Writer};
use crate::value::Value;
use crate::{Error, IniOptions, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::Path;
use std::str::FromStr;

/// An ordered collection of uniquely named [`Section`] values.
///
/// A document also tracks whether it is *loaded*: `true` once a parse, file
/// load or bulk construction has fully completed, `false` for a fresh
/// document, while a load is in progress, and after a failed load. The flag
/// signals readiness only; it never gates an operation.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{Document, Entry, Section, Value};
///
/// let mut doc = Document::new();
/// assert!(!doc.is_loaded());
///
/// doc.push(Section::new("Server")).unwrap();
/// doc.section_mut("Server").unwrap().push(Entry::new("Port", 8080)).unwrap();
///
/// assert_eq!(doc.value("Server", "Port").unwrap(), &Value::Int32(8080));
/// assert_eq!(doc.to_text(), "[Server]\nPort = 8080");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Document {
    sections: NamedList<Section>,
    loaded: bool,
}

impl Document {
    /// Creates an empty, unloaded document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loaded document holding `sections`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if two sections share a name and
    /// [`Error::InvalidArgument`] for a name with a line break.
    pub fn from_sections<I>(sections: I) -> Result<Self>
    where
        I: IntoIterator<Item = Section>,
    {
        Ok(Self::from_list(NamedList::try_from_iter(sections)?))
    }

    pub(crate) fn from_list(sections: NamedList<Section>) -> Self {
        Document {
            sections,
            loaded: true,
        }
    }

    /// Parses INI text into a new document.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse`].
    pub fn parse(text: &str) -> Result<Self> {
        Parser::new(text).parse()
    }

    /// Loads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the path does not exist, [`Error::Io`]
    /// if it cannot be read, or any parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut document = Document::new();
        document.read_from_file(path)?;
        Ok(document)
    }

    /// Replaces the contents of this document with the parsed file at `path`.
    ///
    /// The document is cleared first; on failure it stays empty and unloaded.
    ///
    /// # Errors
    ///
    /// See [`Document::load`].
    pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_from_file_with_options(path, &IniOptions::default())
    }

    /// Like [`Document::read_from_file`], with custom options.
    ///
    /// # Errors
    ///
    /// See [`Document::load`].
    pub fn read_from_file_with_options(
        &mut self,
        path: impl AsRef<Path>,
        options: &IniOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        self.reset();

        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::io(&e.to_string()),
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loading INI file");

        self.read_from_text_with_options(&text, options)
    }

    /// Replaces the contents of this document with the parsed `text`.
    ///
    /// Parsing is all-or-nothing: on failure the document is left empty and
    /// unloaded.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse`].
    pub fn read_from_text(&mut self, text: &str) -> Result<()> {
        self.read_from_text_with_options(text, &IniOptions::default())
    }

    /// Like [`Document::read_from_text`], with custom options.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse`].
    pub fn read_from_text_with_options(&mut self, text: &str, options: &IniOptions) -> Result<()> {
        self.reset();
        *self = Parser::with_options(text, options).parse()?;
        Ok(())
    }

    /// Writes the rendered text plus a trailing newline to `path`, overwriting it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with_options(path, &IniOptions::default())
    }

    /// Like [`Document::save`], with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save_with_options(&self, path: impl AsRef<Path>, options: &IniOptions) -> Result<()> {
        let path = path.as_ref();
        let mut text = self.to_text_with_options(options);
        text.push_str(options.newline.as_str());

        tracing::debug!(path = %path.display(), sections = self.len(), "saving INI file");
        fs::write(path, text).map_err(|e| Error::io(&e.to_string()))
    }

    fn reset(&mut self) {
        self.loaded = false;
        self.sections.clear();
    }

    /// Returns `true` once a load or bulk construction has completed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The document's sections.
    #[must_use]
    pub fn sections(&self) -> &NamedList<Section> {
        &self.sections
    }

    /// Mutable access to the sections; insertion, removal and renaming still go
    /// through the list's uniqueness checks.
    pub fn sections_mut(&mut self) -> &mut NamedList<Section> {
        &mut self.sections
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Removes every section. The loaded flag is left as is.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Returns the section called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such section.
    pub fn section(&self, name: &str) -> Result<&Section> {
        self.sections.get_by_name(name)
    }

    /// Returns name-locked mutable access to the section called `name`.
    ///
    /// The handle edits the section's entries; renaming or replacing the
    /// section goes through [`Document::rename_section`] or
    /// [`NamedList::set_by_name`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such section.
    pub fn section_mut(&mut self, name: &str) -> Result<ElementMut<'_, Section>> {
        self.sections.get_by_name_mut(name)
    }

    /// Returns the value of entry `entry` in section `section`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if either the section or the entry is absent.
    pub fn value(&self, section: &str, entry: &str) -> Result<&Value> {
        self.section(section)?.value(entry)
    }

    /// Appends a section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if the section's name is already in use and
    /// [`Error::InvalidArgument`] for a name with a line break.
    pub fn push(&mut self, section: Section) -> Result<()> {
        self.sections.push(section)
    }

    /// Inserts a section at `index`.
    ///
    /// # Errors
    ///
    /// See [`NamedList::insert`].
    pub fn insert(&mut self, index: usize, section: Section) -> Result<()> {
        self.sections.insert(index, section)
    }

    /// Removes the section called `name`. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.sections.remove_by_name(name)
    }

    /// Renames the section called `old` to `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// See [`NamedList::rename`].
    pub fn rename_section(&mut self, old: &str, new: &str) -> Result<()> {
        self.sections.rename(old, new)
    }

    /// Returns an iterator over the sections, in order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Section> {
        self.sections.iter()
    }

    /// Renders the document as INI text.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_text_with_options(&IniOptions::default())
    }

    /// Renders the document as INI text with custom options.
    #[must_use]
    pub fn to_text_with_options(&self, options: &IniOptions) -> String {
        let mut writer = Writer::new(options.clone());
        writer.write_document(self);
        writer.into_inner()
    }

    /// Renders the document as JSON, every value stringified.
    ///
    /// Output is indented unless [`IniOptions::pretty_json`] is off, as with
    /// [`IniOptions::compact`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json(&self, options: &IniOptions) -> Result<String> {
        ser::document_to_json(self, options)
    }
}

/// Documents are equal when their sections are equal in order; the loaded flag
/// is not compared.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

/// Hashes the section names in order.
impl Hash for Document {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for name in self.sections.names() {
            name.hash(state);
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Document::parse(s)
    }
}

/// Serializes as a map from section name to section.
impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(section.name(), section)?;
        }
        map.end()
    }
}

impl IntoIterator for Document {
    type Item = Section;
    type IntoIter = indexmap::map::IntoValues<String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = indexmap::map::Values<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
