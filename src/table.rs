//! Tabular views of sections and documents.
//!
//! A [`Table`] is a named grid of text cells. A section maps to a two-column
//! table (`Name`, `Value`) with one row per entry, and a document maps to one
//! table per section. Importing goes through the usual uniqueness checks.
//!
//! Values are exported as their bare text and imported back as
//! [`Value::Text`](crate::Value::Text); value kinds do not survive the trip.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{from_str, Document};
//!
//! let doc = from_str("[User]\nName = \"Ann\"\nAge = 30").unwrap();
//! let tables = doc.to_tables();
//! assert_eq!(tables[0].rows[1], vec!["Age".to_string(), "30".to_string()]);
//!
//! let back = Document::from_tables(tables).unwrap();
//! assert_eq!(back.value("User", "Age").unwrap().as_str(), Some("30"));
//! ```

use crate::{Document, Entry, Error, Result, Section};
use serde::{Deserialize, Serialize};

/// Column holding entry names.
pub const NAME_COLUMN: &str = "Name";

/// Column holding entry values.
pub const VALUE_COLUMN: &str = "Value";

/// A named grid of text cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given columns and no rows.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Table {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates an empty table with the `Name` and `Value` columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Table;
    ///
    /// let table = Table::empty("Server");
    /// assert_eq!(table.columns, vec!["Name", "Value"]);
    /// assert!(table.rows.is_empty());
    /// ```
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, vec![NAME_COLUMN.to_string(), VALUE_COLUMN.to_string()])
    }

    /// Returns the position of the column called `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the row width differs from the
    /// number of columns.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::invalid_argument(format!(
                "row has {} cells but table `{}` has {} columns",
                row.len(),
                self.name,
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }
}

impl Section {
    /// Converts the section into a `Name`/`Value` table, one row per entry.
    #[must_use]
    pub fn to_table(&self) -> Table {
        let mut table = Table::empty(self.name());
        table.rows = self
            .iter()
            .map(|entry| entry.to_pair().to_vec())
            .collect();
        table
    }
}

/// Imports a `Name`/`Value` table; extra columns are ignored.
impl TryFrom<&Table> for Section {
    type Error = Error;

    fn try_from(table: &Table) -> Result<Self> {
        let (name_index, value_index) = table
            .column_index(NAME_COLUMN)
            .zip(table.column_index(VALUE_COLUMN))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "table `{}` needs `{}` and `{}` columns",
                    table.name, NAME_COLUMN, VALUE_COLUMN
                ))
            })?;

        let mut section = Section::new(table.name.as_str());
        for (index, row) in table.rows.iter().enumerate() {
            let (name, value) = row
                .get(name_index)
                .zip(row.get(value_index))
                .ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "row {} of table `{}` is missing cells",
                        index, table.name
                    ))
                })?;
            section.push(Entry::new(name.as_str(), value.as_str()))?;
        }
        Ok(section)
    }
}

impl TryFrom<Table> for Section {
    type Error = Error;

    fn try_from(table: Table) -> Result<Self> {
        Section::try_from(&table)
    }
}

impl Document {
    /// Converts every section into a table, in order.
    #[must_use]
    pub fn to_tables(&self) -> Vec<Table> {
        self.iter().map(Section::to_table).collect()
    }

    /// Builds a loaded document with one section per table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a malformed table and
    /// [`Error::DuplicateName`] for repeated section or entry names.
    pub fn from_tables<I>(tables: I) -> Result<Self>
    where
        I: IntoIterator<Item = Table>,
    {
        let sections = tables
            .into_iter()
            .map(Section::try_from)
            .collect::<Result<Vec<_>>>()?;
        Document::from_sections(sections)
    }
}
