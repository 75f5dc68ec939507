//! Ordered, name-unique collections.
//!
//! This module provides [`NamedList`], the collection shape shared by a
//! [`Document`](crate::Document) (holding sections) and a
//! [`Section`](crate::Section) (holding entries). Each list enforces its own
//! uniqueness scope: an entry name is unique only within its section, a section
//! name only within its document.
//!
//! ## Why IndexMap?
//!
//! Elements are stored in an [`IndexMap`] keyed by name, which gives:
//!
//! - **Positional access**: `get(index)`, `insert(index, ..)` and `remove_at(index)`
//! - **Fast lookup**: average O(1) lookup by name
//! - **Stable order**: iteration follows insertion order, which is what gets
//!   rendered back to text
//!
//! `IndexMap` equality ignores order, so [`NamedList`] compares pairwise instead.
//!
//! ## Names
//!
//! The key and the element's own name always agree. Mutable access goes through
//! [`ElementMut`], which can change an element's contents but never its name,
//! and names that could not be written back to text are rejected on the way in.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{Entry, NamedList};
//!
//! let mut list = NamedList::new();
//! list.push(Entry::new("a", 1)).unwrap();
//! list.push(Entry::new("c", 3)).unwrap();
//! list.insert(1, Entry::new("b", 2)).unwrap();
//!
//! let names: Vec<_> = list.names().collect();
//! assert_eq!(names, vec!["a", "b", "c"]);
//!
//! // Names are unique within the list
//! assert!(list.push(Entry::new("a", 10)).is_err());
//! assert_eq!(list.len(), 3);
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::ops::Deref;

/// An element that can be stored in a [`NamedList`].
///
/// Only the owning list may change an element's name, which keeps the list's
/// uniqueness invariant intact. The renaming half of this trait is sealed.
pub trait Named: private::Rename {
    /// What the element is called in error messages, e.g. `"section"`.
    const KIND: &'static str;

    /// The element's name, unique within its list.
    fn name(&self) -> &str;
}

pub(crate) mod private {
    pub trait Rename {
        fn set_name(&mut self, name: String);

        /// Rejects names that would not survive a render/parse round trip.
        fn check_name(name: &str) -> crate::Result<()>;
    }
}

/// Mutable access to an element held by a [`NamedList`].
///
/// Dereferences to the element for reading. Its mutators change the element's
/// contents only: the name stays under the list's control, and replacing the
/// element as a whole goes through [`NamedList::set`].
///
/// # Examples
///
/// ```rust
/// use serde_ini::{from_str, Value};
///
/// let mut doc = from_str("[A]\nX = 1").unwrap();
/// let mut section = doc.section_mut("A").unwrap();
/// section.set_value("X", 2).unwrap();
/// assert_eq!(section.name(), "A");
/// assert_eq!(doc.value("A", "X").unwrap(), &Value::Int32(2));
/// ```
///
/// The element cannot be overwritten through the handle:
///
/// ```compile_fail
/// use serde_ini::{Document, Section};
///
/// let mut doc = Document::from_sections([Section::new("A"), Section::new("B")]).unwrap();
/// *doc.section_mut("A").unwrap() = Section::new("B");
/// ```
#[derive(Debug)]
pub struct ElementMut<'a, E> {
    pub(crate) element: &'a mut E,
}

impl<E> Deref for ElementMut<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        &*self.element
    }
}

/// An ordered collection of uniquely named elements.
///
/// Every failing operation leaves the list unchanged.
#[derive(Clone)]
pub struct NamedList<E> {
    items: IndexMap<String, E>,
}

impl<E: Named> NamedList<E> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        NamedList {
            items: IndexMap::new(),
        }
    }

    /// Creates an empty list with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NamedList {
            items: IndexMap::with_capacity(capacity),
        }
    }

    /// Builds a list by appending every element in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] on the first repeated name and
    /// [`Error::InvalidArgument`] on the first name that cannot be written as text.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for element in iter {
            list.push(element)?;
        }
        Ok(list)
    }

    /// Returns the number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&E> {
        self.items
            .get_index(index)
            .map(|(_, element)| element)
            .ok_or_else(|| Error::index_out_of_range(index, self.len()))
    }

    /// Returns name-locked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<ElementMut<'_, E>> {
        let len = self.len();
        self.items
            .get_index_mut(index)
            .map(|(_, element)| ElementMut { element })
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Returns the element called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element has that name.
    pub fn get_by_name(&self, name: &str) -> Result<&E> {
        self.find(name).ok_or_else(|| Error::not_found(E::KIND, name))
    }

    /// Returns name-locked mutable access to the element called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element has that name.
    pub fn get_by_name_mut(&mut self, name: &str) -> Result<ElementMut<'_, E>> {
        self.items
            .get_mut(name)
            .map(|element| ElementMut { element })
            .ok_or_else(|| Error::not_found(E::KIND, name))
    }

    /// Returns the element called `name`, if any.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&E> {
        self.items.get(name)
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// The replacement may carry a new name as long as no *other* element
    /// already uses it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for a bad index,
    /// [`Error::InvalidArgument`] for a name that cannot be written as text and
    /// [`Error::DuplicateName`] if the new name belongs to another element.
    pub fn set(&mut self, index: usize, element: E) -> Result<E> {
        let len = self.len();
        let (current, slot) = self
            .items
            .get_index_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;

        if current.as_str() == element.name() {
            return Ok(std::mem::replace(slot, element));
        }

        E::check_name(element.name())?;

        if self.items.contains_key(element.name()) {
            return Err(Error::duplicate_name(element.name()));
        }

        let (_, old) = self
            .items
            .shift_remove_index(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        let key = element.name().to_string();
        self.items.shift_insert(index, key, element);
        Ok(old)
    }

    /// Replaces the element called `name`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `name` is absent, otherwise the errors of
    /// [`NamedList::set`].
    pub fn set_by_name(&mut self, name: &str, element: E) -> Result<E> {
        let index = self
            .position_of(name)
            .ok_or_else(|| Error::not_found(E::KIND, name))?;
        self.set(index, element)
    }

    /// Inserts `element` at `index`, shifting every later element one slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`,
    /// [`Error::InvalidArgument`] for a name that cannot be written as text and
    /// [`Error::DuplicateName`] if the name is already in use.
    pub fn insert(&mut self, index: usize, element: E) -> Result<()> {
        if index > self.len() {
            return Err(Error::index_out_of_range(index, self.len()));
        }
        E::check_name(element.name())?;
        if self.items.contains_key(element.name()) {
            return Err(Error::duplicate_name(element.name()));
        }

        let key = element.name().to_string();
        self.items.shift_insert(index, key, element);
        Ok(())
    }

    /// Appends `element` at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a name that cannot be written as
    /// text and [`Error::DuplicateName`] if the name is already in use.
    pub fn push(&mut self, element: E) -> Result<()> {
        self.insert(self.len(), element)
    }

    /// Removes and returns the element at `index`, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<E> {
        let len = self.len();
        self.items
            .shift_remove_index(index)
            .map(|(_, element)| element)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Removes the element called `name`. Returns whether it was present.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        self.items.shift_remove(name).is_some()
    }

    /// Returns the position of the element called `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.get_index_of(name)
    }

    /// Returns `true` if an element is called `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Renames the element called `old` to `new`, keeping its position.
    ///
    /// Renaming an element to its current name succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `new` cannot be written as text,
    /// [`Error::DuplicateName`] if it belongs to another element and
    /// [`Error::NotFound`] if `old` is absent.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        E::check_name(new)?;
        let target = self.position_of(old);
        if let Some(existing) = self.position_of(new) {
            if Some(existing) != target {
                return Err(Error::duplicate_name(new));
            }
        }

        let index = target.ok_or_else(|| Error::not_found(E::KIND, old))?;
        if old == new {
            return Ok(());
        }

        let len = self.len();
        let (_, mut element) = self
            .items
            .shift_remove_index(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        element.set_name(new.to_string());
        self.items.shift_insert(index, new.to_string(), element);
        Ok(())
    }

    /// Returns an iterator over the elements, in order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, E> {
        self.items.values()
    }

    /// Returns an iterator over the element names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.keys().map(String::as_str)
    }
}

impl<E: Named + PartialEq> NamedList<E> {
    /// Returns the position of an element structurally equal to `element`.
    #[must_use]
    pub fn position(&self, element: &E) -> Option<usize> {
        // Names are unique, so a structural match can only sit under that name.
        self.items
            .get_full(element.name())
            .and_then(|(index, _, found)| (found == element).then_some(index))
    }

    /// Returns `true` if the list holds an element structurally equal to `element`.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.position(element).is_some()
    }

    /// Removes an element structurally equal to `element`. Returns whether it was present.
    pub fn remove(&mut self, element: &E) -> bool {
        match self.position(element) {
            Some(index) => self.items.shift_remove_index(index).is_some(),
            None => false,
        }
    }

    /// Renames the element structurally equal to `element` to `new`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if `new` belongs to another element,
    /// [`Error::NotFound`] if no element equals `element`, and otherwise the
    /// errors of [`NamedList::rename`].
    pub fn rename_element(&mut self, element: &E, new: &str) -> Result<()> {
        if !self.contains(element) {
            if self.contains_name(new) {
                return Err(Error::duplicate_name(new));
            }
            return Err(Error::not_found(E::KIND, element.name()));
        }
        self.rename(element.name(), new)
    }
}

impl<E: Named + Clone> NamedList<E> {
    /// Returns a snapshot of the elements, detached from the list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<E> {
        self.items.values().cloned().collect()
    }
}

impl<E: Named> Default for NamedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for NamedList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.values()).finish()
    }
}

/// Lists are equal when they hold equal elements in the same order.
impl<E: PartialEq> PartialEq for NamedList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .values()
                .zip(other.items.values())
                .all(|(a, b)| a == b)
    }
}

impl<E> IntoIterator for NamedList<E> {
    type Item = E;
    type IntoIter = indexmap::map::IntoValues<String, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl<'a, E> IntoIterator for &'a NamedList<E> {
    type Item = &'a E;
    type IntoIter = indexmap::map::Values<'a, String, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
