//! A growable list of strings with an undo log.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::{Descriptor, Error, Kind, Result, UndoLog};
use core::fmt::{self, Formatter};
use core::mem;
use core::ops::Index;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of slots a new list starts with.
pub(crate) const DEFAULT_CAPACITY: usize = 10;

/// Says if a mutation should be recorded in the undo log.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Logging {
    Record,
    Suppress,
}

/// A growable list of strings that can undo its own mutations.
///
/// The list stores its elements in contiguous storage that doubles its capacity
/// when it is full. Every mutating method records a [`Descriptor`] in the list's
/// [`UndoLog`], and [`undo`](StringList::undo) reverts the most recent one.
///
/// Equality only compares the elements, the undo log is never taken into account.
///
/// # Examples
/// ```
/// # use stringlist::StringList;
/// # fn main() -> stringlist::Result<()> {
/// let mut list = StringList::new();
/// list.insert_back("b");
/// list.insert_front("a");
/// list.insert_before(2, "c")?;
/// assert_eq!(list.to_string(), r#"{"a", "b", "c"}"#);
///
/// list.remove_at(1)?;
/// assert_eq!(list.to_string(), r#"{"a", "c"}"#);
///
/// assert!(list.undo());
/// assert!(list.undo());
/// assert_eq!(list.to_string(), r#"{"a", "b"}"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StringList {
    items: Vec<String>,
    capacity: usize,
    log: UndoLog,
}

impl StringList {
    /// Returns a new list with the default capacity.
    pub fn new() -> StringList {
        Builder::default().build()
    }

    /// Returns a new list with room for `capacity` elements before it grows.
    pub fn with_capacity(capacity: usize) -> StringList {
        StringList {
            items: Vec::with_capacity(capacity),
            capacity,
            log: UndoLog::new(),
        }
    }

    /// Returns a builder for a list.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the list can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.items
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::out_of_range("get", index, self.len()))
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Returns `true` if the list contains `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.items.iter().map(String::as_str)
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Returns the undo log.
    pub fn undo_log(&self) -> &UndoLog {
        &self.log
    }

    /// Returns `true` if there is a mutation to undo.
    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    /// Removes all descriptors from the undo log without undoing them.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Returns a structure for configurable formatting of the undo log.
    pub fn display(&self) -> Display {
        Display::from(self)
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.set_with(index, value.into(), Logging::Record)
    }

    /// Inserts `value` before the element at `index`, growing the list if it is full.
    ///
    /// An `index` equal to the length appends the value.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `index > len`.
    pub fn insert_before(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.insert_with(index, value.into(), Logging::Record)
    }

    /// Appends `value` to the back of the list.
    pub fn insert_back(&mut self, value: impl Into<String>) {
        let index = self.len();
        self.record(Logging::Record, Descriptor::Insert { index });
        self.insert_unchecked(index, value.into());
    }

    /// Inserts `value` at the front of the list.
    pub fn insert_front(&mut self, value: impl Into<String>) {
        self.record(Logging::Record, Descriptor::Insert { index: 0 });
        self.insert_unchecked(0, value.into());
    }

    /// Removes and returns the element at `index`. The capacity is not changed.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        self.remove_with(index, Logging::Record)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` and leaves the list and its undo log untouched if there is no such element.
    pub fn remove_first(&mut self, value: &str) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_with(index, Logging::Record).is_ok(),
            None => false,
        }
    }

    /// Removes all elements. The capacity is not changed.
    ///
    /// The removal is undone in a single step.
    pub fn remove_all(&mut self) {
        let cleared: Vec<_> = self
            .items
            .drain(..)
            .rev()
            .map(|previous| Descriptor::Clear { previous })
            .collect();
        self.record_batch(cleared);
    }

    /// Replaces the elements and the capacity of the list with those of `other`.
    ///
    /// The undo log of `other` is not copied and `other` is left unchanged.
    /// The replacement is undone in a single step.
    ///
    /// A list can not be assigned to itself:
    /// ```compile_fail
    /// # use stringlist::StringList;
    /// let mut list = StringList::new();
    /// list.assign(&list);
    /// ```
    pub fn assign(&mut self, other: &StringList) {
        let replaced = if self.is_empty() {
            vec![Descriptor::ListReplace {
                index: 0,
                previous: None,
            }]
        } else {
            self.items
                .drain(..)
                .enumerate()
                .map(|(index, previous)| Descriptor::ListReplace {
                    index,
                    previous: Some(previous),
                })
                .collect()
        };
        self.record_batch(replaced);
        self.items.clone_from(&other.items);
        self.capacity = other.capacity;
    }

    /// Reverts the most recent mutation, or the most recent batch of mutations.
    ///
    /// Returns `false` and does nothing if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let (kind, batch) = match self.log.pop_batch() {
            Some(popped) => popped,
            None => return false,
        };
        log::debug!("undo {kind:?} ({} descriptors)", batch.len());
        if let Err(err) = self.revert(kind, batch) {
            log::error!("undo of {kind:?} stopped early: {err}");
        }
        true
    }

    fn revert(&mut self, kind: Kind, batch: Vec<Descriptor>) -> Result<()> {
        if kind == Kind::ListReplace {
            // The top descriptor holds the last element of the replaced list.
            let len = batch
                .first()
                .filter(|top| top.previous().is_some())
                .and_then(Descriptor::index)
                .map_or(0, |index| index + 1);
            self.resize_unlogged(len);
        }
        for descriptor in batch {
            match descriptor {
                Descriptor::Insert { index } => {
                    self.remove_with(index, Logging::Suppress)?;
                }
                Descriptor::Set { index, previous } => {
                    self.set_with(index, previous, Logging::Suppress)?
                }
                Descriptor::Remove { index, previous } => {
                    self.insert_with(index, previous, Logging::Suppress)?
                }
                Descriptor::ListReplace {
                    index,
                    previous: Some(previous),
                } => self.set_with(index, previous, Logging::Suppress)?,
                Descriptor::ListReplace { previous: None, .. } => {}
                Descriptor::Clear { previous } => {
                    self.insert_unchecked(self.len(), previous);
                }
            }
        }
        Ok(())
    }

    fn record(&mut self, logging: Logging, descriptor: Descriptor) {
        if logging == Logging::Record {
            self.log.push(descriptor);
        }
    }

    /// Records the descriptors as one undo step.
    fn record_batch(&mut self, descriptors: Vec<Descriptor>) {
        let mut descriptors = descriptors.into_iter();
        if let Some(first) = descriptors.next() {
            self.log.push(first);
            descriptors.for_each(|descriptor| self.log.join(descriptor));
        }
    }

    fn set_with(&mut self, index: usize, value: String, logging: Logging) -> Result<()> {
        let len = self.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range("set", index, len))?;
        let previous = mem::replace(slot, value);
        self.record(logging, Descriptor::Set { index, previous });
        Ok(())
    }

    fn insert_with(&mut self, index: usize, value: String, logging: Logging) -> Result<()> {
        if index > self.len() {
            return Err(Error::out_of_range("insert_before", index, self.len()));
        }
        self.record(logging, Descriptor::Insert { index });
        self.insert_unchecked(index, value);
        Ok(())
    }

    fn remove_with(&mut self, index: usize, logging: Logging) -> Result<String> {
        if index >= self.len() {
            return Err(Error::out_of_range("remove_at", index, self.len()));
        }
        let value = self.items.remove(index);
        if logging == Logging::Record {
            self.log.push(Descriptor::Remove {
                index,
                previous: value.clone(),
            });
        }
        Ok(value)
    }

    /// Inserts without checking `index` or recording anything.
    fn insert_unchecked(&mut self, index: usize, value: String) {
        self.grow_if_full();
        self.items.insert(index, value);
    }

    /// Truncates or pads the list to `len` elements without recording anything.
    fn resize_unlogged(&mut self, len: usize) {
        self.items.truncate(len);
        while self.len() < len {
            self.insert_unchecked(self.len(), String::new());
        }
    }

    fn grow_if_full(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }
        let capacity = self.capacity.saturating_mul(2).max(1);
        log::debug!("grow capacity from {} to {capacity}", self.capacity);
        self.items.reserve_exact(capacity - self.items.len());
        self.capacity = capacity;
    }
}

impl Default for StringList {
    fn default() -> StringList {
        StringList::new()
    }
}

/// Copies the elements and the capacity, the copy starts with an empty undo log.
impl Clone for StringList {
    fn clone(&self) -> StringList {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        StringList {
            items,
            capacity: self.capacity,
            log: UndoLog::new(),
        }
    }
}

impl PartialEq for StringList {
    fn eq(&self, other: &StringList) -> bool {
        self.items == other.items
    }
}

impl Eq for StringList {}

impl Index<usize> for StringList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.items[index]
    }
}

impl From<Vec<String>> for StringList {
    fn from(mut items: Vec<String>) -> Self {
        let capacity = items.len().max(DEFAULT_CAPACITY);
        items.reserve_exact(capacity - items.len());
        StringList {
            items,
            capacity,
            log: UndoLog::new(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StringList::from(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

/// Formats the list as `{"a", "b", "c"}`.
impl fmt::Display for StringList {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{item}\"")?;
        }
        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
impl Serialize for StringList {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(StringList::from)
    }
}
