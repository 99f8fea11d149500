use crate::{Descriptor, Entry, Kind};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A last-in-first-out log of reversible descriptors.
///
/// The log is owned by a [`StringList`](crate::StringList) and is only
/// written to by the list's mutating operations. Entries pushed by a single
/// batch operation are linked together and are popped as one unit.
///
/// # Examples
/// ```
/// # use stringlist::{Kind, StringList};
/// let mut list = StringList::new();
/// list.insert_back("a");
/// list.insert_back("b");
/// list.remove_all();
/// let log = list.undo_log();
/// assert_eq!(log.len(), 4);
/// assert_eq!(log.batch_len(), 2);
/// assert_eq!(log.peek().map(|e| e.kind()), Some(Kind::Clear));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UndoLog {
    entries: Vec<Entry>,
}

impl UndoLog {
    /// Returns a new, empty log.
    pub fn new() -> UndoLog {
        UndoLog::default()
    }

    /// Returns the number of descriptors in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry on top of the log.
    pub fn peek(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Returns the number of entries the next undo consumes.
    pub fn batch_len(&self) -> usize {
        match self.entries.iter().rposition(|e| !e.is_joined()) {
            Some(start) => self.entries.len() - start,
            None => self.entries.len(),
        }
    }

    /// Returns an iterator over the entries, most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entry> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    /// Pushes a descriptor that starts a new undo step.
    pub(crate) fn push(&mut self, descriptor: Descriptor) {
        self.push_entry(descriptor, false);
    }

    /// Pushes a descriptor that belongs to the batch of the entry beneath it.
    pub(crate) fn join(&mut self, descriptor: Descriptor) {
        let joined = matches!(self.peek(), Some(top) if top.kind() == descriptor.kind());
        debug_assert!(joined, "joined descriptors must continue a batch of the same kind");
        self.push_entry(descriptor, joined);
    }

    fn push_entry(&mut self, descriptor: Descriptor, joined: bool) {
        log::trace!("record `{descriptor}`");
        self.entries.push(Entry::new(descriptor, joined));
    }

    /// Pops the top undo step, returning its descriptors most recent first.
    ///
    /// The returned descriptors all share the same [`Kind`].
    pub(crate) fn pop_batch(&mut self) -> Option<(Kind, Vec<Descriptor>)> {
        let kind = self.peek()?.kind();
        let start = self.entries.len() - self.batch_len();
        let batch = self
            .entries
            .drain(start..)
            .rev()
            .map(Entry::into_descriptor)
            .collect();
        Some((kind, batch))
    }

    /// Removes all entries without undoing them.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a UndoLog {
    type Item = &'a Entry;
    type IntoIter = core::iter::Rev<core::slice::Iter<'a, Entry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().rev()
    }
}
