use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reversible description of one primitive mutation.
///
/// Each variant holds exactly what is needed to apply the inverse mutation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum Descriptor {
    /// An element was inserted at `index`.
    Insert {
        /// Position of the inserted element.
        index: usize,
    },
    /// The element at `index` was overwritten.
    Set {
        /// Position of the overwritten element.
        index: usize,
        /// The value before it was overwritten.
        previous: String,
    },
    /// The element at `index` was removed.
    Remove {
        /// Position of the removed element.
        index: usize,
        /// The removed value.
        previous: String,
    },
    /// The whole list was replaced by another one.
    ///
    /// One descriptor is recorded for every element the list held before the replacement.
    /// Replacing an empty list records a single descriptor at index `0` without a value.
    ListReplace {
        /// Position of the element in the replaced list.
        index: usize,
        /// The replaced value, `None` if the list was empty.
        previous: Option<String>,
    },
    /// An element was removed while clearing the list.
    ///
    /// Descriptors are recorded from the last element to the first.
    Clear {
        /// The removed value.
        previous: String,
    },
}

impl Descriptor {
    /// Returns the kind of mutation this descriptor reverts.
    pub fn kind(&self) -> Kind {
        match self {
            Descriptor::Insert { .. } => Kind::Insert,
            Descriptor::Set { .. } => Kind::Set,
            Descriptor::Remove { .. } => Kind::Remove,
            Descriptor::ListReplace { .. } => Kind::ListReplace,
            Descriptor::Clear { .. } => Kind::Clear,
        }
    }

    /// Returns the index the descriptor refers to, if it has one.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Descriptor::Insert { index }
            | Descriptor::Set { index, .. }
            | Descriptor::Remove { index, .. }
            | Descriptor::ListReplace { index, .. } => Some(index),
            Descriptor::Clear { .. } => None,
        }
    }

    /// Returns the value the descriptor restores, if it has one.
    pub fn previous(&self) -> Option<&str> {
        match self {
            Descriptor::Set { previous, .. }
            | Descriptor::Remove { previous, .. }
            | Descriptor::Clear { previous } => Some(previous.as_str()),
            Descriptor::ListReplace { previous, .. } => previous.as_deref(),
            Descriptor::Insert { .. } => None,
        }
    }
}

impl Display for Descriptor {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Descriptor::Insert { index } => write!(f, "Insert at {index}"),
            Descriptor::Set { index, previous } => write!(f, "Set {index} (was {previous:?})"),
            Descriptor::Remove { index, previous } => write!(f, "Remove {index} {previous:?}"),
            Descriptor::ListReplace {
                index,
                previous: Some(previous),
            } => write!(f, "Replace {index} (was {previous:?})"),
            Descriptor::ListReplace { previous: None, .. } => f.write_str("Replace (was empty)"),
            Descriptor::Clear { previous } => write!(f, "Clear {previous:?}"),
        }
    }
}

/// The kind of mutation a [`Descriptor`] reverts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub enum Kind {
    /// See [`Descriptor::Insert`].
    Insert,
    /// See [`Descriptor::Set`].
    Set,
    /// See [`Descriptor::Remove`].
    Remove,
    /// See [`Descriptor::ListReplace`].
    ListReplace,
    /// See [`Descriptor::Clear`].
    Clear,
}

impl Kind {
    /// Returns `true` if one call records several descriptors of this kind.
    pub fn is_batch(self) -> bool {
        matches!(self, Kind::ListReplace | Kind::Clear)
    }
}
