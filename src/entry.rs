use crate::{Descriptor, Kind};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wrapper around a descriptor that contains additional metadata.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Entry {
    descriptor: Descriptor,
    joined: bool,
    #[cfg(feature = "chrono")]
    timestamp: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(descriptor: Descriptor, joined: bool) -> Entry {
        Entry {
            descriptor,
            joined,
            #[cfg(feature = "chrono")]
            timestamp: Utc::now(),
        }
    }

    /// Returns a reference to the descriptor.
    pub fn get(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Returns the kind of the descriptor.
    pub fn kind(&self) -> Kind {
        self.descriptor.kind()
    }

    /// Returns `true` if the entry is undone together with the entry beneath it.
    pub fn is_joined(&self) -> bool {
        self.joined
    }

    /// Returns when the entry was recorded.
    #[cfg(feature = "chrono")]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub(crate) fn into_descriptor(self) -> Descriptor {
        self.descriptor
    }
}

impl From<Descriptor> for Entry {
    fn from(descriptor: Descriptor) -> Self {
        Entry::new(descriptor, false)
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        (&self.descriptor as &dyn Display).fmt(f)
    }
}
