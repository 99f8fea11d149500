use super::DEFAULT_CAPACITY;
use crate::StringList;

/// Builder for a [`StringList`].
///
/// # Examples
/// ```
/// # use stringlist::StringList;
/// let mut list = StringList::builder().capacity(2).build();
/// assert_eq!(list.capacity(), 2);
/// list.insert_back("a");
/// list.insert_back("b");
/// list.insert_back("c");
/// assert_eq!(list.capacity(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    capacity: usize,
}

impl Builder {
    /// Sets the initial capacity of the list.
    ///
    /// A capacity of `0` grows to `1` on the first insertion.
    pub fn capacity(mut self, capacity: usize) -> Builder {
        self.capacity = capacity;
        self
    }

    /// Builds the list.
    pub fn build(self) -> StringList {
        StringList::with_capacity(self.capacity)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
