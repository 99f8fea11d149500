//! A growable list of strings that can undo its own mutations.
//!
//! Every mutating operation on a [StringList] records a [Descriptor] in the list's
//! [UndoLog] that holds just enough information to reverse it. Calling [undo] pops the
//! most recent descriptor and applies the inverse mutation, without recording anything
//! itself. Operations that change many elements at once, like [remove_all] and [assign],
//! record a batch of descriptors that is undone in a single step.
//!
//! # Features
//!
//! * [StringList] provides indexable access, insertion and removal on contiguous storage
//!   that doubles its capacity when it is full.
//! * [UndoLog] is a stack of structured descriptors, never formatted text.
//! * The undo log can be printed with configurable formatting through [Display].
//! * Colored display output is provided when the `colored` feature is enabled.
//! * Time stamps on log entries are provided when the `chrono` feature is enabled.
//! * Serialization of lists and log entries is provided when the `serde` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use stringlist::StringList;
//!
//! # fn main() -> stringlist::Result<()> {
//! let mut list = StringList::new();
//! list.insert_back("a");
//! list.insert_back("b");
//! list.insert_back("c");
//! list.set(1, "x")?;
//! assert_eq!(list.to_string(), r#"{"a", "x", "c"}"#);
//!
//! list.remove_all();
//! assert!(list.is_empty());
//!
//! assert!(list.undo());
//! assert_eq!(list.to_string(), r#"{"a", "x", "c"}"#);
//! assert!(list.undo());
//! assert_eq!(list.to_string(), r#"{"a", "b", "c"}"#);
//! # Ok(())
//! # }
//! ```
//!
//! [undo]: StringList::undo
//! [remove_all]: StringList::remove_all
//! [assign]: StringList::assign

#![doc(html_root_url = "https://docs.rs/stringlist")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod descriptor;
mod entry;
mod error;
mod format;
mod list;
mod stack;

pub use self::{
    descriptor::{Descriptor, Kind},
    entry::Entry,
    error::{Error, Result},
    list::{Builder, Display, StringList},
    stack::UndoLog,
};

use self::format::Format;
