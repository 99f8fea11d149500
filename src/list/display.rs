use crate::{Entry, Format, StringList};
use core::fmt;

/// Configurable display formatting for the undo log of a [`StringList`].
///
/// Entries are listed most recent first. The entries the next
/// [`undo`](StringList::undo) reverts are labeled with `[NEXT]`.
///
/// # Examples
/// ```
/// # use stringlist::StringList;
/// let mut list = StringList::new();
/// list.insert_back("a");
/// list.set(0, "b").unwrap();
/// let mut display = list.display();
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// # #[cfg(not(feature = "chrono"))]
/// assert_eq!(
///     display.to_string(),
///     "2 [NEXT] Set 0 (was \"a\")\n1 Insert at 0\n"
/// );
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Display<'a> {
    list: &'a StringList,
    format: Format,
}

impl Display<'_> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Label the entries the next undo reverts (on by default).
    pub fn next(&mut self, on: bool) -> &mut Self {
        self.format.next = on;
        self
    }

    /// Show the position of the entries (on by default).
    pub fn position(&mut self, on: bool) -> &mut Self {
        self.format.position = on;
        self
    }

    fn fmt_entry(&self, f: &mut fmt::Formatter, at: usize, entry: &Entry, next: bool) -> fmt::Result {
        self.format.position(f, at)?;
        self.format.label(f, next)?;
        #[cfg(feature = "chrono")]
        self.format.timestamp(f, &entry.timestamp())?;
        self.format.message(f, entry)?;
        self.format.joined(f, entry.is_joined())?;
        writeln!(f)
    }
}

impl<'a> From<&'a StringList> for Display<'a> {
    fn from(list: &'a StringList) -> Self {
        Display {
            list,
            format: Format::default(),
        }
    }
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let log = self.list.undo_log();
        let next = log.batch_len();
        for (i, entry) in log.iter().enumerate() {
            self.fmt_entry(f, log.len() - i, entry, i < next)?;
        }
        Ok(())
    }
}
