#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

use crate::Entry;
#[cfg(feature = "colored")]
use crate::Kind;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Local, Utc};
#[cfg(feature = "colored")]
use colored::{Color, Colorize};
use core::fmt::{self, Write};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub next: bool,
    pub position: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            next: true,
            position: true,
        }
    }
}

impl Format {
    pub fn message(self, f: &mut fmt::Formatter, entry: &Entry) -> fmt::Result {
        let text = entry.to_string();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", text.color(color_of_kind(entry.kind())));
        }
        f.write_str(&text)
    }

    pub fn position(self, f: &mut fmt::Formatter, at: usize) -> fmt::Result {
        if !self.position {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", at.to_string().yellow().bold());
        }
        write!(f, "{at} ")
    }

    pub fn label(self, f: &mut fmt::Formatter, next: bool) -> fmt::Result {
        if !(self.next && next) {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(
                f,
                "{}{}{} ",
                "[".yellow(),
                "NEXT".cyan().bold(),
                "]".yellow()
            );
        }
        f.write_str("[NEXT] ")
    }

    #[cfg(feature = "chrono")]
    pub fn timestamp(self, f: &mut fmt::Formatter, timestamp: &DateTime<Utc>) -> fmt::Result {
        if !self.detailed {
            return Ok(());
        }
        let rfc2822 = timestamp.with_timezone(&Local).to_rfc2822();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", format!("[{rfc2822}]").yellow());
        }
        write!(f, "[{rfc2822}] ")
    }

    pub fn joined(self, f: &mut fmt::Formatter, joined: bool) -> fmt::Result {
        if !(self.detailed && joined) {
            return Ok(());
        }
        f.write_char(' ')?;
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", "+".dimmed());
        }
        f.write_char('+')
    }
}

#[cfg(feature = "colored")]
fn color_of_kind(kind: Kind) -> Color {
    match kind {
        Kind::Insert => Color::Green,
        Kind::Set => Color::Cyan,
        Kind::Remove => Color::Red,
        Kind::ListReplace => Color::Magenta,
        Kind::Clear => Color::Blue,
    }
}
