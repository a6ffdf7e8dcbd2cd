//! Output destination flags
//!
//! A [`LogDestination`] selects which sinks an entry is routed to. The value
//! is a two-bit mask so console and file can be combined with `|`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDestination(u8);

impl LogDestination {
    /// Route to no destination. The entry is still counted as submitted.
    pub const NONE: Self = Self(0);
    /// Output only to console/serial
    pub const CONSOLE_ONLY: Self = Self(1);
    /// Output only to file
    pub const FILE_ONLY: Self = Self(2);
    /// Output to both console and file
    pub const BOTH: Self = Self(3);

    /// Build a destination from a raw mask; bits beyond the two defined
    /// flags are discarded.
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::BOTH.0)
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn includes_console(self) -> bool {
        self.0 & Self::CONSOLE_ONLY.0 != 0
    }

    #[must_use]
    pub fn includes_file(self) -> bool {
        self.0 & Self::FILE_ONLY.0 != 0
    }
}

impl Default for LogDestination {
    fn default() -> Self {
        Self::BOTH
    }
}

impl BitOr for LogDestination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for LogDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            0 => "none",
            1 => "console",
            2 => "file",
            _ => "console+file",
        };
        write!(f, "{}", name)
    }
}
