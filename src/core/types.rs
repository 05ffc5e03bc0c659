// src/core/types.rs
use crate::error::NamingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index of a scale word: zillion `n` names 10^(3n + 3).
/// 0 is "thousand", 1 is "million", 9 is "nonillion".
pub type ZillionIndex = u64;

/// Exactly three decimal digits, most significant first, value 0-999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitGroup([u8; 3]);

impl DigitGroup {
    /// Builds a group from its hundreds, tens and units digits.
    /// Returns `None` if any digit is above 9.
    pub fn new(hundreds: u8, tens: u8, units: u8) -> Option<Self> {
        if hundreds > 9 || tens > 9 || units > 9 {
            return None;
        }
        Some(Self([hundreds, tens, units]))
    }

    /// Builds a group from exactly three ASCII digit bytes.
    pub fn from_ascii(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [h, t, u] if bytes.iter().all(u8::is_ascii_digit) => {
                Some(Self([h - b'0', t - b'0', u - b'0']))
            }
            _ => None,
        }
    }

    pub fn hundreds(self) -> u8 {
        self.0[0]
    }

    pub fn tens(self) -> u8 {
        self.0[1]
    }

    pub fn units(self) -> u8 {
        self.0[2]
    }

    pub fn value(self) -> u16 {
        u16::from(self.0[0]) * 100 + u16::from(self.0[1]) * 10 + u16::from(self.0[2])
    }

    pub fn is_zero(self) -> bool {
        self.0 == [0, 0, 0]
    }
}

impl FromStr for DigitGroup {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s.as_bytes()).ok_or_else(|| NamingError::InvalidInput {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// How the per-zillion pieces of a name are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSeparator {
    #[default]
    Space,
    Newline,
}

impl GroupSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupSeparator::Space => " ",
            GroupSeparator::Newline => "\n",
        }
    }
}
