//! Integer identifiers for stored expenses
//!
//! The storage layer hands out ids; the newtype keeps them from being mixed up
//! with day numbers, counts and other plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored expense, assigned on insert and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// Wrap a raw id
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The id that follows this one, or `None` once the id space is used up
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ExpenseId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
