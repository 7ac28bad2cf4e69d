//! Non-negative stock quantity.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Units on hand. Never negative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock(u64);

impl Stock {
    pub const ZERO: Stock = Stock(0);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn units(self) -> u64 {
        self.0
    }
}

impl ValueObject for Stock {}

impl core::fmt::Display for Stock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Stock {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Stock {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("stock cannot be negative (got {value})")))
    }
}
