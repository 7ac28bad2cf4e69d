//! Successful results of inventory operations.

use serde::{Deserialize, Serialize};

use stockline_core::Stock;

use crate::product::Product;

/// Where a new product is linked into the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Head,
    Tail,
}

impl core::fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InsertPosition::Head => f.write_str("head"),
            InsertPosition::Tail => f.write_str("tail"),
        }
    }
}

/// Result of a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inserted {
    /// Position the caller asked for.
    pub requested: InsertPosition,
    /// Position the node actually took.
    pub used: InsertPosition,
}

impl Inserted {
    /// A tail insert that landed at the head because the inventory was empty.
    pub fn is_degenerate_tail(&self) -> bool {
        self.requested == InsertPosition::Tail && self.used == InsertPosition::Head
    }
}

/// Result of a successful stock update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    pub previous: Stock,
    pub current: Stock,
}

/// A product that has been unlinked and released from the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removed {
    pub product: Product,
    /// Zero-based position the product occupied before removal.
    pub index: usize,
}

impl Removed {
    pub fn was_head(&self) -> bool {
        self.index == 0
    }
}
