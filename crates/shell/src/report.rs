//! Operation results as the shell presents them.

use std::io::Write;

use serde::Serialize;

use stockline_core::{DomainError, Entity, ProductId};
use stockline_inventory::{InsertPosition, Inserted, Product, Removed, StockChange};

use crate::config::OutputMode;

/// Which menu action produced a not-found result; the wording differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Insert,
    Find,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Report {
    Inserted {
        id: ProductId,
        #[serde(flatten)]
        outcome: Inserted,
    },
    DuplicateId {
        id: ProductId,
    },
    Found {
        product: Product,
    },
    NotFound {
        id: ProductId,
        action: Action,
    },
    StockUpdated {
        id: ProductId,
        #[serde(flatten)]
        change: StockChange,
    },
    Deleted {
        #[serde(flatten)]
        removed: Removed,
    },
    Listing {
        products: Vec<Product>,
    },
    Rejected {
        action: Action,
        message: String,
    },
}

impl Report {
    /// Translate a failed core call into the report for `action`.
    pub fn from_error(action: Action, err: DomainError) -> Self {
        if !err.is_lookup_failure() {
            tracing::warn!("{:?} rejected by inventory: {}", action, err);
        }
        match err {
            DomainError::DuplicateId(id) => Report::DuplicateId { id },
            DomainError::NotFound(id) => Report::NotFound { id, action },
            other => Report::Rejected {
                action,
                message: other.to_string(),
            },
        }
    }

    /// Write the report in `mode`, followed by a newline.
    pub fn write_to(&self, mode: OutputMode, out: &mut impl Write) -> std::io::Result<()> {
        match mode {
            OutputMode::Human => writeln!(out, "{self}"),
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Report::Inserted { id, outcome } if outcome.is_degenerate_tail() => {
                write!(f, ">> Product ID {id} inserted at the HEAD (inventory was empty).")
            }
            Report::Inserted { id, outcome } => match outcome.used {
                InsertPosition::Head => write!(f, ">> Product ID {id} inserted at the HEAD."),
                InsertPosition::Tail => write!(f, ">> Product ID {id} inserted at the TAIL."),
            },
            Report::DuplicateId { id } => write!(
                f,
                "ERROR: ID {id} already exists in the inventory. Not inserted."
            ),
            Report::Found { product } => write!(
                f,
                ">> Product found: ID {}, Name: {}, Stock: {}",
                product.id(),
                product.name(),
                product.stock()
            ),
            Report::NotFound {
                action: Action::Find,
                ..
            } => write!(f, ">> Product not found."),
            Report::NotFound { id, .. } => write!(f, "ERROR: Product with ID {id} not found."),
            Report::StockUpdated { change, .. } => {
                write!(f, "Stock updated to {}.", change.current)
            }
            Report::Deleted { removed } if removed.was_head() => write!(
                f,
                "Product ID {} deleted (was the head).",
                removed.product.id()
            ),
            Report::Deleted { removed } => {
                write!(f, "Product ID {} deleted.", removed.product.id())
            }
            Report::Listing { products } if products.is_empty() => {
                write!(f, "\n--- The inventory is empty ---")
            }
            Report::Listing { products } => {
                writeln!(f, "\n--- CURRENT INVENTORY ---")?;
                writeln!(f, "ID\tSTOCK\t\tNAME")?;
                writeln!(f, "-----------------------------------------")?;
                for p in products {
                    writeln!(f, "{}\t{}\t\t{}", p.id(), p.stock(), p.name())?;
                }
                write!(f, "-----------------------------------------")
            }
            Report::Rejected { message, .. } => write!(f, "ERROR: {message}"),
        }
    }
}
