//! Inventory domain module.
//!
//! A singly-linked, in-memory product inventory keyed by [`ProductId`]. Pure
//! data-structure logic: no console IO, no persistence. Operations report
//! through `tracing` and return [`DomainResult`]s.
//!
//! [`ProductId`]: stockline_core::ProductId
//! [`DomainResult`]: stockline_core::DomainResult

pub mod list;
pub mod outcome;
pub mod product;

pub use list::{Inventory, Iter};
pub use outcome::{InsertPosition, Inserted, Removed, StockChange};
pub use product::Product;
