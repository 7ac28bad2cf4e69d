//! `stockline-core` — domain building blocks shared by the inventory and the shell.
//!
//! This crate contains **pure domain** primitives (no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod name;
pub mod stock;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use name::ProductName;
pub use stock::Stock;
pub use value_object::ValueObject;
