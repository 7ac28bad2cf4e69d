use serde::{Deserialize, Serialize};

use stockline_core::{Entity, ProductId, ProductName, Stock};

/// A single inventory record.
///
/// `id` and `name` are fixed at creation; only the stock changes afterwards,
/// and only through [`crate::Inventory::update_stock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    stock: Stock,
}

impl Product {
    pub fn new(id: ProductId, name: ProductName, stock: Stock) -> Self {
        Self { id, name, stock }
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub(crate) fn set_stock(&mut self, stock: Stock) -> Stock {
        core::mem::replace(&mut self.stock, stock)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
