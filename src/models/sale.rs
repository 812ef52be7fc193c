//! Sale model
//!
//! A sale references a catalog product (shared via `Arc`, many sales to one
//! product) with a quantity and a date. Revenue is derived: quantity times
//! the product's unit price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::date::RecordDate;
use super::ids::SaleId;
use super::money::Money;
use super::product::Product;

/// A single sale of a catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier
    pub id: SaleId,

    /// The product sold (shared with the catalog)
    pub product: Arc<Product>,

    /// Units sold
    pub quantity: u32,

    /// Date of the sale
    pub date: RecordDate,
}

impl Sale {
    /// Create a new sale
    pub fn new(product: Arc<Product>, quantity: u32, date_str: &str) -> Self {
        Self {
            id: SaleId::new(),
            product,
            quantity,
            date: RecordDate::parse(date_str),
        }
    }

    /// Revenue for this sale: quantity times the product's unit price
    pub fn revenue(&self) -> Money {
        self.product.unit_price.times(self.quantity)
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} x{} = {}",
            self.date,
            self.product.name,
            self.quantity,
            self.revenue()
        )
    }
}
