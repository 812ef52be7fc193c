//! Product catalog model
//!
//! A product is a named, priced, categorized catalog item. Many sales
//! reference the same product, so ledgers hand out `Arc<Product>`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ProductId;
use super::money::Money;

/// A catalog item that sales reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Product name (trimmed)
    pub name: String,

    /// Category name (trimmed)
    pub category: String,

    /// Price per unit
    pub unit_price: Money,
}

impl Product {
    /// Create a new product
    pub fn new(name: impl Into<String>, category: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into().trim().to_string(),
            category: category.into().trim().to_string(),
            unit_price,
        }
    }

    /// Validate the product before it enters a catalog
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.is_empty() {
            return Err(ProductValidationError::EmptyName);
        }

        if self.category.is_empty() {
            return Err(ProductValidationError::EmptyCategory);
        }

        if self.unit_price.is_negative() {
            return Err(ProductValidationError::NegativePrice(self.unit_price));
        }

        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.category, self.unit_price)
    }
}

/// Validation errors for products
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    EmptyName,
    EmptyCategory,
    NegativePrice(Money),
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Product name cannot be empty"),
            Self::EmptyCategory => write!(f, "Product category cannot be empty"),
            Self::NegativePrice(price) => {
                write!(f, "Product unit price cannot be negative ({})", price)
            }
        }
    }
}

impl std::error::Error for ProductValidationError {}
