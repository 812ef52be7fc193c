//! Core data models for tally-cli
//!
//! This module contains the data structures shared by both utilities:
//! money, dates, expense records, and the product/sale pair used by the
//! sales-analytics variant.

pub mod date;
pub mod expense;
pub mod ids;
pub mod money;
pub mod product;
pub mod sale;

pub use date::{month_name, RecordDate, UNKNOWN_PERIOD};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ProductId, SaleId};
pub use money::Money;
pub use product::{Product, ProductValidationError};
pub use sale::Sale;
