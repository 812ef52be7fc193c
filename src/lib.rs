//! tally-cli - Terminal-based expense tracking and sales analytics
//!
//! This library implements the shared engine behind the two `tally`
//! utilities: a personal expense tracker and a sales-analytics report
//! generator. Both hold an in-memory collection of records with category
//! and date dimensions and compute grouped sums, rankings, and monthly
//! trends over them. Nothing is persisted; records live for the process.
//!
//! # Architecture
//!
//! - `error`: Custom error types
//! - `models`: Money, dates, expenses, products, sales
//! - `ledger`: The aggregation engine (generic [`ledger::Ledger`] plus the
//!   catalog-backed [`ledger::SalesBook`])
//! - `reports`: Read-only report generation over ledger queries
//! - `display`: Terminal string formatting
//! - `shell`: Interactive numbered-menu loops for the binary

pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod shell;

pub use error::{TallyError, TallyResult};
