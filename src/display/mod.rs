//! Terminal display formatting
//!
//! Pure string formatting for records and report output. Nothing in this
//! module computes aggregates or mutates a ledger.

pub mod record;
pub mod report;
