//! Report generation
//!
//! Reporters consume the ledger's query results and produce formatted text.
//! They never mutate a ledger and do no aggregation of their own beyond
//! percentages and labels.

pub mod ranking;
pub mod spending;
pub mod stats;
pub mod trend;

pub use ranking::{ProductRankingReport, RankDirection, RankingReport};
pub use spending::SpendingReport;
pub use stats::StatsReport;
pub use trend::TrendReport;
