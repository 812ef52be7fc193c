//! Summary statistics report
//!
//! The statistics screen from the expense tracker: record count, total,
//! average, category count, and the highest and lowest records.

use std::fmt::Display;

use crate::ledger::{Ledger, LedgerRecord};
use crate::models::Money;

/// Summary statistics over a ledger
#[derive(Debug, Clone)]
pub struct StatsReport {
    /// Number of records
    pub record_count: usize,
    /// Number of distinct categories
    pub category_count: usize,
    /// Sum of all revenues
    pub total: Money,
    /// Average revenue per record (zero when empty)
    pub average: Money,
    /// Display label and revenue of the highest record
    pub highest: Option<(String, Money)>,
    /// Display label and revenue of the lowest record
    pub lowest: Option<(String, Money)>,
}

impl StatsReport {
    /// Generate the report from a ledger
    pub fn generate<R>(ledger: &Ledger<R>) -> Self
    where
        R: LedgerRecord + Display,
    {
        Self {
            record_count: ledger.len(),
            category_count: ledger.categories().len(),
            total: ledger.total(),
            average: ledger.average(),
            highest: ledger.highest().map(|r| (r.to_string(), r.revenue())),
            lowest: ledger.lowest().map(|r| (r.to_string(), r.revenue())),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.record_count == 0 {
            return "No records to analyze yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("Records:    {}\n", self.record_count));
        output.push_str(&format!("Categories: {}\n", self.category_count));
        output.push_str(&format!("Total:      {}\n", self.total));
        output.push_str(&format!("Average:    {}\n", self.average));

        if let Some((label, revenue)) = &self.highest {
            output.push_str(&format!("Highest:    {} ({})\n", revenue, label));
        }
        if let Some((label, revenue)) = &self.lowest {
            output.push_str(&format!("Lowest:     {} ({})\n", revenue, label));
        }

        output
    }
}
