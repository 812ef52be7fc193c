//! Monthly trend report
//!
//! Time-bucketed revenue, one row per (year, month), ascending. Records
//! whose date failed to parse are reported in a separate "unknown date"
//! row rather than dropped.

use crate::display::report::format_bar;
use crate::ledger::{Ledger, LedgerRecord};
use crate::models::{month_name, Money, UNKNOWN_PERIOD};

/// One month's revenue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendRow {
    /// Year of the bucket (0 for the unknown bucket)
    pub year: i32,
    /// Month of the bucket (0 for the unknown bucket)
    pub month: u32,
    /// Summed revenue
    pub total: Money,
}

impl TrendRow {
    /// Label for display, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        if (self.year, self.month) == UNKNOWN_PERIOD {
            "(unknown date)".to_string()
        } else {
            format!("{} {}", month_name(self.month), self.year)
        }
    }
}

/// Revenue per month, ascending by (year, month)
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// Month rows; the unknown-date bucket sorts first when present
    pub rows: Vec<TrendRow>,
}

impl TrendReport {
    /// Generate the report from a ledger
    pub fn generate<R: LedgerRecord>(ledger: &Ledger<R>) -> Self {
        let rows = ledger
            .monthly_trend()
            .into_iter()
            .map(|((year, month), total)| TrendRow { year, month, total })
            .collect();
        Self { rows }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "No records to summarize yet.\n".to_string();
        }

        let max_cents = self
            .rows
            .iter()
            .map(|r| r.total.abs().cents())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for row in &self.rows {
            output.push_str(&format!(
                "{:<15} {:>12}  {}\n",
                row.label(),
                row.total.to_string(),
                format_bar(row.total.abs().cents() as f64, max_cents as f64, 24)
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    #[test]
    fn test_generate_ascending() {
        let mut ledger = Ledger::new();
        ledger.add(Expense::new(Money::from_cents(5000), "Food", "2024-02-01"));
        ledger.add(Expense::new(Money::from_cents(10000), "Food", "2024-01-05"));
        ledger.add(Expense::new(Money::from_cents(20000), "Bills", "2024-01-20"));

        let report = TrendReport::generate(&ledger);
        assert_eq!(report.rows.len(), 2);
        assert_eq!((report.rows[0].year, report.rows[0].month), (2024, 1));
        assert_eq!(report.rows[0].total, Money::from_cents(30000));
        assert_eq!(report.rows[1].total, Money::from_cents(5000));
    }

    #[test]
    fn test_labels() {
        let row = TrendRow {
            year: 2024,
            month: 3,
            total: Money::zero(),
        };
        assert_eq!(row.label(), "Mar 2024");

        let unknown = TrendRow {
            year: 0,
            month: 0,
            total: Money::zero(),
        };
        assert_eq!(unknown.label(), "(unknown date)");
    }

    #[test]
    fn test_unknown_bucket_in_output() {
        let mut ledger = Ledger::new();
        ledger.add(Expense::new(Money::from_cents(100), "Food", "whenever"));
        ledger.add(Expense::new(Money::from_cents(200), "Food", "2024-06-01"));

        let report = TrendReport::generate(&ledger);
        let text = report.format_terminal();
        assert!(text.contains("(unknown date)"));
        assert!(text.contains("Jun 2024"));
    }

    #[test]
    fn test_empty_report() {
        let ledger: Ledger<Expense> = Ledger::new();
        let report = TrendReport::generate(&ledger);
        assert_eq!(report.format_terminal(), "No records to summarize yet.\n");
    }
}
