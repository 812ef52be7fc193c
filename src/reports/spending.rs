//! Category spending report
//!
//! Per-category totals with record counts and percentage of the grand
//! total. The ordering is the caller's choice so interactive views can show
//! biggest-first while plain listings keep first-seen order.

use std::io::Write;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::{TallyError, TallyResult};
use crate::ledger::{CategoryOrder, Ledger, LedgerRecord};
use crate::models::Money;

/// One category row of the report
#[derive(Debug, Clone)]
pub struct SpendingRow {
    /// Category name
    pub name: String,
    /// Summed revenue
    pub total: Money,
    /// Number of records
    pub count: usize,
    /// Share of the grand total
    pub percentage: f64,
}

/// Spending breakdown by category
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Category rows in the requested order
    pub rows: Vec<SpendingRow>,
    /// Sum over all categories
    pub grand_total: Money,
    /// Total record count
    pub record_count: usize,
}

impl SpendingReport {
    /// Generate the report from a ledger
    pub fn generate<R: LedgerRecord>(ledger: &Ledger<R>, order: CategoryOrder) -> Self {
        let grand_total = ledger.total();
        let grand_cents = grand_total.abs().cents();

        let rows = ledger
            .category_breakdown(order)
            .into_iter()
            .map(|entry| {
                let percentage = if grand_cents == 0 {
                    0.0
                } else {
                    (entry.total.abs().cents() as f64 / grand_cents as f64) * 100.0
                };
                SpendingRow {
                    name: entry.name,
                    total: entry.total,
                    count: entry.count,
                    percentage,
                }
            })
            .collect();

        Self {
            rows,
            grand_total,
            record_count: ledger.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "No records to analyze yet.\n".to_string();
        }

        let max_cents = self
            .rows
            .iter()
            .map(|r| r.total.abs().cents())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        output.push_str(&format!(
            "{:<20} {:>12} {:>7} {:>7}\n",
            "Category", "Total", "Count", "%"
        ));
        output.push_str(&separator(70));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>7} {:>7}  {}\n",
                row.name,
                row.total.to_string(),
                row.count,
                format_percentage(row.percentage),
                format_bar(row.total.abs().cents() as f64, max_cents as f64, 20)
            ));
        }

        output.push_str(&separator(70));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>7}\n",
            "TOTAL",
            self.grand_total.to_string(),
            self.record_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Category,Total,Count,Percentage")
            .map_err(|e| TallyError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{},{:.2}",
                row.name,
                row.total.cents() as f64 / 100.0,
                row.count,
                row.percentage
            )
            .map_err(|e| TallyError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{:.2},{},100.00",
            self.grand_total.cents() as f64 / 100.0,
            self.record_count
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn sample_ledger() -> Ledger<Expense> {
        let mut ledger = Ledger::new();
        ledger.add(Expense::new(Money::from_cents(10000), "Food", "2024-01-05"));
        ledger.add(Expense::new(Money::from_cents(5000), "Food", "2024-02-01"));
        ledger.add(Expense::new(Money::from_cents(20000), "Bills", "2024-01-20"));
        ledger
    }

    #[test]
    fn test_generate() {
        let report = SpendingReport::generate(&sample_ledger(), CategoryOrder::FirstSeen);

        assert_eq!(report.grand_total, Money::from_cents(35000));
        assert_eq!(report.record_count, 3);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].name, "Food");
        assert_eq!(report.rows[0].count, 2);
        assert!((report.rows[0].percentage - 42.857).abs() < 0.01);
    }

    #[test]
    fn test_generate_value_sorted() {
        let report = SpendingReport::generate(&sample_ledger(), CategoryOrder::ByTotalDesc);
        assert_eq!(report.rows[0].name, "Bills");
    }

    #[test]
    fn test_empty_ledger_report() {
        let ledger: Ledger<Expense> = Ledger::new();
        let report = SpendingReport::generate(&ledger, CategoryOrder::FirstSeen);

        assert!(report.rows.is_empty());
        assert_eq!(report.grand_total, Money::zero());
        assert_eq!(report.format_terminal(), "No records to analyze yet.\n");
    }

    #[test]
    fn test_format_terminal() {
        let report = SpendingReport::generate(&sample_ledger(), CategoryOrder::FirstSeen);
        let text = report.format_terminal();

        assert!(text.contains("Food"));
        assert!(text.contains("$150.00"));
        assert!(text.contains("Bills"));
        assert!(text.contains("$200.00"));
        assert!(text.contains("TOTAL"));
        assert!(text.contains("$350.00"));
    }

    #[test]
    fn test_export_csv() {
        let report = SpendingReport::generate(&sample_ledger(), CategoryOrder::FirstSeen);
        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Category,Total,Count,Percentage");
        assert!(lines[1].starts_with("Food,150.00,2,"));
        assert!(lines[2].starts_with("Bills,200.00,1,"));
        assert_eq!(lines[3], "TOTAL,350.00,3,100.00");
    }
}
