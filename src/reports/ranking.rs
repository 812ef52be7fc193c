//! Ranking reports
//!
//! [`RankingReport`] ranks individual records by revenue; the sales variant
//! additionally ranks product groups by summed revenue through
//! [`ProductRankingReport`].

use std::fmt::Display;

use crate::ledger::{Ledger, LedgerRecord, SalesBook};
use crate::models::Money;

/// Which end of the revenue ordering a ranking shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    Highest,
    Lowest,
}

/// One ranked entry, pre-formatted for display
#[derive(Debug, Clone)]
pub struct RankedRow {
    /// 1-based rank
    pub rank: usize,
    /// Display label for the record or group
    pub label: String,
    /// Revenue the rank was computed from
    pub revenue: Money,
}

/// Top-or-bottom-N records by revenue
#[derive(Debug, Clone)]
pub struct RankingReport {
    /// Ranked rows, best (or worst) first
    pub rows: Vec<RankedRow>,
    /// Direction the ranking was taken in
    pub direction: RankDirection,
}

impl RankingReport {
    /// Generate a ranking from a ledger
    pub fn generate<R>(ledger: &Ledger<R>, direction: RankDirection, n: usize) -> Self
    where
        R: LedgerRecord + Display,
    {
        let ranked = match direction {
            RankDirection::Highest => ledger.top_n(n),
            RankDirection::Lowest => ledger.bottom_n(n),
        };

        let rows = ranked
            .into_iter()
            .enumerate()
            .map(|(i, record)| RankedRow {
                rank: i + 1,
                label: record.to_string(),
                revenue: record.revenue(),
            })
            .collect();

        Self { rows, direction }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "No records to rank yet.\n".to_string();
        }

        let mut output = String::new();
        for row in &self.rows {
            output.push_str(&format!("#{:<3} {}\n", row.rank, row.label));
        }
        output
    }
}

/// Top-N product groups by summed revenue (sales variant)
#[derive(Debug, Clone)]
pub struct ProductRankingReport {
    /// Ranked rows, highest revenue first
    pub rows: Vec<RankedRow>,
}

impl ProductRankingReport {
    /// Generate a product ranking from a sales book
    pub fn generate(book: &SalesBook, n: usize) -> Self {
        let rows = book
            .top_products(n)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| RankedRow {
                rank: i + 1,
                label: format!("{} ({} units)", entry.name, entry.units),
                revenue: entry.revenue,
            })
            .collect();
        Self { rows }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "No sales to rank yet.\n".to_string();
        }

        let mut output = String::new();
        for row in &self.rows {
            output.push_str(&format!(
                "#{:<3} {:<30} {:>12}\n",
                row.rank,
                row.label,
                row.revenue.to_string()
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Product};

    fn sample_ledger() -> Ledger<Expense> {
        let mut ledger = Ledger::new();
        ledger.add(Expense::new(Money::from_cents(10000), "Food", "2024-01-05"));
        ledger.add(Expense::new(Money::from_cents(5000), "Food", "2024-02-01"));
        ledger.add(Expense::new(Money::from_cents(20000), "Bills", "2024-01-20"));
        ledger
    }

    #[test]
    fn test_highest_ranking() {
        let report = RankingReport::generate(&sample_ledger(), RankDirection::Highest, 2);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].rank, 1);
        assert_eq!(report.rows[0].revenue, Money::from_cents(20000));
        assert!(report.rows[0].label.contains("Bills"));
        assert_eq!(report.rows[1].revenue, Money::from_cents(10000));
    }

    #[test]
    fn test_lowest_ranking() {
        let report = RankingReport::generate(&sample_ledger(), RankDirection::Lowest, 1);
        assert_eq!(report.rows[0].revenue, Money::from_cents(5000));
    }

    #[test]
    fn test_n_larger_than_ledger() {
        let report = RankingReport::generate(&sample_ledger(), RankDirection::Highest, 50);
        assert_eq!(report.rows.len(), 3);
    }

    #[test]
    fn test_empty_ranking() {
        let ledger: Ledger<Expense> = Ledger::new();
        let report = RankingReport::generate(&ledger, RankDirection::Highest, 5);
        assert_eq!(report.format_terminal(), "No records to rank yet.\n");
    }

    #[test]
    fn test_product_ranking() {
        let mut book = SalesBook::new();
        book.add_product(Product::new("Widget", "Hardware", Money::from_cents(250)))
            .unwrap();
        book.add_product(Product::new("Gadget", "Hardware", Money::from_cents(1000)))
            .unwrap();
        book.record_sale("Widget", 4, "2024-01-05").unwrap();
        book.record_sale("Gadget", 3, "2024-01-10").unwrap();

        let report = ProductRankingReport::generate(&book, 5);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].revenue, Money::from_cents(3000));
        assert!(report.rows[0].label.contains("Gadget"));
        assert!(report.rows[0].label.contains("3 units"));

        let text = report.format_terminal();
        assert!(text.contains("#1"));
        assert!(text.contains("$30.00"));
    }
}
