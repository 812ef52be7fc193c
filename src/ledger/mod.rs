//! In-memory ledger: the aggregation engine
//!
//! A [`Ledger`] owns an insertion-ordered list of records and answers the
//! grouping, ranking, and summary queries both utilities share. Records only
//! need to expose a revenue, a category, and a date through [`LedgerRecord`];
//! the expense tracker stores [`Expense`] directly while the sales variant
//! wraps a `Ledger<Sale>` in [`SalesBook`].

pub mod sales;

use std::collections::BTreeMap;

use crate::error::{TallyError, TallyResult};
use crate::models::{Expense, Money, RecordDate, Sale};

pub use sales::{ProductTotal, SalesBook};

/// The seam between record types and the aggregation engine
pub trait LedgerRecord {
    /// Monetary value attributed to this record
    fn revenue(&self) -> Money;

    /// Category dimension used for grouping
    fn category(&self) -> &str;

    /// Date dimension used for period filters and the monthly trend
    fn date(&self) -> &RecordDate;
}

impl LedgerRecord for Expense {
    fn revenue(&self) -> Money {
        self.amount
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn date(&self) -> &RecordDate {
        &self.date
    }
}

impl LedgerRecord for Sale {
    fn revenue(&self) -> Money {
        Sale::revenue(self)
    }

    fn category(&self) -> &str {
        &self.product.category
    }

    fn date(&self) -> &RecordDate {
        &self.date
    }
}

/// Iteration order for per-category totals
///
/// Observed call sites disagree on which order a category breakdown should
/// use, so both are offered and the reporter chooses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryOrder {
    /// Insertion order of each category's first record
    #[default]
    FirstSeen,
    /// Largest total first; ties keep first-seen order
    ByTotalDesc,
}

/// One category's share of a ledger
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    /// Category name with its first-seen spelling
    pub name: String,
    /// Summed revenue of the category's records
    pub total: Money,
    /// Number of records in the category
    pub count: usize,
}

/// An insertion-ordered collection of records plus aggregation queries
///
/// All queries are read-only; the only mutators are [`Ledger::add`] and
/// [`Ledger::remove_at`]. Category names are compared case-insensitively
/// everywhere, with the first-seen spelling kept for display.
#[derive(Debug, Clone)]
pub struct Ledger<R: LedgerRecord> {
    records: Vec<R>,
    categories: Vec<String>,
}

impl<R: LedgerRecord> Default for Ledger<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LedgerRecord> Ledger<R> {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Append a record; never fails for a well-formed record
    pub fn add(&mut self, record: R) {
        self.note_category(record.category());
        self.records.push(record);
    }

    /// Remove the record at `index` (0-based) and return it
    ///
    /// Fails without mutating anything when `index` is outside `[0, len)`.
    /// The category set is rebuilt from scratch because the removal may have
    /// eliminated a category's last record.
    pub fn remove_at(&mut self, index: usize) -> TallyResult<R> {
        if index >= self.records.len() {
            return Err(TallyError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(index);
        self.rebuild_categories();
        Ok(removed)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in first-occurrence order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Records whose category matches `name`, case-insensitively
    ///
    /// No match yields an empty vec, never an error.
    pub fn filter_by_category(&self, name: &str) -> Vec<&R> {
        let key = fold(name);
        self.records
            .iter()
            .filter(|r| fold(r.category()) == key)
            .collect()
    }

    /// Records dated in the given year and month
    ///
    /// Records with malformed dates only match the `(0, 0)` sentinel period.
    pub fn filter_by_period(&self, year: i32, month: u32) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| r.date().period() == (year, month))
            .collect()
    }

    /// Sum of all revenues; zero for an empty ledger
    pub fn total(&self) -> Money {
        self.records.iter().map(|r| r.revenue()).sum()
    }

    /// Average revenue per record; zero for an empty ledger
    pub fn average(&self) -> Money {
        self.total().divided_by(self.records.len())
    }

    /// Per-category totals with record counts, in the requested order
    pub fn category_breakdown(&self, order: CategoryOrder) -> Vec<CategoryTotal> {
        let mut breakdown: Vec<CategoryTotal> = self
            .categories
            .iter()
            .map(|name| CategoryTotal {
                name: name.clone(),
                total: Money::zero(),
                count: 0,
            })
            .collect();

        for record in &self.records {
            let key = fold(record.category());
            if let Some(entry) = breakdown.iter_mut().find(|e| fold(&e.name) == key) {
                entry.total += record.revenue();
                entry.count += 1;
            }
        }

        if order == CategoryOrder::ByTotalDesc {
            breakdown.sort_by(|a, b| b.total.cmp(&a.total));
        }

        breakdown
    }

    /// Mapping category -> summed revenue, one entry per distinct category
    pub fn total_by_category(&self, order: CategoryOrder) -> Vec<(String, Money)> {
        self.category_breakdown(order)
            .into_iter()
            .map(|entry| (entry.name, entry.total))
            .collect()
    }

    /// The `n` records with the highest revenue
    ///
    /// Ties keep their original relative order; `n` past the ledger size
    /// returns everything; `n == 0` returns nothing.
    pub fn top_n(&self, n: usize) -> Vec<&R> {
        let mut ranked: Vec<&R> = self.records.iter().collect();
        ranked.sort_by(|a, b| b.revenue().cmp(&a.revenue()));
        ranked.truncate(n);
        ranked
    }

    /// The `n` records with the lowest revenue; same tie and bounds rules
    /// as [`Ledger::top_n`]
    pub fn bottom_n(&self, n: usize) -> Vec<&R> {
        let mut ranked: Vec<&R> = self.records.iter().collect();
        ranked.sort_by(|a, b| a.revenue().cmp(&b.revenue()));
        ranked.truncate(n);
        ranked
    }

    /// Summed revenue per (year, month), ascending
    ///
    /// Records with malformed dates land in the `(0, 0)` bucket.
    pub fn monthly_trend(&self) -> BTreeMap<(i32, u32), Money> {
        let mut trend = BTreeMap::new();
        for record in &self.records {
            *trend.entry(record.date().period()).or_insert(Money::zero()) += record.revenue();
        }
        trend
    }

    /// The record with the highest revenue; ties pick the latest
    pub fn highest(&self) -> Option<&R> {
        self.records.iter().max_by_key(|r| r.revenue())
    }

    /// The record with the lowest revenue; ties pick the earliest
    pub fn lowest(&self) -> Option<&R> {
        self.records.iter().min_by_key(|r| r.revenue())
    }

    fn note_category(&mut self, category: &str) {
        let key = fold(category);
        if !self.categories.iter().any(|c| fold(c) == key) {
            self.categories.push(category.to_string());
        }
    }

    fn rebuild_categories(&mut self) {
        self.categories.clear();
        let mut records = std::mem::take(&mut self.records);
        for record in &records {
            self.note_category(record.category());
        }
        std::mem::swap(&mut self.records, &mut records);
    }
}

/// Case-insensitive comparison key for category names
fn fold(name: &str) -> String {
    name.to_lowercase()
}
