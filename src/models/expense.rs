//! Expense model
//!
//! One expense entry: an amount spent, a category, a date, and an optional
//! free-text note. Immutable after construction; all analysis happens in the
//! ledger layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::RecordDate;
use super::money::Money;

/// A single expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent
    pub amount: Money,

    /// Category name (trimmed, case preserved)
    pub category: String,

    /// Date of the expense
    pub date: RecordDate,

    /// Optional note
    #[serde(default)]
    pub note: String,
}

impl Expense {
    /// Create a new expense
    ///
    /// String fields are trimmed; the date string degrades to the unknown
    /// sentinel if malformed rather than failing.
    pub fn new(amount: Money, category: impl Into<String>, date_str: &str) -> Self {
        Self {
            amount,
            category: category.into().trim().to_string(),
            date: RecordDate::parse(date_str),
            note: String::new(),
        }
    }

    /// Create a new expense with a note
    pub fn with_note(
        amount: Money,
        category: impl Into<String>,
        date_str: &str,
        note: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(amount, category, date_str);
        expense.note = note.into().trim().to_string();
        expense
    }

    /// Validate the expense before it enters a ledger
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative ({})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
