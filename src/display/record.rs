//! Record display formatting
//!
//! Register-style views for expense and sale lists, numbered 1-based so the
//! shells can reuse the positions for deletion.

use super::report::{separator, truncate};
use crate::models::{Expense, Sale};

/// Format a single expense for display (register row)
pub fn format_expense_row(position: usize, expense: &Expense) -> String {
    let note = if expense.note.is_empty() {
        String::new()
    } else {
        format!("  {}", truncate(&expense.note, 30))
    };

    format!(
        "{:>3}. {:10} {:<15} {:>12}{}",
        position,
        expense.date.to_string(),
        truncate(&expense.category, 15),
        expense.amount.to_string(),
        note
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[&Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:10} {:<15} {:>12}\n",
        "#", "Date", "Category", "Amount"
    ));
    output.push_str(&separator(50));
    output.push('\n');

    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format_expense_row(i + 1, expense));
        output.push('\n');
    }

    output
}

/// Format a single sale for display (register row)
pub fn format_sale_row(position: usize, sale: &Sale) -> String {
    format!(
        "{:>3}. {:<12} {:10} {:<15} x{:<4} {:>12}",
        position,
        sale.id.to_string(),
        sale.date.to_string(),
        truncate(&sale.product.name, 15),
        sale.quantity,
        sale.revenue().to_string()
    )
}

/// Format a list of sales as a register
pub fn format_sale_register(sales: &[Sale]) -> String {
    if sales.is_empty() {
        return "No sales recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<12} {:10} {:<15} {:<5} {:>12}\n",
        "#", "Sale", "Date", "Product", "Qty", "Revenue"
    ));
    output.push_str(&separator(65));
    output.push('\n');

    for (i, sale) in sales.iter().enumerate() {
        output.push_str(&format_sale_row(i + 1, sale));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Product};
    use std::sync::Arc;

    #[test]
    fn test_expense_row() {
        let expense =
            Expense::with_note(Money::from_cents(4999), "Food", "2024-03-10", "groceries");
        let row = format_expense_row(1, &expense);
        assert!(row.contains("2024-03-10"));
        assert!(row.contains("Food"));
        assert!(row.contains("$49.99"));
        assert!(row.contains("groceries"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_expense_register(&[]), "No expenses recorded yet.\n");
        assert_eq!(format_sale_register(&[]), "No sales recorded yet.\n");
    }

    #[test]
    fn test_expense_register_numbering() {
        let a = Expense::new(Money::from_cents(100), "Food", "2024-01-01");
        let b = Expense::new(Money::from_cents(200), "Bills", "2024-01-02");
        let register = format_expense_register(&[&a, &b]);

        assert!(register.contains("  1. "));
        assert!(register.contains("  2. "));
        assert!(register.contains("Category"));
    }

    #[test]
    fn test_sale_register() {
        let product = Arc::new(Product::new("Widget", "Hardware", Money::from_cents(250)));
        let sale = Sale::new(product, 4, "2024-01-05");
        let register = format_sale_register(std::slice::from_ref(&sale));

        assert!(register.contains("Widget"));
        assert!(register.contains("x4"));
        assert!(register.contains("$10.00"));
        assert!(register.contains("sal-"));
    }
}
