//! Interactive expense tracker shell

use std::io::{BufRead, Write};

use crate::display::record::format_expense_register;
use crate::display::report::{banner, format_money_colored};
use crate::error::TallyResult;
use crate::ledger::{CategoryOrder, Ledger};
use crate::models::Expense;
use crate::reports::{RankDirection, RankingReport, SpendingReport, StatsReport, TrendReport};

use super::{prompt, prompt_amount, prompt_date, prompt_number, prompt_required};

const MENU: &str = "\
1. Add expense
2. List expenses
3. Category totals
4. Monthly summary
5. Top expenses
6. Filter by category
7. Statistics
8. Delete expense
9. Quit";

/// Run the expense tracker menu loop until quit or end of input
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    top_count: usize,
) -> TallyResult<()> {
    let mut ledger: Ledger<Expense> = Ledger::new();

    writeln!(output, "{}", banner("EXPENSE TRACKER", 40))?;

    loop {
        writeln!(output, "\n{}", MENU)?;
        let Some(choice) = prompt(input, output, "Choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if !add_expense(input, output, &mut ledger)? {
                    break;
                }
            }
            "2" => {
                let records: Vec<&Expense> = ledger.records().iter().collect();
                write!(output, "{}", format_expense_register(&records))?;
                if !ledger.is_empty() {
                    writeln!(output, "Total spent: {}", format_money_colored(ledger.total()))?;
                }
            }
            "3" => {
                let report = SpendingReport::generate(&ledger, CategoryOrder::ByTotalDesc);
                write!(output, "{}", report.format_terminal())?;
            }
            "4" => {
                let report = TrendReport::generate(&ledger);
                write!(output, "{}", report.format_terminal())?;
            }
            "5" => {
                let report = RankingReport::generate(&ledger, RankDirection::Highest, top_count);
                write!(output, "{}", report.format_terminal())?;
            }
            "6" => {
                if !filter_by_category(input, output, &ledger)? {
                    break;
                }
            }
            "7" => {
                let report = StatsReport::generate(&ledger);
                write!(output, "{}", report.format_terminal())?;
            }
            "8" => {
                if !delete_expense(input, output, &mut ledger)? {
                    break;
                }
            }
            "9" => break,
            _ => writeln!(output, "Please choose 1-9.")?,
        }
    }

    writeln!(output, "Goodbye.")?;
    Ok(())
}

/// Returns false when input ended mid-dialog
fn add_expense<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    ledger: &mut Ledger<Expense>,
) -> TallyResult<bool> {
    let Some(amount) = prompt_amount(input, output, "Amount: ")? else {
        return Ok(false);
    };
    let Some(category) = prompt_required(input, output, "Category: ")? else {
        return Ok(false);
    };
    let Some(date) = prompt_date(input, output)? else {
        return Ok(false);
    };
    let Some(note) = prompt(input, output, "Note (optional): ")? else {
        return Ok(false);
    };

    let expense = Expense::with_note(amount, category, &date, note);
    match expense.validate() {
        Ok(()) => {
            writeln!(output, "Added: {}", expense)?;
            ledger.add(expense);
        }
        Err(e) => writeln!(output, "Not added: {}", e)?,
    }

    Ok(true)
}

fn filter_by_category<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    ledger: &Ledger<Expense>,
) -> TallyResult<bool> {
    if ledger.is_empty() {
        writeln!(output, "No expenses recorded yet.")?;
        return Ok(true);
    }

    writeln!(output, "Categories: {}", ledger.categories().join(", "))?;
    let Some(name) = prompt_required(input, output, "Category: ")? else {
        return Ok(false);
    };

    let matches = ledger.filter_by_category(&name);
    write!(output, "{}", format_expense_register(&matches))?;
    if !matches.is_empty() {
        let total: crate::models::Money = matches.iter().map(|e| e.amount).sum();
        writeln!(output, "Total for {}: {}", name, total)?;
    }

    Ok(true)
}

fn delete_expense<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    ledger: &mut Ledger<Expense>,
) -> TallyResult<bool> {
    if ledger.is_empty() {
        writeln!(output, "No expenses to delete.")?;
        return Ok(true);
    }

    let records: Vec<&Expense> = ledger.records().iter().collect();
    write!(output, "{}", format_expense_register(&records))?;

    let Some(position) = prompt_number::<usize, _, _>(input, output, "Expense number (0 to cancel): ")? else {
        return Ok(false);
    };

    if position == 0 {
        writeln!(output, "Delete cancelled.")?;
        return Ok(true);
    }

    match ledger.remove_at(position - 1) {
        Ok(removed) => writeln!(output, "Deleted: {}", removed)?,
        Err(e) => writeln!(output, "{}", e)?,
    }

    Ok(true)
}
