//! Interactive sales analytics shell

use std::io::{BufRead, Write};

use crate::display::record::format_sale_register;
use crate::display::report::{banner, format_money_colored};
use crate::error::TallyResult;
use crate::ledger::{CategoryOrder, SalesBook};
use crate::models::Product;
use crate::reports::{ProductRankingReport, SpendingReport, TrendReport};

use super::{prompt, prompt_amount, prompt_date, prompt_number, prompt_required};

const MENU: &str = "\
1. Add product
2. Record sale
3. List sales
4. Revenue by category
5. Revenue by product
6. Top products
7. Monthly trend
8. Delete sale
9. Quit";

/// Run the sales analytics menu loop until quit or end of input
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    top_count: usize,
) -> TallyResult<()> {
    let mut book = SalesBook::new();

    writeln!(output, "{}", banner("SALES ANALYTICS", 40))?;

    loop {
        writeln!(output, "\n{}", MENU)?;
        let Some(choice) = prompt(input, output, "Choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if !add_product(input, output, &mut book)? {
                    break;
                }
            }
            "2" => {
                if !record_sale(input, output, &mut book)? {
                    break;
                }
            }
            "3" => {
                write!(output, "{}", format_sale_register(book.ledger().records()))?;
                if !book.ledger().is_empty() {
                    writeln!(
                        output,
                        "Total revenue: {}",
                        format_money_colored(book.ledger().total())
                    )?;
                }
            }
            "4" => {
                let report = SpendingReport::generate(book.ledger(), CategoryOrder::FirstSeen);
                write!(output, "{}", report.format_terminal())?;
            }
            "5" => {
                for (name, revenue) in book.revenue_by_product(CategoryOrder::FirstSeen) {
                    writeln!(output, "{:<20} {:>12}", name, revenue.to_string())?;
                }
                if book.ledger().is_empty() {
                    writeln!(output, "No sales recorded yet.")?;
                }
            }
            "6" => {
                let report = ProductRankingReport::generate(&book, top_count);
                write!(output, "{}", report.format_terminal())?;
            }
            "7" => {
                let report = TrendReport::generate(book.ledger());
                write!(output, "{}", report.format_terminal())?;
            }
            "8" => {
                if !delete_sale(input, output, &mut book)? {
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

fn add_product<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    book: &mut SalesBook,
) -> TallyResult<bool> {
    let Some(name) = prompt_required(input, output, "Product name: ")? else {
        return Ok(false);
    };
    let Some(category) = prompt_required(input, output, "Category: ")? else {
        return Ok(false);
    };
    let Some(unit_price) = prompt_amount(input, output, "Unit price: ")? else {
        return Ok(false);
    };

    match book.add_product(Product::new(name, category, unit_price)) {
        Ok(product) => writeln!(output, "Added product: {} ({})", product, product.id)?,
        Err(e) => writeln!(output, "Not added: {}", e)?,
    }

    Ok(true)
}

fn record_sale<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    book: &mut SalesBook,
) -> TallyResult<bool> {
    if book.products().is_empty() {
        writeln!(output, "Add a product first.")?;
        return Ok(true);
    }

    let names: Vec<&str> = book.products().iter().map(|p| p.name.as_str()).collect();
    writeln!(output, "Products: {}", names.join(", "))?;

    let Some(name) = prompt_required(input, output, "Product: ")? else {
        return Ok(false);
    };
    let Some(quantity) = prompt_number(input, output, "Quantity: ")? else {
        return Ok(false);
    };
    let Some(date) = prompt_date(input, output)? else {
        return Ok(false);
    };

    match book.record_sale(&name, quantity, &date) {
        Ok(sale) => writeln!(output, "Recorded: {}", sale)?,
        Err(e) => writeln!(output, "Not recorded: {}", e)?,
    }

    Ok(true)
}

fn delete_sale<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    book: &mut SalesBook,
) -> TallyResult<bool> {
    if book.ledger().is_empty() {
        writeln!(output, "No sales to delete.")?;
        return Ok(true);
    }

    write!(output, "{}", format_sale_register(book.ledger().records()))?;

    let Some(position) = prompt_number::<usize, _, _>(input, output, "Sale number (0 to cancel): ")? else {
        return Ok(false);
    };

    if position == 0 {
        writeln!(output, "Delete cancelled.")?;
        return Ok(true);
    }

    match book.remove_at(position - 1) {
        Ok(removed) => writeln!(output, "Deleted: {}", removed)?,
        Err(e) => writeln!(output, "{}", e)?,
    }

    Ok(true)
}
