use anyhow::Result;
use clap::{Parser, Subcommand};

use std::io::{self, BufReader};

use tally_cli::shell;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based expense tracking and sales analytics",
    long_about = "tally bundles two small interactive utilities: a personal \
                  expense tracker and a sales-analytics report generator. \
                  Records live in memory for the session; reports show \
                  category totals, monthly trends, and top-N rankings."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// How many entries top-N views show
    #[arg(long, global = true, default_value = "5", env = "TALLY_TOP")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Track personal expenses interactively
    #[command(alias = "exp")]
    Expenses,

    /// Analyze product sales interactively
    Sales,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut output = io::stdout();

    match cli.command {
        Commands::Expenses => shell::expenses::run(&mut input, &mut output, cli.top)?,
        Commands::Sales => shell::sales::run(&mut input, &mut output, cli.top)?,
    }

    Ok(())
}
