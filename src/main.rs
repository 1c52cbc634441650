use std::io;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use expense_tracker::cli::Shell;
use expense_tracker::config::LedgerConfig;
use expense_tracker::services::Ledger;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records dated expenses to data.csv in the current directory, \
                  shows them as a table, and checks this month's spending \
                  against a monthly budget. All interaction happens through \
                  a numbered menu."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let ledger = Ledger::load(LedgerConfig::default())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(ledger, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
