//! Incremental Cost Calculator
//!
//! Prints the price of buying one or more units of a geometrically priced item,
//! and optionally how many units a budget can afford.
//!
//! Usage:
//!   cargo run --bin cost_calc -- --base 10 --multiplier 1.07 --owned 5 --amount 10 --income 500

use clap::{ArgAction, Parser};
use gamemath::costs::{get_cost, get_max_buy, get_unit_cost, CostData};
use gamemath::{GameMathError, Result};
use log::debug;

/// Incremental Cost Calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes geometric-growth purchase costs and affordable amounts",
    long_about = None
)]
struct Args {
    /// Price of the first unit
    #[arg(short, long)]
    base: f64,

    /// Growth multiplier applied per owned unit
    #[arg(short, long, default_value_t = 1.07)]
    multiplier: f64,

    /// Number of units already owned
    #[arg(short, long, default_value_t = 0)]
    owned: u64,

    /// Number of units to price
    #[arg(short, long, default_value_t = 1)]
    amount: u64,

    /// Available budget; prints the maximum affordable amount
    #[arg(short, long)]
    income: Option<f64>,

    /// Enable debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:<14} {}", format!("{}:", name), value);
}

fn run(args: &Args) -> Result<()> {
    let data = CostData::new(args.base, args.multiplier)?;
    debug!("Pricing with {:?}", data);

    print_named_value("Owned", args.owned);
    print_named_value("Next unit", format!("{:.2}", get_unit_cost(args.owned, &data)));

    let total = get_cost(args.owned, &data, args.amount)?;
    print_named_value(&format!("Cost of {}", args.amount), format!("{:.2}", total));

    if let Some(income) = args.income {
        if !income.is_finite() || income < 0.0 {
            return Err(GameMathError::InvalidArgument(format!(
                "income must be a non-negative number, got {}",
                income
            )));
        }
        let max = get_max_buy(args.owned, &data, income);
        print_named_value("Income", format!("{:.2}", income));
        print_named_value("Max buy", max);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
