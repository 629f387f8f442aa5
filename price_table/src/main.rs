//! Price Table: shows the current spot price of a list of cryptocurrencies.
//!
//! It reads coin ids from the text file named by the `MYCRYPTOCONVERT`
//! environment variable (or `--path`), asks the CoinGecko simple price endpoint
//! for their USD, EUR and GBP prices in a single request, and prints one table
//! row per coin.
//!
//! Usage example (CLI):
//! ```bash
//! MYCRYPTOCONVERT=./coins.txt price_table
//! price_table --path ./coins.txt --currency usd --currency gbp
//! ```
//!
//! The coin file holds one id per line, e.g. `bitcoin` or `ethereum`.
//! See `price_common::tickers` for details.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod render;

use crate::args::Args;
use crate::fetcher::PriceFetcher;
use clap::Parser;
use chrono::SecondsFormat;
use log::{error, info, warn};
use price_common::Result;
use price_common::tickers::load_coins;
use std::io::{self, Write};
use std::process::ExitCode;

fn run(args: Args) -> Result<()> {
    let path = args.coin_list_path()?;
    let coins = load_coins(&path)?;
    info!("Loaded {} coins from {}", coins.len(), path.display());

    let fetcher = PriceFetcher::new(&args.api_url, args.timeout())?;
    let board = fetcher.fetch(&coins, &args.currencies)?;

    let missing = board.missing_coins();
    if !missing.is_empty() {
        let ids: Vec<String> = missing.iter().map(|coin| coin.to_string()).collect();
        warn!("No prices returned for: {}", ids.join(", "));
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render::render(&board))?;
    writeln!(
        stdout,
        "Prices as of {}",
        board.fetched_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    Ok(())
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
