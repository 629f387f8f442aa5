//! Command-line arguments for the price table.
//!
//! This module defines the CLI interface using `clap`. Every option that makes
//! sense to set once per machine can also come from the environment.
use clap::Parser;
use price_common::api::DEFAULT_BASE_URL;
use price_common::{Currency, PriceError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the path of the coin list file.
pub const COIN_LIST_ENV: &str = "MYCRYPTOCONVERT";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Shows spot prices of the coins listed in a file", long_about = None)]
pub struct Args {
    /// Path to a text file with one coin id per line (e.g. `bitcoin`).
    /// Falls back to the MYCRYPTOCONVERT environment variable.
    #[arg(long, env = "MYCRYPTOCONVERT")]
    pub path: Option<String>,

    /// Currency column to show; repeat to pick several. Defaults to usd, eur and gbp.
    #[arg(long = "currency", value_enum, default_values_t = Currency::DEFAULT)]
    pub currencies: Vec<Currency>,

    /// Base URL of the price API.
    #[arg(long, env = "PRICE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl Args {
    /// Path of the coin list, with surrounding quotes removed.
    ///
    /// A blank value (e.g. `MYCRYPTOCONVERT=`) counts as not set.
    pub fn coin_list_path(&self) -> Result<PathBuf> {
        self.path
            .as_deref()
            .map(normalize_path)
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| PriceError::MissingEnv(COIN_LIST_ENV.to_string()))
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Normalize a path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
