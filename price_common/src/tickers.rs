//! Coin ids and the coin list file parser.
//!
//! The coin list is a plain text file with one price API coin id per line
//! (`bitcoin`, `ethereum`, `usd-coin`, ...). Ids are case-insensitive and are
//! normalized to lowercase, since that is how the API keys its response.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::PriceError;

/// Trait providing file parsing for coin ids.
pub trait TickerParser {
    /// Parses coin ids from a buffered reader.
    ///
    /// Each non-empty line that is not a `#` comment is parsed as a single
    /// `Coin` using `FromStr`. Duplicates are dropped, keeping the first one.
    /// Returns an error if any line cannot be parsed.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Coin>, PriceError>;
}

/// A lowercase price API coin id, e.g. `bitcoin`.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Coin(String);

impl Coin {
    /// The id as sent to the price API.
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Row label: the id with its first letter upper-cased (`bitcoin` -> `Bitcoin`).
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Normalizes `s` into a coin id, returning the reason when it is not one.
    fn parse_id(s: &str) -> Result<Self, String> {
        let id = s.trim().to_lowercase();
        if id.is_empty() {
            return Err("empty coin id".to_string());
        }
        // ids end up verbatim in the query string
        if let Some(bad) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(format!("invalid character {:?} in coin id {:?}", bad, id));
        }
        Ok(Coin(id))
    }
}

impl FromStr for Coin {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coin::parse_id(s).map_err(PriceError::ParseTickersFile)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TickerParser for Coin {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, PriceError> {
        let mut coins = Vec::new();
        let mut seen = HashSet::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(PriceError::Io)?;
            // files saved by Notepad start with a byte order mark
            let line = match index {
                0 => line.strip_prefix('\u{feff}').unwrap_or(&line),
                _ => line.as_str(),
            };
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            match Coin::parse_id(trimmed_line) {
                Ok(coin) => {
                    if seen.insert(coin.clone()) {
                        coins.push(coin);
                    }
                }
                Err(reason) => {
                    return Err(PriceError::ParseTickersFile(format!(
                        "line {}: {}",
                        index + 1,
                        reason
                    )));
                }
            }
        }
        Ok(coins)
    }
}

/// Reads the coin list at `path`.
///
/// Fails with `PriceError::EmptyCoinList` when the file holds no coin ids, so
/// the caller never issues a request without ids.
pub fn load_coins(path: &Path) -> Result<Vec<Coin>, PriceError> {
    let file = File::open(path).map_err(|e| {
        PriceError::Io(io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let coins = Coin::parse_from_file(BufReader::new(file))?;
    if coins.is_empty() {
        return Err(PriceError::EmptyCoinList(path.display().to_string()));
    }
    Ok(coins)
}
