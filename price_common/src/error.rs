//! Error types shared across the workspace.
//!
//! The `PriceError` enum unifies the failure cases of reading the coin list,
//! talking to the price API and decoding its answer, allowing every layer to
//! propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type for the price table.
#[derive(Error, Debug)]
pub enum PriceError {
    /// I/O error originating from the standard library (coin list file, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration value, e.g. a malformed price API URL.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing the coin list file into `Coin` values.
    #[error("Parse tickers file error: {0}")]
    ParseTickersFile(String),

    /// The coin list file contained no usable coin ids.
    #[error("Coin list {0} contains no coin ids")]
    EmptyCoinList(String),

    /// A required setting was given neither on the command line nor in the environment.
    #[error("Environment variable {0} is not set")]
    MissingEnv(String),

    /// Transport-level failure of the HTTP request (DNS, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The price API answered with a non-success status code.
    #[error("Price API returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the API.
        body: String,
    },

    /// Failure while decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
