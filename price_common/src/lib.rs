//!
//! Common types and utilities shared by the price table binary.
//!
//! This crate aggregates:
//! - `error`: unified error type `PriceError` used across the workspace.
//! - `result`: handy `Result<T, PriceError>` alias.
//! - `tickers`: coin ids and the coin list file parser.
//! - `currency`: quote currencies shown as table columns.
//! - `api`: price API endpoint constants and URL building.
//! - `price`: decoded API response and the per-coin price rows.
#![warn(missing_docs)]
pub mod api;
pub mod currency;
pub mod error;
pub mod price;
pub mod result;
pub mod tickers;

pub use currency::Currency;
pub use error::PriceError;
pub use price::PriceBoard;
pub use result::Result;
pub use tickers::Coin;
