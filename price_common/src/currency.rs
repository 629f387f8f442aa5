//! Quote currencies shown as table columns.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Fiat currency a coin is priced in.
#[derive(
    Debug,
    Clone,
    Copy,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// Column set and order used when none is requested.
    pub const DEFAULT: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Gbp];

    /// Lowercase code used by the price API (`vs_currencies` and response keys).
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
        }
    }

    /// Column header, e.g. `USD`.
    pub fn header(&self) -> String {
        self.to_string()
    }
}
