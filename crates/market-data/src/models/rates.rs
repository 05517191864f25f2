use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed set of reference currencies every rate lookup reports,
/// in display order.
pub const TARGET_CURRENCIES: [&str; 4] = ["USD", "INR", "GBP", "EUR"];

/// Conversion rates for one unit of a base currency against the
/// reference currency set.
///
/// A slot is `None` when the provider's response did not contain that
/// code. A failed fetch never produces a `RateTable` at all; it is a
/// [`crate::MarketDataError`] instead, so the two conditions stay
/// distinguishable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// The base currency the rates are quoted against
    pub base: String,

    /// Rate for USD
    pub usd: Option<Decimal>,

    /// Rate for INR
    pub inr: Option<Decimal>,

    /// Rate for GBP
    pub gbp: Option<Decimal>,

    /// Rate for EUR
    pub eur: Option<Decimal>,
}

impl RateTable {
    /// Rates paired with their currency codes, in display order.
    pub fn entries(&self) -> [(&'static str, Option<Decimal>); 4] {
        [
            ("USD", self.usd),
            ("INR", self.inr),
            ("GBP", self.gbp),
            ("EUR", self.eur),
        ]
    }
}
