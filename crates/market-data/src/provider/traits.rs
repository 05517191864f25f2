//! Provider trait definitions.
//!
//! These are the seams the serving layer depends on; implement them to
//! swap in a different upstream source.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{IndexQuote, RateTable};

/// A source of currency conversion rates.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the latest conversion rates for one unit of `base_currency`
    /// against the fixed reference currency set.
    ///
    /// # Returns
    ///
    /// A [`RateTable`] on success (individual codes may still be absent
    /// from the provider's response), or a `MarketDataError` when the
    /// fetch itself failed. Implementations make a single bounded
    /// request; they never retry.
    async fn latest_rates(&self, base_currency: &str) -> Result<RateTable, MarketDataError>;
}

/// A source of latest index closing values.
#[async_trait]
pub trait IndexQuoteProvider: Send + Sync {
    /// Fetch the closing value of the most recent one-day trading window
    /// for `symbol`.
    ///
    /// # Returns
    ///
    /// The latest close rounded to 2 decimal places, or
    /// [`MarketDataError::NoData`] when the window has no rows.
    async fn latest_close(&self, symbol: &str) -> Result<IndexQuote, MarketDataError>;
}
