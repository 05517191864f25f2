//! Yahoo Finance index value provider.
//!
//! Fetches the latest closing value of a stock market index through the
//! Yahoo Finance chart API, using the most recent one-day trading
//! window.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::IndexQuote;
use crate::provider::IndexQuoteProvider;

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance index value provider.
///
/// Issues one synchronous request per index; there is no batching and no
/// background progress reporting.
pub struct YahooIndexProvider {
    connector: yahoo::YahooConnector,
}

impl YahooIndexProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    /// Convert a Yahoo quote row to an [`IndexQuote`], rounding the
    /// close to 2 decimal places.
    fn index_quote_from(yahoo_quote: &yahoo::Quote) -> Result<IndexQuote, MarketDataError> {
        let as_of: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        let close = Decimal::from_f64_retain(yahoo_quote.close)
            .ok_or_else(|| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!(
                    "Failed to convert close price {} to Decimal",
                    yahoo_quote.close
                ),
            })?
            .round_dp(2);

        Ok(IndexQuote { as_of, close })
    }
}

#[async_trait]
impl IndexQuoteProvider for YahooIndexProvider {
    async fn latest_close(&self, symbol: &str) -> Result<IndexQuote, MarketDataError> {
        debug!("Fetching latest close for {} from Yahoo", symbol);

        let response = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::NoData
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        // The last row of the window is the most recent close.
        let yahoo_quote = response.last_quote().map_err(|_| MarketDataError::NoData)?;

        Self::index_quote_from(&yahoo_quote)
    }
}
