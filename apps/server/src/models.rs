//! Response DTOs for the snapshot API.
//!
//! This module is the rendering boundary: typed fetch errors collapse to
//! the user-facing placeholder strings here and nowhere else.

use marketlens_market_data::{MarketDataError, RateTable};
use rust_decimal::Decimal;
use serde::Serialize;

/// Shown when a currency code was absent from an otherwise well-formed
/// provider response.
pub const RATE_MISSING: &str = "N/A";

/// Shown for every currency when the rate fetch itself failed.
pub const RATE_UNAVAILABLE: &str = "Unavailable";

/// Shown when an index value could not be fetched, or the trading window
/// was empty.
pub const INDEX_UNAVAILABLE: &str = "Data unavailable";

/// A number, or a placeholder string standing in for one.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(Decimal),
    Text(&'static str),
}

/// Exchange rates for one unit of the base currency.
///
/// Always carries exactly the four reference currencies, whatever the
/// upstream outcome; consumers branch on placeholder values, never on
/// key absence.
#[derive(Clone, Debug, Serialize)]
pub struct RateBlock {
    #[serde(rename = "USD")]
    pub usd: DisplayValue,
    #[serde(rename = "INR")]
    pub inr: DisplayValue,
    #[serde(rename = "GBP")]
    pub gbp: DisplayValue,
    #[serde(rename = "EUR")]
    pub eur: DisplayValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RateBlock {
    /// Collapse a fetch outcome into the displayed block.
    ///
    /// A well-formed table maps absent codes to [`RATE_MISSING`]; a
    /// failed fetch maps every code to [`RATE_UNAVAILABLE`] and keeps
    /// the error description.
    pub fn from_result(result: Result<RateTable, MarketDataError>) -> Self {
        match result {
            Ok(table) => {
                let cell = |rate: Option<Decimal>| match rate {
                    Some(value) => DisplayValue::Number(value),
                    None => DisplayValue::Text(RATE_MISSING),
                };
                Self {
                    usd: cell(table.usd),
                    inr: cell(table.inr),
                    gbp: cell(table.gbp),
                    eur: cell(table.eur),
                    error: None,
                }
            }
            Err(e) => Self {
                usd: DisplayValue::Text(RATE_UNAVAILABLE),
                inr: DisplayValue::Text(RATE_UNAVAILABLE),
                gbp: DisplayValue::Text(RATE_UNAVAILABLE),
                eur: DisplayValue::Text(RATE_UNAVAILABLE),
                error: Some(e.to_string()),
            },
        }
    }
}

/// One index row: display name paired with its latest value.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRow {
    pub name: &'static str,
    pub value: DisplayValue,
}

/// Everything the page renders for one country.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySnapshot {
    pub country: String,
    pub currency: &'static str,
    pub rates: RateBlock,
    pub indices: Vec<IndexRow>,
    pub map_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_block_success_shape() {
        let table = RateTable {
            base: "USD".to_string(),
            usd: Some(dec!(1.0)),
            inr: Some(dec!(83.1)),
            gbp: Some(dec!(0.79)),
            eur: Some(dec!(0.91)),
        };

        let value = serde_json::to_value(RateBlock::from_result(Ok(table))).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["EUR", "GBP", "INR", "USD"]);
        assert_eq!(object["INR"], serde_json::json!(83.1));
    }

    #[test]
    fn test_rate_block_missing_code_shape() {
        let table = RateTable {
            base: "USD".to_string(),
            usd: Some(dec!(1.0)),
            inr: None,
            gbp: Some(dec!(0.79)),
            eur: Some(dec!(0.91)),
        };

        let value = serde_json::to_value(RateBlock::from_result(Ok(table))).unwrap();
        assert_eq!(value["INR"], serde_json::json!(RATE_MISSING));
        assert_eq!(value["USD"], serde_json::json!(1.0));
    }

    #[test]
    fn test_rate_block_failure_shape() {
        let err = MarketDataError::MissingCredential {
            provider: "EXCHANGE_RATE_API".to_string(),
        };

        let block = RateBlock::from_result(Err(err));
        let value = serde_json::to_value(&block).unwrap();
        for code in ["USD", "INR", "GBP", "EUR"] {
            assert_eq!(value[code], serde_json::json!(RATE_UNAVAILABLE));
        }
        let error = value["error"].as_str().unwrap();
        assert!(!error.is_empty());
        assert!(error.contains("EXCHANGE_RATE_API"));
    }
}
