//! exchangerate-api.com rate provider implementation.
//!
//! Fetches the latest conversion rates from the v6 `latest/{base}`
//! endpoint. Requests are keyed by an API credential supplied through
//! process configuration; the credential never appears in logs.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::RateTable;
use crate::provider::RateProvider;

const BASE_URL: &str = "https://v6.exchangerate-api.com/v6";
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// One bounded wait per request; there is no retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// exchangerate-api.com rate provider.
///
/// Successful responses carry a `conversion_rates` object keyed by
/// currency code; API-level failures come back as a body with an
/// `error-type` string instead.
pub struct ExchangeRateApiProvider {
    client: Client,
    api_key: Option<String>,
}

/// `latest/{base}` response. Only the fields we read.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    conversion_rates: Option<HashMap<String, Decimal>>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

impl ExchangeRateApiProvider {
    /// Create a new provider.
    ///
    /// `api_key` is `None` when no credential was configured; every
    /// fetch then returns [`MarketDataError::MissingCredential`] without
    /// issuing a request.
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Build the request URL. The credential is percent-encoded because
    /// it travels in the path.
    fn endpoint(api_key: &str, base_currency: &str) -> String {
        format!(
            "{}/{}/latest/{}",
            BASE_URL,
            encode(api_key),
            base_currency
        )
    }

    /// Extract the reference-set rates from a response body.
    ///
    /// A body without a `conversion_rates` object is malformed, whatever
    /// else it contains; the provider's `error-type` field is folded into
    /// the message when present. Codes absent from the table map to
    /// `None` rather than an error.
    fn parse_latest_rates(text: &str, base_currency: &str) -> Result<RateTable, MarketDataError> {
        let response: LatestRatesResponse =
            serde_json::from_str(text).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        let rates =
            response
                .conversion_rates
                .ok_or_else(|| MarketDataError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: match response.error_type {
                        Some(kind) => format!("API error: {}", kind),
                        None => "Missing conversion_rates field".to_string(),
                    },
                })?;

        Ok(RateTable {
            base: base_currency.to_string(),
            usd: rates.get("USD").copied(),
            inr: rates.get("INR").copied(),
            gbp: rates.get("GBP").copied(),
            eur: rates.get("EUR").copied(),
        })
    }

    /// Make the `latest/{base}` request and return the raw body.
    async fn fetch(&self, api_key: &str, base_currency: &str) -> Result<String, MarketDataError> {
        let url = Self::endpoint(api_key, base_currency);

        debug!("Exchange rate request: {}/***/latest/{}", BASE_URL, base_currency);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn latest_rates(&self, base_currency: &str) -> Result<RateTable, MarketDataError> {
        let api_key =
            self.api_key
                .as_deref()
                .ok_or_else(|| MarketDataError::MissingCredential {
                    provider: PROVIDER_ID.to_string(),
                })?;

        let text = self.fetch(api_key, base_currency).await?;
        Self::parse_latest_rates(&text, base_currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "result": "success",
            "base_code": "USD",
            "conversion_rates": {
                "USD": 1.0,
                "INR": 83.1,
                "GBP": 0.79,
                "EUR": 0.91,
                "JPY": 151.42
            }
        }"#;

        let table = ExchangeRateApiProvider::parse_latest_rates(body, "USD").unwrap();
        assert_eq!(table.base, "USD");
        assert_eq!(table.usd, Some(dec!(1.0)));
        assert_eq!(table.inr, Some(dec!(83.1)));
        assert_eq!(table.gbp, Some(dec!(0.79)));
        assert_eq!(table.eur, Some(dec!(0.91)));
    }

    #[test]
    fn test_parse_missing_code_is_none() {
        let body = r#"{
            "result": "success",
            "conversion_rates": {
                "USD": 1.0,
                "INR": 83.1,
                "EUR": 0.91
            }
        }"#;

        let table = ExchangeRateApiProvider::parse_latest_rates(body, "USD").unwrap();
        assert_eq!(table.gbp, None);
        assert_eq!(table.usd, Some(dec!(1.0)));
    }

    #[test]
    fn test_parse_missing_conversion_rates() {
        let body = r#"{"result": "error", "error-type": "invalid-key"}"#;

        let err = ExchangeRateApiProvider::parse_latest_rates(body, "JPY").unwrap_err();
        match err {
            MarketDataError::MalformedResponse { message, .. } => {
                assert!(message.contains("invalid-key"), "{}", message);
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_garbage_body() {
        let err = ExchangeRateApiProvider::parse_latest_rates("<html>503</html>", "JPY").unwrap_err();
        assert!(matches!(err, MarketDataError::MalformedResponse { .. }));
    }

    #[test]
    fn test_endpoint_encodes_credential() {
        let url = ExchangeRateApiProvider::endpoint("abc/123", "JPY");
        assert_eq!(
            url,
            "https://v6.exchangerate-api.com/v6/abc%2F123/latest/JPY"
        );
    }

    #[tokio::test]
    async fn test_missing_credential_fails_without_request() {
        let provider = ExchangeRateApiProvider::new(None);
        let err = provider.latest_rates("USD").await.unwrap_err();
        assert!(matches!(err, MarketDataError::MissingCredential { .. }));
    }
}
