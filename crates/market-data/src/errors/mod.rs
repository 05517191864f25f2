//! Error types for the market data crate.
//!
//! Fetchers return these as typed values; the serving layer collapses
//! them to user-facing placeholder strings at its rendering boundary.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// No API credential was configured for the provider.
    /// Every fetch keyed by that credential fails until one is supplied.
    #[error("Missing API credential for {provider}")]
    MissingCredential {
        /// The provider that requires the credential
        provider: String,
    },

    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider returned an empty dataset for the trading window.
    /// The symbol exists but has no rows; a non-error condition.
    #[error("No data for trading window")]
    NoData,

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider response could not be parsed, or was missing an
    /// expected field.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the response
        provider: String,
        /// Description of what was wrong with it
        message: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// True for the empty-dataset condition, which callers may want to
    /// log less loudly than real failures.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}
