//! Marketlens Market Data Crate
//!
//! Provider-backed market data fetching for the country intelligence
//! service.
//!
//! # Overview
//!
//! The crate provides:
//! - A static reference catalog mapping countries to their currency,
//!   major stock indices, and primary exchange location
//! - An exchange rate fetcher for the fixed reference currency set
//! - An index value fetcher returning the latest daily close
//!
//! # Core Types
//!
//! - [`catalog::CountryProfile`] - Static financial metadata for a country
//! - [`RateTable`] - Conversion rates against the reference currency set
//! - [`IndexQuote`] - Latest closing value of a stock market index
//! - [`MarketDataError`] - Typed failure taxonomy for all fetch operations
//!
//! Fetchers never panic and never suppress failures internally; every
//! failure mode is a [`MarketDataError`] variant, and callers decide how
//! to present it at their rendering boundary.

pub mod catalog;
pub mod errors;
pub mod models;
pub mod provider;

// Re-export public types from models
pub use models::{IndexQuote, RateTable, TARGET_CURRENCIES};

// Re-export error type
pub use errors::MarketDataError;

// Re-export provider types
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::yahoo::YahooIndexProvider;
pub use provider::{IndexQuoteProvider, RateProvider};
