//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The [`RateProvider`] and [`IndexQuoteProvider`] traits the serving
//!   layer consumes
//! - Concrete implementations for exchangerate-api.com and Yahoo Finance
//!
//! Providers perform one bounded fetch per call. There is no retry, no
//! caching, and no shared state between calls.

mod traits;

// Provider implementations
pub mod exchange_rate_api;
pub mod yahoo;

// Re-exports
pub use traits::{IndexQuoteProvider, RateProvider};
