//! Data models shared by the fetchers and their callers.

mod quote;
mod rates;

pub use quote::IndexQuote;
pub use rates::{RateTable, TARGET_CURRENCIES};
