use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest closing value of a stock market index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexQuote {
    /// Timestamp of the close this value belongs to
    pub as_of: DateTime<Utc>,

    /// Closing value, rounded to 2 decimal places
    pub close: Decimal,
}
