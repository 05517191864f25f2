//! Country reference catalog.
//!
//! Static lookups from country name to financial metadata: the official
//! currency, the stock indices to display, and the location of the
//! country's primary exchange. The table is fixed at compile time and
//! never mutated.

/// A stock market index shown for a country, paired with the provider
/// symbol used to fetch it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexListing {
    /// Display name (e.g., "Nikkei 225")
    pub name: &'static str,
    /// Provider symbol (e.g., "^N225")
    pub symbol: &'static str,
}

/// Financial metadata for one country.
#[derive(Clone, Copy, Debug)]
pub struct CountryProfile {
    /// ISO 4217 currency code
    pub currency: &'static str,
    /// Major stock indices, in display order
    pub indices: &'static [IndexListing],
    /// Free-text location of the primary exchange, suitable as a map query
    pub exchange_hq: &'static str,
}

static JAPAN: CountryProfile = CountryProfile {
    currency: "JPY",
    indices: &[
        IndexListing {
            name: "Nikkei 225",
            symbol: "^N225",
        },
        IndexListing {
            name: "TOPIX",
            symbol: "^TOPX",
        },
    ],
    exchange_hq: "Tokyo Stock Exchange",
};

static INDIA: CountryProfile = CountryProfile {
    currency: "INR",
    indices: &[
        IndexListing {
            name: "NIFTY 50",
            symbol: "^NSEI",
        },
        IndexListing {
            name: "Sensex",
            symbol: "^BSESN",
        },
        IndexListing {
            name: "NIFTY Bank",
            symbol: "^NSEBANK",
        },
    ],
    exchange_hq: "National Stock Exchange Mumbai",
};

static USA: CountryProfile = CountryProfile {
    currency: "USD",
    indices: &[
        IndexListing {
            name: "S&P 500",
            symbol: "^GSPC",
        },
        IndexListing {
            name: "Dow Jones Industrial Average",
            symbol: "^DJI",
        },
        IndexListing {
            name: "NASDAQ Composite",
            symbol: "^IXIC",
        },
    ],
    exchange_hq: "New York Stock Exchange",
};

static UK: CountryProfile = CountryProfile {
    currency: "GBP",
    indices: &[
        IndexListing {
            name: "FTSE 100",
            symbol: "^FTSE",
        },
        IndexListing {
            name: "FTSE 250",
            symbol: "^FTMC",
        },
    ],
    exchange_hq: "London Stock Exchange",
};

static CHINA: CountryProfile = CountryProfile {
    currency: "CNY",
    indices: &[
        IndexListing {
            name: "SSE Composite",
            symbol: "000001.SS",
        },
        IndexListing {
            name: "CSI 300",
            symbol: "000300.SS",
        },
    ],
    exchange_hq: "Shanghai Stock Exchange",
};

static SOUTH_KOREA: CountryProfile = CountryProfile {
    currency: "KRW",
    indices: &[
        IndexListing {
            name: "KOSPI",
            symbol: "^KS11",
        },
        IndexListing {
            name: "KOSDAQ",
            symbol: "^KQ11",
        },
    ],
    exchange_hq: "Korea Exchange Seoul",
};

static COUNTRIES: [&str; 6] = ["Japan", "India", "USA", "UK", "China", "South Korea"];

/// Country names in display order, for populating a selector.
pub fn countries() -> &'static [&'static str] {
    &COUNTRIES
}

/// Look up the profile for a country name.
///
/// # Returns
///
/// The profile if the country is in the catalog, or None for unknown names.
pub fn lookup(country: &str) -> Option<&'static CountryProfile> {
    match country {
        "Japan" => Some(&JAPAN),
        "India" => Some(&INDIA),
        "USA" => Some(&USA),
        "UK" => Some(&UK),
        "China" => Some(&CHINA),
        "South Korea" => Some(&SOUTH_KOREA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_country_resolves() {
        for country in countries() {
            assert!(lookup(country).is_some(), "no profile for {}", country);
        }
    }

    #[test]
    fn test_currency_codes_are_well_formed() {
        for country in countries() {
            let profile = lookup(country).unwrap();
            assert_eq!(profile.currency.len(), 3, "{}", country);
            assert!(
                profile.currency.chars().all(|c| c.is_ascii_uppercase()),
                "{}",
                country
            );
        }
    }

    #[test]
    fn test_every_country_has_indices() {
        for country in countries() {
            let profile = lookup(country).unwrap();
            assert!(!profile.indices.is_empty(), "{}", country);
            assert!(!profile.exchange_hq.is_empty(), "{}", country);
        }
    }

    #[test]
    fn test_display_order() {
        assert_eq!(
            countries(),
            ["Japan", "India", "USA", "UK", "China", "South Korea"]
        );
    }

    #[test]
    fn test_unknown_country() {
        assert!(lookup("Atlantis").is_none());
        assert!(lookup("japan").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_japan_profile() {
        let profile = lookup("Japan").unwrap();
        assert_eq!(profile.currency, "JPY");
        assert_eq!(profile.indices[0].name, "Nikkei 225");
        assert_eq!(profile.indices[0].symbol, "^N225");
        assert_eq!(profile.indices[1].name, "TOPIX");
        assert_eq!(profile.exchange_hq, "Tokyo Stock Exchange");
    }
}
