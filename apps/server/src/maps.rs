//! Map embed URL construction.

use urlencoding::encode;

const MAPS_BASE_URL: &str = "https://www.google.com/maps";

/// Build an embeddable Google Maps URL for a free-text location.
pub fn build_map_embed_url(location: &str) -> String {
    format!("{}?q={}&output=embed", MAPS_BASE_URL, encode(location))
}
