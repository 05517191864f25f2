//! HTTP routes and handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use marketlens_market_data::catalog;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    maps,
    models::{CountrySnapshot, DisplayValue, IndexRow, RateBlock, INDEX_UNAVAILABLE},
};

const INDEX_PAGE: &str = include_str!("../static/index.html");

async fn healthz() -> &'static str {
    "ok"
}

async fn readyz() -> &'static str {
    "ok"
}

async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Country names for the selector, in display order.
async fn list_countries() -> Json<Vec<&'static str>> {
    Json(catalog::countries().to_vec())
}

/// Run the full fetch sequence for one country.
///
/// Fetch failures never surface as HTTP errors; they collapse to
/// placeholder values in the response body. Only an unknown country is
/// an error here.
async fn country_snapshot(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> ApiResult<Json<CountrySnapshot>> {
    let profile = catalog::lookup(&country).ok_or(ApiError::NotFound)?;

    let rates = RateBlock::from_result(state.rate_provider.latest_rates(profile.currency).await);
    if let Some(ref error) = rates.error {
        tracing::warn!(country = %country, "Exchange rate fetch failed: {}", error);
    }

    // One fetch per configured index, in catalog order.
    let mut indices = Vec::with_capacity(profile.indices.len());
    for listing in profile.indices {
        let value = match state.index_provider.latest_close(listing.symbol).await {
            Ok(quote) => DisplayValue::Number(quote.close),
            Err(e) if e.is_no_data() => {
                tracing::debug!(symbol = listing.symbol, "Empty trading window");
                DisplayValue::Text(INDEX_UNAVAILABLE)
            }
            Err(e) => {
                tracing::warn!(symbol = listing.symbol, "Index fetch failed: {}", e);
                DisplayValue::Text(INDEX_UNAVAILABLE)
            }
        };
        indices.push(IndexRow {
            name: listing.name,
            value,
        });
    }

    let map_url = maps::build_map_embed_url(profile.exchange_hq);

    Ok(Json(CountrySnapshot {
        country,
        currency: profile.currency,
        rates,
        indices,
        map_url,
    }))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/countries", get(list_countries))
        .route("/countries/{country}/snapshot", get(country_snapshot));

    Router::new()
        .route("/", get(index_page))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
