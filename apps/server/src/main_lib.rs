use std::sync::Arc;

use marketlens_market_data::{
    ExchangeRateApiProvider, IndexQuoteProvider, RateProvider, YahooIndexProvider,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub rate_provider: Arc<dyn RateProvider>,
    pub index_provider: Arc<dyn IndexQuoteProvider>,
}

pub fn init_tracing() {
    let log_format = std::env::var("ML_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if config.exchange_api_key.is_none() {
        tracing::warn!("EXCHANGE_API_KEY is not set; exchange rate lookups will be unavailable");
    }
    let rate_provider: Arc<dyn RateProvider> = Arc::new(ExchangeRateApiProvider::new(
        config.exchange_api_key.clone(),
    ));
    let index_provider: Arc<dyn IndexQuoteProvider> = Arc::new(YahooIndexProvider::new()?);

    Ok(Arc::new(AppState {
        rate_provider,
        index_provider,
    }))
}
