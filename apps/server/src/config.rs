use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub exchange_api_key: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("ML_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid ML_LISTEN_ADDR");
        // The rate provider degrades to fail-soft placeholders when the
        // credential is absent; startup never halts on it.
        let exchange_api_key = std::env::var("EXCHANGE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let cors_allow = std::env::var("ML_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("ML_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            exchange_api_key,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
