use std::time::Duration;

use reviewdesk_core::error::CoreError;
use reviewdesk_core::pagination::{validate_page_size, DEFAULT_PAGE_SIZE};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development, where the
/// provider URLs point back at this server's own mock provider routes.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Property-management provider endpoint.
    pub provider_a_url: String,
    /// Places provider endpoint.
    pub provider_b_url: String,
    /// Per-source fetch bound in seconds (default: `10`).
    pub source_timeout_secs: u64,
    /// Page size when a request does not specify one (default: `5`).
    pub page_size: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                           |
    /// |------------------------|---------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                         |
    /// | `PORT`                 | `3000`                                            |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                              |
    /// | `PROVIDER_A_URL`       | `http://127.0.0.1:{PORT}/api/v1/providers/provider-a/reviews` |
    /// | `PROVIDER_B_URL`       | `http://127.0.0.1:{PORT}/api/v1/providers/provider-b/reviews` |
    /// | `SOURCE_TIMEOUT_SECS`  | `10`                                              |
    /// | `PAGE_SIZE`            | `5`                                               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let provider_a_url = std::env::var("PROVIDER_A_URL")
            .unwrap_or_else(|_| local_provider_url(port, "provider-a"));

        let provider_b_url = std::env::var("PROVIDER_B_URL")
            .unwrap_or_else(|_| local_provider_url(port, "provider-b"));

        let source_timeout_secs: u64 = std::env::var("SOURCE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SOURCE_TIMEOUT_SECS must be a valid u64");

        let page_size = std::env::var("PAGE_SIZE")
            .map(|raw| parse_page_size(&raw).unwrap_or_else(|e| panic!("Invalid PAGE_SIZE: {e}")))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            provider_a_url,
            provider_b_url,
            source_timeout_secs,
            page_size,
        }
    }

    pub fn source_timeout(&self) -> Duration {
        Duration::from_secs(self.source_timeout_secs)
    }
}

/// URL of this server's own mock provider route.
pub fn local_provider_url(port: u16, provider: &str) -> String {
    format!("http://127.0.0.1:{port}/api/v1/providers/{provider}/reviews")
}

/// Parse a default page size, holding it to the same bounds as a
/// per-request `page_size`.
pub fn parse_page_size(raw: &str) -> Result<usize, CoreError> {
    let page_size = raw.trim().parse::<usize>().map_err(|_| {
        CoreError::Validation(format!("page_size must be a positive integer, got '{raw}'"))
    })?;
    validate_page_size(page_size)?;
    Ok(page_size)
}
