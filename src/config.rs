/// Client configuration from environment variables
///
/// The backend base URL is resolved once at process start and passed down to
/// the clients; call sites never read the environment themselves.
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the watchlist backend API
    pub api_base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `API_BASE_URL`: backend endpoint (default `http://localhost:8080`)
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        log::info!("Backend API URL: {}", api_base_url);
        Self { api_base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
