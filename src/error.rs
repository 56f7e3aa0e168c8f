use thiserror::Error;

/// Errors surfaced by the backend API clients.
///
/// `Validation` is a server rejection carrying a user-facing message
/// (duplicate address, unknown address). `Server` is any other non-2xx
/// response. `Network` means the request never completed at all.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server error (HTTP {status})")]
    Server { status: u16 },

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Message to show the user: the backend-provided detail when present,
    /// otherwise the per-operation fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Server {
                status: status.as_u16(),
            },
            None => ApiError::Network(err.to_string()),
        }
    }
}
