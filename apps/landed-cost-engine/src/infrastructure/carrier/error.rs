//! Carrier adapter errors and their mapping onto the carrier port.

use crate::application::ports::CarrierError;

/// Errors raised by the carrier HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum CarrierApiError {
    /// Transport-level failure (DNS, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not a parseable rate response.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// HTTP 401/403 from the carrier.
    #[error("unauthorized")]
    Unauthorized,

    /// A well-formed failure response blaming the token.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Any other non-success HTTP status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },
}

impl From<CarrierApiError> for CarrierError {
    fn from(error: CarrierApiError) -> Self {
        match error {
            CarrierApiError::Network(source) => Self::Transport {
                message: source.to_string(),
            },
            CarrierApiError::JsonParse(source) => Self::Parse {
                message: source.to_string(),
            },
            CarrierApiError::Unauthorized | CarrierApiError::InvalidToken => Self::AuthExpired,
            CarrierApiError::Api { status, message } => Self::Api {
                message: format!("status {status}: {message}"),
            },
        }
    }
}
