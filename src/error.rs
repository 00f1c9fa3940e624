// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::EtherscanClient`] operations.
#[derive(Debug, Error)]
pub enum EtherscanError {
    /// Required configuration was missing or unusable at construction.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request failed before an HTTP status was available
    /// (connect, TLS, or body-read failure in the underlying session).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a client or server error status.
    #[error("HTTP status {status} from Etherscan")]
    Http {
        /// Status code of the failed response.
        status: StatusCode,
    },

    /// The response body was not valid JSON, or a balance inside it was
    /// not a decimal integer in u128 range (summed totals included).
    #[error("Malformed response body: {0}")]
    Parse(String),

    /// The JSON envelope is well-formed but has no `result` field.
    #[error("Response envelope is missing the `result` field")]
    MissingResult,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EtherscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_configuration() {
        let err = EtherscanError::Configuration("ETHERSCAN_API_KEY is not set".to_string());
        assert_eq!(format!("{}", err), "Configuration error: ETHERSCAN_API_KEY is not set");
    }

    #[test]
    fn test_display_http_carries_status() {
        let err = EtherscanError::Http { status: StatusCode::SERVICE_UNAVAILABLE };
        assert_eq!(format!("{}", err), "HTTP status 503 Service Unavailable from Etherscan");
    }

    #[test]
    fn test_display_missing_result() {
        let err = EtherscanError::MissingResult;
        assert_eq!(format!("{}", err), "Response envelope is missing the `result` field");
    }
}
