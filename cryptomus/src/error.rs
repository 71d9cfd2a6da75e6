//! Error type returned by every fallible client operation.
//!
//! All failures surface as [`CryptomusError`]. Variants record where the
//! failure happened; none of them is treated as retryable by the client.

use http::StatusCode;

/// Errors that can occur while talking to the Cryptomus API.
#[derive(Debug, thiserror::Error)]
pub enum CryptomusError {
    /// The request URL could not be built.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The request payload could not be serialized to JSON.
    #[error("Failed to serialize payload: {context}: {source}")]
    Serialization {
        /// Human-readable context.
        context: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// A credential is not a valid HTTP header value.
    #[error("Invalid header value: {context}: {source}")]
    InvalidHeader {
        /// Human-readable context.
        context: String,
        /// The underlying header error.
        #[source]
        source: http::header::InvalidHeaderValue,
    },
    /// HTTP transport error (DNS, connect, TLS, timeout).
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: String,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The gateway answered with a non-success status code.
    #[error("Unexpected HTTP status {status}: {context}: {body}")]
    HttpStatus {
        /// Human-readable context.
        context: String,
        /// The HTTP status code.
        status: StatusCode,
        /// The response body.
        body: String,
    },
    /// Failed to read the response body.
    #[error("Failed to read response body: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: String,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The response body is not the expected JSON shape.
    #[error("Failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// Human-readable context.
        context: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// A required configuration value is missing.
    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),
    /// A configuration value could not be parsed.
    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig {
        /// Name of the offending key.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl CryptomusError {
    /// Returns the HTTP status code if the gateway rejected the request.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_contains_context_and_body() {
        let err = CryptomusError::HttpStatus {
            context: "POST v1/payment".to_owned(),
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"message":"Unauthorized"}"#.to_owned(),
        };
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("POST v1/payment"));
        assert!(message.contains("Unauthorized"));
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_serialization_preserves_source_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = source.to_string();
        let err = CryptomusError::JsonDeserialization {
            context: "POST v1/wallet".to_owned(),
            source,
        };
        assert!(err.to_string().ends_with(&expected));
        assert_eq!(err.status(), None);
    }
}
