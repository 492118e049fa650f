//! Error types for the Address client library.

use thiserror::Error;

use crate::path::{Operation, ResourceKind};

/// The main error type for all Address client operations.
///
/// The first group of variants are contract errors: they indicate misuse of
/// the client and are always raised before any network call is made.
#[derive(Error, Debug)]
pub enum AddressError {
    /// A path template needs an identifier the caller did not supply
    #[error("{kind}.{operation} requires {identifier}")]
    MissingIdentifier {
        /// Resource kind being resolved
        kind: ResourceKind,
        /// Operation being resolved
        operation: Operation,
        /// Name of the missing identifier (`wallet_id` or `account_id`)
        identifier: &'static str,
    },

    /// An identifier was supplied but is not a positive integer
    #[error("{kind}.{operation} requires a positive {identifier}")]
    InvalidIdentifier {
        /// Resource kind being resolved
        kind: ResourceKind,
        /// Operation being resolved
        operation: Operation,
        /// Name of the rejected identifier
        identifier: &'static str,
    },

    /// Signing was requested but no secret token is configured
    #[error("Missing secret: a secret token is required for signed operations")]
    MissingSecret,

    /// The signing key could not be used
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The kind/operation pair has no path template
    #[error("Unknown operation: {kind}.{operation}")]
    UnknownOperation {
        /// Resource kind
        kind: ResourceKind,
        /// Operation not defined for that kind
        operation: Operation,
    },

    /// The coin symbol is not usable as a path segment
    #[error("Invalid coin symbol: {0:?}")]
    InvalidCoin(String),

    /// The client was built without credentials
    #[error("Missing credentials: an API token is required")]
    MissingCredentials,

    /// The HTTP exchange failed
    #[error("Request failed: {0}")]
    RequestFailed(#[from] TransportError),
}

impl AddressError {
    /// Check if this error was raised before any request was sent.
    pub fn is_contract_error(&self) -> bool {
        !matches!(self, AddressError::RequestFailed(_))
    }
}

/// Failures of the HTTP exchange itself.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest_middleware::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body was not valid JSON
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http(reqwest_middleware::Error::Reqwest(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_display() {
        let error = AddressError::MissingIdentifier {
            kind: ResourceKind::Account,
            operation: Operation::Read,
            identifier: "account_id",
        };
        assert_eq!(error.to_string(), "account.read requires account_id");
        assert!(error.is_contract_error());
    }

    #[test]
    fn test_status_error_is_request_failure() {
        let error: AddressError = TransportError::Status {
            status: 404,
            body: "not found".to_string(),
        }
        .into();
        assert!(!error.is_contract_error());
        assert_eq!(error.to_string(), "Request failed: HTTP 404: not found");
    }

    #[test]
    fn test_signing_errors_are_contract_errors() {
        let error = AddressError::Auth("Invalid HMAC key: bad length".to_string());
        assert_eq!(
            error.to_string(),
            "Authentication error: Invalid HMAC key: bad length"
        );
        assert!(error.is_contract_error());
        assert!(!matches!(error, AddressError::MissingSecret));

        let error = AddressError::InvalidIdentifier {
            kind: ResourceKind::Wallet,
            operation: Operation::Read,
            identifier: "wallet_id",
        };
        assert_eq!(error.to_string(), "wallet.read requires a positive wallet_id");
    }
}
