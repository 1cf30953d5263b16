//! Provider error taxonomy.
//!
//! Cognito reports failures as `{"__type": ..., "message": ...}` documents.
//! The response mapping in the handlers dispatches on the exception name, so
//! the client parses the raw body into a tagged kind instead of leaving
//! callers to match on strings.

use std::fmt;
use thiserror::Error;

/// Exception name of a structured provider error.
///
/// Only the exceptions the gateway dispatches on get their own variant,
/// everything else is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    NotAuthorized,
    CodeMismatch,
    ExpiredCode,
    Other(String),
}

impl ErrorKind {
    /// Map a wire-level `__type` to a kind.
    ///
    /// The raw value may be namespaced
    /// (`com.amazonaws.cognito#NotAuthorizedException`) or carry a detail
    /// suffix (`NotAuthorizedException:...`), both decorations are stripped
    /// before matching.
    #[must_use]
    pub fn from_type(raw: &str) -> Self {
        let mut name = raw.trim();

        if let Some((_, after)) = name.rsplit_once('#') {
            name = after;
        }

        if let Some((before, _)) = name.split_once(':') {
            name = before;
        }

        match name {
            "NotAuthorizedException" => Self::NotAuthorized,
            "CodeMismatchException" => Self::CodeMismatch,
            "ExpiredCodeException" => Self::ExpiredCode,
            _ => Self::Other(name.to_string()),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthorized => f.write_str("NotAuthorizedException"),
            Self::CodeMismatch => f.write_str("CodeMismatchException"),
            Self::ExpiredCode => f.write_str("ExpiredCodeException"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Failure of a single provider call.
#[derive(Debug, Error)]
pub enum Error {
    /// Structured error reported by the provider.
    #[error("{kind}: {message}")]
    Service { kind: ErrorKind, message: String },

    /// The provider could not be reached or the body could not be read.
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered but the payload was not the expected shape.
    #[error("unexpected provider response: {0}")]
    Response(String),

    /// Request signing failed before the call was attempted.
    #[error("failed to sign provider request: {0}")]
    Sign(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_plain() {
        assert_eq!(
            ErrorKind::from_type("NotAuthorizedException"),
            ErrorKind::NotAuthorized
        );
        assert_eq!(
            ErrorKind::from_type("CodeMismatchException"),
            ErrorKind::CodeMismatch
        );
        assert_eq!(
            ErrorKind::from_type("ExpiredCodeException"),
            ErrorKind::ExpiredCode
        );
    }

    #[test]
    fn test_from_type_namespaced() {
        assert_eq!(
            ErrorKind::from_type("com.amazonaws.cognito#NotAuthorizedException"),
            ErrorKind::NotAuthorized
        );
    }

    #[test]
    fn test_from_type_with_detail_suffix() {
        assert_eq!(
            ErrorKind::from_type("ExpiredCodeException: code expired"),
            ErrorKind::ExpiredCode
        );
    }

    #[test]
    fn test_from_type_unknown() {
        assert_eq!(
            ErrorKind::from_type("UsernameExistsException"),
            ErrorKind::Other("UsernameExistsException".to_string())
        );
    }

    #[test]
    fn test_service_error_display() {
        let error = Error::Service {
            kind: ErrorKind::NotAuthorized,
            message: "Incorrect username or password.".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "NotAuthorizedException: Incorrect username or password."
        );
    }

    #[test]
    fn test_unknown_service_error_display() {
        let error = Error::Service {
            kind: ErrorKind::from_type("com.amazonaws.cognito#UsernameExistsException"),
            message: "User already exists".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "UsernameExistsException: User already exists"
        );
    }
}
