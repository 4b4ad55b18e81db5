//! Error types for the Paga Business SDK.
//!
//! Failures keep their original cause: transport errors carry the
//! underlying `reqwest` error, business rejections carry the response
//! body the platform returned.

use crate::response::ApiBody;
use thiserror::Error;

/// Result type for Paga Business operations.
pub type Result<T> = std::result::Result<T, PagaError>;

/// Errors that can occur when using the Paga Business SDK.
#[derive(Error, Debug)]
pub enum PagaError {
    /// Network-level failure from the HTTP transport.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request payload could not be serialized.
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The platform rejected the operation with a non-zero
    /// `responseCode`. A code of `-1` means the response carried no
    /// parseable `responseCode` at all (for example a raw-text body).
    #[error("operation rejected by the Paga platform (responseCode {code})")]
    Business {
        /// The `responseCode` the platform returned.
        code: i64,
        /// The full response body.
        response: ApiBody,
    },

    /// A field named in an operation's signing contract was absent from
    /// the request payload.
    #[error("operation {operation} is missing signing field {field}")]
    MissingSigningField {
        /// The remote operation being signed.
        operation: String,
        /// Path of the missing field.
        field: &'static str,
    },

    /// No signing contract is registered for the operation.
    #[error("no signing contract for operation {0}")]
    UnknownOperation(String),

    /// A required credential was not supplied to the builder.
    #[error("client is missing required {0}")]
    MissingCredential(&'static str),

    /// A credential contains bytes that cannot be carried in an HTTP
    /// header.
    #[error("credential rejected as an HTTP header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl PagaError {
    /// Returns true if this is a business-level rejection from the
    /// platform, as opposed to a transport or input failure.
    pub fn is_business(&self) -> bool {
        matches!(self, PagaError::Business { .. })
    }

    /// The platform `responseCode`, if this is a business rejection.
    pub fn response_code(&self) -> Option<i64> {
        match self {
            PagaError::Business { code, .. } => Some(*code),
            _ => None,
        }
    }
}
