//! Response classification.
//!
//! The platform signals business-level failure in-band through a
//! numeric `responseCode` field (0 means success), not through HTTP
//! status codes. The classifier never fails: it wraps whatever came
//! back and flags it.

use crate::error::{PagaError, Result};
use serde_json::Value;

/// Body of a Paga response: parsed JSON, or the raw text when the body
/// is not valid JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    /// The body parsed as a JSON document.
    Json(Value),
    /// The body verbatim, when it was not valid JSON.
    Text(String),
}

impl ApiBody {
    /// Parse a response body, falling back to the raw text unmodified.
    pub(crate) fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => ApiBody::Json(value),
            Err(_) => ApiBody::Text(text),
        }
    }

    /// The parsed JSON document, if the body was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiBody::Json(value) => Some(value),
            ApiBody::Text(_) => None,
        }
    }

    /// The numeric `responseCode`, coerced from a string if the
    /// platform sent one.
    pub fn response_code(&self) -> Option<i64> {
        let code = self.as_json()?.get("responseCode")?;
        match code {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Classified outcome of a remote operation.
///
/// `error` is true for any `responseCode` other than 0, for a missing
/// `responseCode`, and for non-JSON bodies. The response itself is
/// passed through untouched either way.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiOutcome {
    /// Whether the platform reported the operation as failed.
    pub error: bool,
    /// The response body as received.
    pub response: ApiBody,
}

impl ApiOutcome {
    /// Classify a response body by its `responseCode`.
    pub fn classify(response: ApiBody) -> Self {
        let error = response.response_code() != Some(0);
        ApiOutcome { error, response }
    }

    /// True when the platform reported success (`responseCode` 0).
    pub fn is_success(&self) -> bool {
        !self.error
    }

    /// The platform `responseCode`, if one was present.
    pub fn response_code(&self) -> Option<i64> {
        self.response.response_code()
    }

    /// Convert a flagged failure into [`PagaError::Business`], for
    /// callers who prefer `?` over inspecting the flag.
    pub fn into_result(self) -> Result<ApiBody> {
        if self.error {
            Err(PagaError::Business {
                code: self.response_code().unwrap_or(-1),
                response: self.response,
            })
        } else {
            Ok(self.response)
        }
    }
}
