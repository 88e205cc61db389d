//! PostgREST error bodies and their mapping onto tintnote errors.

use serde::Deserialize;
use serde_json::Value;

use tintnote_core::Error;

/// PostgREST code for "singular response requested, got 0 or >1 rows".
pub const SINGULAR_MISMATCH: &str = "PGRST116";

/// HTTP status PostgREST pairs with a singular-response mismatch.
pub const NOT_ACCEPTABLE: u16 = 406;

/// A non-2xx response from the backend.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PostgrestError {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
}

/// Error body shapes seen in practice: PostgREST's own, and the gateway's
/// (`msg` / `error_description`) in front of it.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    // gateways send numeric codes
    code: Option<Value>,
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl PostgrestError {
    /// Build from a status and raw body. Unparseable bodies fall back to the
    /// raw text, then to the status line.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.msg)
            .or(parsed.error_description)
            .or(parsed.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("Backend returned HTTP {}", status)
                } else {
                    trimmed.to_string()
                }
            });

        let code = parsed.code.and_then(|c| match c {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => Some(other.to_string()),
        });

        Self {
            status,
            code,
            message,
        }
    }

    /// Whether a singular read matched zero or several rows.
    pub fn is_singular_mismatch(&self) -> bool {
        self.code.as_deref() == Some(SINGULAR_MISMATCH)
            || (self.code.is_none() && self.status == NOT_ACCEPTABLE)
    }

    /// Map onto the client taxonomy.
    ///
    /// `singular_read` is set for by-id fetches; only those turn a
    /// mismatch into `NotFound`.
    pub fn into_error(self, singular_read: bool) -> Error {
        if singular_read && self.is_singular_mismatch() {
            Error::NotFound(self.message)
        } else {
            Error::Remote(self.message)
        }
    }
}
