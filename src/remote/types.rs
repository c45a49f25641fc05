//! Error taxonomy for calls against the template service.

use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please set an API key first")]
    MissingCredential,

    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("{}", status_message(.status, .message))]
    Status { status: u16, message: Option<String> },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the server answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// The message the server sent, if it sent a usable one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn status_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => {
            let reason = reqwest::StatusCode::from_u16(*status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unexpected status");
            format!("HTTP {} {}", status, reason)
        }
    }
}

/// Pulls a human-readable message out of an error body. Prefers `message`,
/// then `error`; anything else (including non-JSON) yields `None`.
pub(crate) fn error_body_message(bytes: &[u8]) -> Option<String> {
    let v: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|k| v.get(*k).and_then(|x| x.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
