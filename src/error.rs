// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Errors raised while talking to the backend and the identity provider.
//!
//! Every variant is recoverable: the task worker logs it and the UI shows it
//! in an alert dialog.

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("Unexpected response: {0}")]
    MalformedBody(String),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage error: {0}")]
    Store(#[from] confy::ConfyError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Builds a status error from a non-2xx response body, preferring the
    /// backend's `message` (or the provider's `error_description`/`msg`).
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: error_message(body).unwrap_or_else(|| "Request failed".to_string()),
        }
    }
}

fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => ["message", "error_description", "msg", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string),
        Err(_) => Some(trimmed.chars().take(200).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_used() {
        let err = ApiError::from_response(400, r#"{"message":"Upload failed"}"#);
        assert_eq!(err.to_string(), "Upload failed (HTTP 400)");
    }

    #[test]
    fn test_provider_error_description_is_used() {
        let err = ApiError::from_response(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(err.to_string(), "Invalid login credentials (HTTP 400)");
    }

    #[test]
    fn test_plain_text_and_empty_bodies() {
        let err = ApiError::from_response(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Bad Gateway (HTTP 502)");

        let err = ApiError::from_response(500, "");
        assert_eq!(err.to_string(), "Request failed (HTTP 500)");
    }
}
