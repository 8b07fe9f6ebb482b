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

//! Parsing of the OAuth redirect URL.
//!
//! After the provider authenticates the user it redirects to the configured
//! callback URL with the session tokens in the fragment (implicit flow) or,
//! with some providers, the query string. The user pastes that URL into the
//! callback view.

use std::collections::HashMap;

use url::{Url, form_urlencoded};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CallbackTokens {
    pub(crate) access_token: String,
    pub(crate) refresh_token: String,
    pub(crate) expires_at: i64,
}

/// Extracts the session tokens from a callback URL.
///
/// `expires_at` is used when present, otherwise it is derived from
/// `expires_in` relative to `now`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the provider's `error_description`
/// when the redirect reports a failure, or when no access token is present.
pub(crate) fn parse_callback(callback_url: &str, now: i64) -> Result<CallbackTokens, ApiError> {
    let url = Url::parse(callback_url.trim())?;

    let mut params: HashMap<String, String> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if let Some(fragment) = url.fragment() {
        params.extend(
            form_urlencoded::parse(fragment.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned())),
        );
    }

    if let Some(description) = params
        .get("error_description")
        .or_else(|| params.get("error"))
    {
        return Err(ApiError::Rejected(description.clone()));
    }

    let access_token = params
        .remove("access_token")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Rejected("No session found in callback URL".to_string()))?;

    let expires_at = params
        .get("expires_at")
        .and_then(|v| v.parse().ok())
        .or_else(|| {
            params
                .get("expires_in")
                .and_then(|v| v.parse::<i64>().ok())
                .map(|secs| now + secs)
        })
        .unwrap_or(now);

    Ok(CallbackTokens {
        access_token,
        refresh_token: params.remove("refresh_token").unwrap_or_default(),
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_from_fragment() {
        let url = "http://localhost:5173/auth/callback#access_token=abc&expires_in=3600&refresh_token=def&token_type=bearer";

        let tokens = parse_callback(url, 1000).unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.refresh_token, "def");
        assert_eq!(tokens.expires_at, 4600);
    }

    #[test]
    fn test_explicit_expiry_wins() {
        let url = "http://localhost:5173/auth/callback?access_token=abc&expires_at=99999&expires_in=10";

        let tokens = parse_callback(url, 1000).unwrap();
        assert_eq!(tokens.expires_at, 99999);
        assert_eq!(tokens.refresh_token, "");
    }

    #[test]
    fn test_provider_error_is_reported() {
        let url = "http://localhost:5173/auth/callback#error=access_denied&error_description=User+cancelled";

        let err = parse_callback(url, 0).unwrap_err();
        assert_eq!(err.to_string(), "User cancelled");
    }

    #[test]
    fn test_missing_token_and_bad_url() {
        let err = parse_callback("http://localhost:5173/auth/callback", 0).unwrap_err();
        assert_eq!(err.to_string(), "No session found in callback URL");

        assert!(matches!(parse_callback("not a url", 0), Err(ApiError::Url(_))));
    }
}
