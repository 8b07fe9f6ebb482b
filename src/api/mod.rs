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

//! Melodex backend REST API.
//!
//! The [`Backend`] trait is the seam between the task worker and the HTTP
//! client so that worker handlers can be exercised against an in-memory
//! implementation. Every call except sign-up is authorised with the bearer
//! token carried by [`Credentials`].

mod http;

pub(crate) use http::{HttpBackend, send, send_empty};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    model::{Session, Track, TrackMetadata, TrackPatch},
};

/// Access token and owning user for a backend request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Credentials {
    pub(crate) access_token: String,
    pub(crate) user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignUpRequest {
    pub(crate) full_name: String,
    pub(crate) user_name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) gender: String,
    pub(crate) country: String,
}

pub(crate) trait Backend: Send {
    fn list_sessions(&self, creds: &Credentials) -> Result<Vec<Session>, ApiError>;

    fn create_session(&self, creds: &Credentials, name: &str) -> Result<(), ApiError>;

    fn delete_session(&self, creds: &Credentials, session_id: &str) -> Result<(), ApiError>;

    fn list_session_tracks(
        &self,
        creds: &Credentials,
        session_id: &str,
    ) -> Result<Vec<Track>, ApiError>;

    fn list_user_tracks(&self, creds: &Credentials) -> Result<Vec<Track>, ApiError>;

    fn upload_file(&self, creds: &Credentials, path: &Path) -> Result<TrackMetadata, ApiError>;

    fn upload_link(&self, creds: &Credentials, url: &str) -> Result<TrackMetadata, ApiError>;

    fn save_track_to_session(
        &self,
        creds: &Credentials,
        session_id: &str,
        metadata: &TrackMetadata,
    ) -> Result<(), ApiError>;

    fn delete_track(&self, creds: &Credentials, track_id: &str) -> Result<(), ApiError>;

    fn patch_track(
        &self,
        creds: &Credentials,
        track_id: &str,
        patch: &TrackPatch,
    ) -> Result<(), ApiError>;

    fn reextract_track(&self, creds: &Credentials, track_id: &str) -> Result<(), ApiError>;

    fn generate_lyrics(
        &self,
        creds: &Credentials,
        title: &str,
        artist: &str,
    ) -> Result<String, ApiError>;

    fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError>;
}

/// Body of the save call: the confirmed metadata plus its destination.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveTrackRequest<'a> {
    session_id: &'a str,
    user_id: &'a str,
    #[serde(flatten)]
    metadata: &'a TrackMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewSessionRequest<'a> {
    name: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadLinkRequest<'a> {
    url: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
struct LyricsRequest<'a> {
    title: &'a str,
    artist: &'a str,
}

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    #[serde(default)]
    lyrics: Option<String>,
}

/// Upload endpoints answer with the metadata either bare or wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UploadResponse {
    Wrapped { metadata: TrackMetadata },
    Bare(TrackMetadata),
}

impl UploadResponse {
    fn into_metadata(self) -> TrackMetadata {
        match self {
            UploadResponse::Wrapped { metadata } => metadata,
            UploadResponse::Bare(metadata) => metadata,
        }
    }
}

/// Collection endpoints answer with either a bare array or an object
/// holding one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "sessions", alias = "tracks", alias = "data")]
        items: Vec<T>,
    },
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Wrapped { items } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackStatus;

    #[test]
    fn test_save_request_flattens_metadata() {
        let metadata = TrackMetadata {
            title: Some("Summer Vibes".into()),
            duration: Some(222000),
            file_url: Some("https://cdn.example.com/a.mp3".into()),
            ..Default::default()
        };
        let request = SaveTrackRequest {
            session_id: "s1",
            user_id: "u1",
            metadata: &metadata,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "sessionId": "s1",
                "userId": "u1",
                "title": "Summer Vibes",
                "duration": 222000,
                "fileUrl": "https://cdn.example.com/a.mp3"
            })
        );
    }

    #[test]
    fn test_upload_response_shapes() {
        let wrapped: UploadResponse =
            serde_json::from_str(r#"{"metadata":{"title":"A","artist":"B"}}"#).unwrap();
        assert_eq!(wrapped.into_metadata().title.as_deref(), Some("A"));

        let bare: UploadResponse = serde_json::from_str(r#"{"title":"C","genre":"Jazz"}"#).unwrap();
        let metadata = bare.into_metadata();
        assert_eq!(metadata.title.as_deref(), Some("C"));
        assert_eq!(metadata.genre.as_deref(), Some("Jazz"));
    }

    #[test]
    fn test_listing_shapes() {
        let bare: Listing<Track> = serde_json::from_str(r#"[{"id":"t1"},{"id":2}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 2);

        let wrapped: Listing<Track> =
            serde_json::from_str(r#"{"tracks":[{"id":"t1","status":"processing"}]}"#).unwrap();
        let tracks = wrapped.into_vec();
        assert_eq!(tracks[0].status, TrackStatus::Processing);
    }

    #[test]
    fn test_sign_up_field_names() {
        let request = SignUpRequest {
            full_name: "Alex Chen".into(),
            user_name: "audiophile42".into(),
            email: "alex@melodex.com".into(),
            password: "secret".into(),
            gender: "other".into(),
            country: "NZ".into(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fullName"], "Alex Chen");
        assert_eq!(value["userName"], "audiophile42");
        assert_eq!(value["country"], "NZ");
    }
}
