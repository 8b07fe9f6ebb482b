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

use std::{path::Path, time::Duration};

use reqwest::blocking::{Client, RequestBuilder, multipart};
use serde::de::DeserializeOwned;

use crate::{
    api::{
        Backend, Credentials, LyricsRequest, LyricsResponse, Listing, NewSessionRequest,
        SaveTrackRequest, SignUpRequest, UploadLinkRequest, UploadResponse,
    },
    config::AppConfig,
    error::ApiError,
    model::{Session, Track, TrackMetadata, TrackPatch},
};

/// Blocking HTTP implementation of [`Backend`], used from the task worker
/// thread.
pub(crate) struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, creds: &Credentials, path: &str) -> RequestBuilder {
        self.client
            .get(self.url(path))
            .bearer_auth(&creds.access_token)
    }

    fn post(&self, creds: &Credentials, path: &str) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .bearer_auth(&creds.access_token)
    }

    fn delete(&self, creds: &Credentials, path: &str) -> RequestBuilder {
        self.client
            .delete(self.url(path))
            .bearer_auth(&creds.access_token)
    }
}

/// Sends a request and decodes a JSON response body.
pub(crate) fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let body = send_raw(request)?;
    serde_json::from_str(&body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Sends a request whose response body is not needed.
pub(crate) fn send_empty(request: RequestBuilder) -> Result<(), ApiError> {
    send_raw(request).map(|_| ())
}

fn send_raw(request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send()?;
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Request rejected");
        return Err(ApiError::from_response(status.as_u16(), &body));
    }

    Ok(body)
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

impl Backend for HttpBackend {
    fn list_sessions(&self, creds: &Credentials) -> Result<Vec<Session>, ApiError> {
        let path = format!("/sessions/user/{}", segment(&creds.user_id));
        send::<Listing<Session>>(self.get(creds, &path)).map(Listing::into_vec)
    }

    fn create_session(&self, creds: &Credentials, name: &str) -> Result<(), ApiError> {
        let body = NewSessionRequest {
            name,
            user_id: &creds.user_id,
        };
        send_empty(self.post(creds, "/sessions").json(&body))
    }

    fn delete_session(&self, creds: &Credentials, session_id: &str) -> Result<(), ApiError> {
        let path = format!("/sessions/{}", segment(session_id));
        send_empty(self.delete(creds, &path))
    }

    fn list_session_tracks(
        &self,
        creds: &Credentials,
        session_id: &str,
    ) -> Result<Vec<Track>, ApiError> {
        let path = format!("/sessions/{}/tracks", segment(session_id));
        send::<Listing<Track>>(self.get(creds, &path)).map(Listing::into_vec)
    }

    fn list_user_tracks(&self, creds: &Credentials) -> Result<Vec<Track>, ApiError> {
        let path = format!("/sessions/all-user-tracks/{}", segment(&creds.user_id));
        send::<Listing<Track>>(self.get(creds, &path)).map(Listing::into_vec)
    }

    fn upload_file(&self, creds: &Credentials, path: &Path) -> Result<TrackMetadata, ApiError> {
        let form = multipart::Form::new()
            .text("userId", creds.user_id.clone())
            .file("file", path)?;

        tracing::info!(path = %path.display(), "Uploading file");
        send::<UploadResponse>(self.post(creds, "/tracks/upload").multipart(form))
            .map(UploadResponse::into_metadata)
    }

    fn upload_link(&self, creds: &Credentials, url: &str) -> Result<TrackMetadata, ApiError> {
        let body = UploadLinkRequest {
            url,
            user_id: &creds.user_id,
        };

        tracing::info!(url, "Uploading link");
        send::<UploadResponse>(self.post(creds, "/tracks/upload-link").json(&body))
            .map(UploadResponse::into_metadata)
    }

    fn save_track_to_session(
        &self,
        creds: &Credentials,
        session_id: &str,
        metadata: &TrackMetadata,
    ) -> Result<(), ApiError> {
        let body = SaveTrackRequest {
            session_id,
            user_id: &creds.user_id,
            metadata,
        };
        send_empty(self.post(creds, "/tracks/save-to-session").json(&body))
    }

    fn delete_track(&self, creds: &Credentials, track_id: &str) -> Result<(), ApiError> {
        let path = format!("/tracks/{}", segment(track_id));
        send_empty(self.delete(creds, &path))
    }

    fn patch_track(
        &self,
        creds: &Credentials,
        track_id: &str,
        patch: &TrackPatch,
    ) -> Result<(), ApiError> {
        let path = format!("/tracks/{}", segment(track_id));
        let request = self
            .client
            .patch(self.url(&path))
            .bearer_auth(&creds.access_token)
            .json(patch);
        send_empty(request)
    }

    fn reextract_track(&self, creds: &Credentials, track_id: &str) -> Result<(), ApiError> {
        let path = format!("/tracks/{}/re-extract", segment(track_id));
        send_empty(self.post(creds, &path))
    }

    fn generate_lyrics(
        &self,
        creds: &Credentials,
        title: &str,
        artist: &str,
    ) -> Result<String, ApiError> {
        let body = LyricsRequest { title, artist };
        let response: LyricsResponse = send(self.post(creds, "/lyrics/generate").json(&body))?;

        response
            .lyrics
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| ApiError::MalformedBody("No lyrics in response".to_string()))
    }

    fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        send_empty(self.client.post(self.url("/auth/signup")).json(request))
    }
}
