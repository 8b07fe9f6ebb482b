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

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    api::SignUpRequest,
    events::AppEvent,
    identity::AuthEvent,
    model::{MediaType, ProfileUpdate, TrackMetadata, TrackPatch, TrackStatus},
    routes::Route,
    tasks::TaskContext,
    util::{external, media},
};

pub(super) fn restore_session(ctx: &mut TaskContext) -> Result<()> {
    if let Err(e) = ctx.identity.restore() {
        // The UI waits on the initial session, so end the wait regardless
        ctx.event_tx
            .send(AppEvent::Auth(AuthEvent::InitialSession(None)))?;
        return Err(e).context("Failed to restore session");
    }

    Ok(())
}

pub(super) fn sign_in(ctx: &mut TaskContext, email: &str, password: &str) -> Result<()> {
    match ctx.identity.sign_in_with_password(email, password) {
        Ok(_) => ctx.event_tx.send(AppEvent::Navigate(Route::Home))?,
        Err(e) => {
            tracing::warn!("Sign in failed: {}", e);
            ctx.event_tx.send(AppEvent::SignInFailed(e.to_string()))?
        }
    }

    Ok(())
}

pub(super) fn sign_up(ctx: &mut TaskContext, request: SignUpRequest) -> Result<()> {
    match ctx.backend.sign_up(&request) {
        Ok(()) => {
            tracing::info!(email = %request.email, "Account created");
            ctx.event_tx.send(AppEvent::SignUpSucceeded)?
        }
        Err(e) => {
            tracing::warn!("Sign up failed: {}", e);
            ctx.event_tx.send(AppEvent::SignUpFailed(e.to_string()))?
        }
    }

    Ok(())
}

pub(super) fn start_oauth(ctx: &mut TaskContext) -> Result<()> {
    let url = ctx.identity.authorize_url()?;
    external::open_in_browser(&url)?;
    ctx.event_tx.send(AppEvent::Navigate(Route::AuthCallback))?;

    Ok(())
}

pub(super) fn complete_oauth(ctx: &mut TaskContext, callback_url: &str) -> Result<()> {
    match ctx.identity.complete_oauth(callback_url) {
        Ok(_) => ctx.event_tx.send(AppEvent::Navigate(Route::Home))?,
        Err(e) => {
            tracing::warn!("OAuth callback failed: {}", e);
            ctx.event_tx.send(AppEvent::OAuthFailed(e.to_string()))?
        }
    }

    Ok(())
}

pub(super) fn sign_out(ctx: &mut TaskContext) -> Result<()> {
    ctx.identity.sign_out()?;
    ctx.event_tx.send(AppEvent::Navigate(Route::SignIn))?;

    Ok(())
}

pub(super) fn update_profile(ctx: &mut TaskContext, update: ProfileUpdate) -> Result<()> {
    match ctx.identity.update_user(&update) {
        Ok(_) => ctx.event_tx.send(AppEvent::ProfileSaved)?,
        Err(e) => {
            tracing::warn!("Profile update failed: {}", e);
            ctx.event_tx.send(AppEvent::ProfileSaveFailed(e.to_string()))?
        }
    }

    Ok(())
}

pub(super) fn list_media_files(ctx: &mut TaskContext, media_type: MediaType) -> Result<()> {
    let roots = ctx.config.media_roots();
    let files = media::list_media_files(&roots, media_type);

    tracing::debug!(count = files.len(), ?media_type, "Listed media files");
    ctx.event_tx
        .send(AppEvent::MediaFilesListed { media_type, files })?;

    Ok(())
}

pub(super) fn probe_local_file(ctx: &mut TaskContext, path: PathBuf) -> Result<()> {
    let local = media::probe(&path)?;
    ctx.event_tx.send(AppEvent::LocalFileProbed(local))?;

    Ok(())
}

pub(super) fn upload_file(ctx: &mut TaskContext, path: PathBuf) -> Result<()> {
    // The view may not have the file size yet
    if let Err(message) = media::check_upload_size(&path) {
        return send_upload_result(ctx, Err(message));
    }

    let result = ctx
        .identity
        .credentials()
        .and_then(|creds| ctx.backend.upload_file(&creds, &path));

    send_upload_result(ctx, result.map_err(|e| e.to_string()))
}

pub(super) fn upload_link(ctx: &mut TaskContext, url: &str) -> Result<()> {
    let result = ctx
        .identity
        .credentials()
        .and_then(|creds| ctx.backend.upload_link(&creds, url));

    send_upload_result(ctx, result.map_err(|e| e.to_string()))
}

fn send_upload_result(
    ctx: &mut TaskContext,
    result: std::result::Result<TrackMetadata, String>,
) -> Result<()> {
    match result {
        Ok(metadata) => {
            tracing::info!(title = ?metadata.title, "Upload complete");
            ctx.event_tx.send(AppEvent::UploadFinished(metadata))?
        }
        Err(message) => {
            tracing::error!("Upload failed: {}", message);
            ctx.event_tx.send(AppEvent::UploadFailed(message))?
        }
    }

    Ok(())
}

pub(super) fn fetch_sessions(ctx: &mut TaskContext) -> Result<()> {
    let creds = ctx.identity.credentials()?;
    let sessions = ctx.backend.list_sessions(&creds)?;
    ctx.event_tx.send(AppEvent::SessionsLoaded(sessions))?;

    Ok(())
}

/// The picker renders its own error state, so failures are reported to it
/// rather than raised as an alert.
pub(super) fn fetch_picker_sessions(ctx: &mut TaskContext) -> Result<()> {
    let result = ctx
        .identity
        .credentials()
        .and_then(|creds| ctx.backend.list_sessions(&creds))
        .map_err(|e| e.to_string());

    if let Err(message) = &result {
        tracing::warn!("Failed to fetch sessions for picker: {}", message);
    }

    ctx.event_tx.send(AppEvent::PickerSessionsLoaded(result))?;

    Ok(())
}

pub(super) fn create_session(ctx: &mut TaskContext, name: &str) -> Result<()> {
    let creds = ctx.identity.credentials()?;
    ctx.backend.create_session(&creds, name)?;

    tracing::info!(name, "Session created");
    ctx.event_tx.send(AppEvent::SessionCreated)?;

    fetch_sessions(ctx)
}

pub(super) fn delete_session(ctx: &mut TaskContext, session_id: &str) -> Result<()> {
    let creds = ctx.identity.credentials()?;

    if let Err(e) = ctx.backend.delete_session(&creds, session_id) {
        // Restore the list the UI already pruned
        fetch_sessions(ctx)?;
        return Err(e).context("Failed to delete session");
    }

    tracing::info!(session_id, "Session deleted");
    ctx.event_tx
        .send(AppEvent::SessionDeleted(session_id.to_string()))?;

    fetch_sessions(ctx)
}

pub(super) fn save_track_to_session(
    ctx: &mut TaskContext,
    session_id: &str,
    metadata: &TrackMetadata,
) -> Result<()> {
    let result = ctx
        .identity
        .credentials()
        .and_then(|creds| ctx.backend.save_track_to_session(&creds, session_id, metadata));

    match result {
        Ok(()) => {
            tracing::info!(session_id, "Track saved");
            ctx.event_tx.send(AppEvent::TrackSaved {
                session_id: session_id.to_string(),
            })?
        }
        Err(e) => {
            tracing::error!("Failed to save track: {}", e);
            ctx.event_tx.send(AppEvent::SaveFailed(e.to_string()))?
        }
    }

    Ok(())
}

pub(super) fn fetch_session_tracks(ctx: &mut TaskContext, session_id: String) -> Result<()> {
    let creds = ctx.identity.credentials()?;
    let tracks = ctx.backend.list_session_tracks(&creds, &session_id)?;
    ctx.event_tx
        .send(AppEvent::SessionTracksLoaded { session_id, tracks })?;

    Ok(())
}

pub(super) fn fetch_recent_tracks(ctx: &mut TaskContext) -> Result<()> {
    let creds = ctx.identity.credentials()?;
    let tracks = ctx.backend.list_user_tracks(&creds)?;
    ctx.event_tx.send(AppEvent::RecentTracksLoaded(tracks))?;

    Ok(())
}

pub(super) fn delete_track(ctx: &mut TaskContext, track_id: String) -> Result<()> {
    let creds = ctx.identity.credentials()?;
    ctx.backend.delete_track(&creds, &track_id)?;

    tracing::info!(track_id, "Track deleted");
    ctx.event_tx.send(AppEvent::TrackDeleted(track_id))?;

    Ok(())
}

/// Requests a re-extraction. A failure is reported against the track so the
/// UI can revert its status.
pub(super) fn reextract_track(ctx: &mut TaskContext, track_id: String) -> Result<()> {
    let result = ctx
        .identity
        .credentials()
        .and_then(|creds| ctx.backend.reextract_track(&creds, &track_id));

    match result {
        Ok(()) => tracing::info!(track_id, "Re-extraction requested"),
        Err(e) => {
            tracing::error!(track_id, "Re-extraction failed: {}", e);
            ctx.event_tx.send(AppEvent::ReextractFailed {
                track_id,
                message: e.to_string(),
            })?
        }
    }

    Ok(())
}

/// Generates lyrics and stores them on the track, which is marked completed
/// again. Any failure is reported against the track so the UI can revert
/// its status.
pub(super) fn generate_lyrics(
    ctx: &mut TaskContext,
    track_id: String,
    title: &str,
    artist: &str,
) -> Result<()> {
    let result = ctx.identity.credentials().and_then(|creds| {
        let lyrics = ctx.backend.generate_lyrics(&creds, title, artist)?;

        let patch = TrackPatch {
            status: Some(TrackStatus::Completed),
            lyrics: Some(lyrics.clone()),
        };
        ctx.backend.patch_track(&creds, &track_id, &patch)?;

        Ok(lyrics)
    });

    match result {
        Ok(lyrics) => {
            tracing::info!(track_id, "Lyrics generated");
            ctx.event_tx
                .send(AppEvent::LyricsGenerated { track_id, lyrics })?
        }
        Err(e) => {
            tracing::error!(track_id, "Lyrics generation failed: {}", e);
            ctx.event_tx.send(AppEvent::LyricsFailed {
                track_id,
                message: e.to_string(),
            })?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{Backend, Credentials},
        config::AppConfig,
        error::ApiError,
        identity::{AuthListener, IdentityProvider},
        model::{Identity, Session, Track, identity_fixture, session_fixture, track_fixture},
        tasks::{AppTask, run_task},
    };
    use std::{
        path::Path,
        sync::{
            Mutex,
            mpsc::{self, Receiver},
        },
    };

    /// In-memory backend recording the calls made against it.
    #[derive(Default)]
    struct FakeBackend {
        calls: Mutex<Vec<String>>,
        sessions: Vec<Session>,
        tracks: Vec<Track>,
        metadata: TrackMetadata,
        lyrics: Option<String>,
        fail: Option<u16>,
    }

    impl FakeBackend {
        fn record(&self, call: String) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call);
            match self.fail {
                Some(status) => Err(ApiError::Status {
                    status,
                    message: "Backend unavailable".into(),
                }),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Backend for FakeBackend {
        fn list_sessions(&self, creds: &Credentials) -> Result<Vec<Session>, ApiError> {
            self.record(format!("list_sessions {}", creds.user_id))?;
            Ok(self.sessions.clone())
        }

        fn create_session(&self, _: &Credentials, name: &str) -> Result<(), ApiError> {
            self.record(format!("create_session {}", name))
        }

        fn delete_session(&self, _: &Credentials, session_id: &str) -> Result<(), ApiError> {
            self.record(format!("delete_session {}", session_id))
        }

        fn list_session_tracks(
            &self,
            _: &Credentials,
            session_id: &str,
        ) -> Result<Vec<Track>, ApiError> {
            self.record(format!("list_session_tracks {}", session_id))?;
            Ok(self.tracks.clone())
        }

        fn list_user_tracks(&self, _: &Credentials) -> Result<Vec<Track>, ApiError> {
            self.record("list_user_tracks".into())?;
            Ok(self.tracks.clone())
        }

        fn upload_file(&self, _: &Credentials, path: &Path) -> Result<TrackMetadata, ApiError> {
            self.record(format!("upload_file {}", path.display()))?;
            Ok(self.metadata.clone())
        }

        fn upload_link(&self, _: &Credentials, url: &str) -> Result<TrackMetadata, ApiError> {
            self.record(format!("upload_link {}", url))?;
            Ok(self.metadata.clone())
        }

        fn save_track_to_session(
            &self,
            _: &Credentials,
            session_id: &str,
            _: &TrackMetadata,
        ) -> Result<(), ApiError> {
            self.record(format!("save_track_to_session {}", session_id))
        }

        fn delete_track(&self, _: &Credentials, track_id: &str) -> Result<(), ApiError> {
            self.record(format!("delete_track {}", track_id))
        }

        fn patch_track(
            &self,
            _: &Credentials,
            track_id: &str,
            patch: &TrackPatch,
        ) -> Result<(), ApiError> {
            self.record(format!(
                "patch_track {} {}",
                track_id,
                serde_json::to_string(patch).unwrap()
            ))
        }

        fn reextract_track(&self, _: &Credentials, track_id: &str) -> Result<(), ApiError> {
            self.record(format!("reextract_track {}", track_id))
        }

        fn generate_lyrics(
            &self,
            _: &Credentials,
            title: &str,
            artist: &str,
        ) -> Result<String, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("generate_lyrics {} / {}", title, artist));
            self.lyrics
                .clone()
                .ok_or_else(|| ApiError::from_response(500, r#"{"message":"Lyrics service down"}"#))
        }

        fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError> {
            self.record(format!("sign_up {}", request.email))
        }
    }

    /// Identity provider with a fixed signed-in (or signed-out) user.
    struct FakeIdentity {
        user: Option<Identity>,
        restore_fails: bool,
    }

    impl FakeIdentity {
        fn signed_in() -> Self {
            Self {
                user: Some(identity_fixture("u1")),
                restore_fails: false,
            }
        }

        fn signed_out() -> Self {
            Self {
                user: None,
                restore_fails: false,
            }
        }
    }

    impl IdentityProvider for FakeIdentity {
        fn restore(&mut self) -> Result<Option<Identity>, ApiError> {
            if self.restore_fails {
                Err(ApiError::MalformedBody("bad session".into()))
            } else {
                Ok(self.user.clone())
            }
        }

        fn sign_in_with_password(&mut self, email: &str, _: &str) -> Result<Identity, ApiError> {
            if email == "alex@melodex.com" {
                self.user = Some(identity_fixture("u1"));
                Ok(identity_fixture("u1"))
            } else {
                Err(ApiError::from_response(
                    400,
                    r#"{"error_description":"Invalid login credentials"}"#,
                ))
            }
        }

        fn authorize_url(&self) -> Result<String, ApiError> {
            Ok("https://auth.test/authorize".into())
        }

        fn complete_oauth(&mut self, _: &str) -> Result<Identity, ApiError> {
            Err(ApiError::Rejected("No session found in callback URL".into()))
        }

        fn credentials(&mut self) -> Result<Credentials, ApiError> {
            self.user
                .as_ref()
                .map(|u| Credentials {
                    access_token: "token".into(),
                    user_id: u.id.clone(),
                })
                .ok_or(ApiError::NotAuthenticated)
        }

        fn update_user(&mut self, _: &ProfileUpdate) -> Result<Identity, ApiError> {
            self.user.clone().ok_or(ApiError::NotAuthenticated)
        }

        fn sign_out(&mut self) -> Result<(), ApiError> {
            self.user = None;
            Ok(())
        }

        fn on_auth_state_change(&mut self, _: AuthListener) {}
    }

    fn run(task: AppTask, backend: &FakeBackend, identity: &mut FakeIdentity) -> Vec<AppEvent> {
        let config = AppConfig::default();
        let (event_tx, event_rx): (_, Receiver<AppEvent>) = mpsc::channel();

        let mut ctx = TaskContext {
            config: &config,
            event_tx: &event_tx,
            backend,
            identity,
        };
        run_task(task, &mut ctx);

        event_rx.try_iter().collect()
    }

    #[test]
    fn test_upload_success_reports_metadata() {
        let backend = FakeBackend {
            metadata: TrackMetadata {
                title: Some("Summer Vibes".into()),
                artist: Some("The Midnight Collective".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let events = run(
            AppTask::UploadFile(PathBuf::from("/music/summer.mp3")),
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert_eq!(backend.calls(), vec!["upload_file /music/summer.mp3"]);
        assert!(matches!(
            events.as_slice(),
            [AppEvent::UploadFinished(m)] if m.title.as_deref() == Some("Summer Vibes")
        ));
    }

    #[test]
    fn test_oversized_file_is_not_uploaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.mp3");
        std::fs::File::create(&path)
            .unwrap()
            .set_len(media::MAX_UPLOAD_BYTES + 1)
            .unwrap();
        let backend = FakeBackend::default();

        let events = run(
            AppTask::UploadFile(path),
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert!(backend.calls().is_empty());
        assert!(matches!(
            events.as_slice(),
            [AppEvent::UploadFailed(msg)] if msg.ends_with("The maximum file size is 100.0 MB.")
        ));
    }

    #[test]
    fn test_upload_failure_is_reported() {
        let backend = FakeBackend {
            fail: Some(413),
            ..Default::default()
        };

        let events = run(
            AppTask::UploadLink("https://youtu.be/x".into()),
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert!(matches!(
            events.as_slice(),
            [AppEvent::UploadFailed(msg)] if msg == "Backend unavailable (HTTP 413)"
        ));
    }

    #[test]
    fn test_unauthenticated_fetch_alerts() {
        let backend = FakeBackend::default();

        let events = run(AppTask::FetchSessions, &backend, &mut FakeIdentity::signed_out());

        assert!(backend.calls().is_empty());
        assert!(matches!(
            events.as_slice(),
            [AppEvent::Alert(msg)] if msg == "User not authenticated"
        ));
    }

    #[test]
    fn test_picker_failure_goes_to_picker() {
        let backend = FakeBackend {
            fail: Some(500),
            ..Default::default()
        };

        let events = run(
            AppTask::FetchPickerSessions,
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert!(matches!(
            events.as_slice(),
            [AppEvent::PickerSessionsLoaded(Err(msg))] if msg.contains("Backend unavailable")
        ));
    }

    #[test]
    fn test_delete_session_refetches() {
        let backend = FakeBackend {
            sessions: vec![session_fixture("s2", "Live")],
            ..Default::default()
        };

        let events = run(
            AppTask::DeleteSession("s1".into()),
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert_eq!(backend.calls(), vec!["delete_session s1", "list_sessions u1"]);
        assert!(matches!(
            events.as_slice(),
            [AppEvent::SessionDeleted(id), AppEvent::SessionsLoaded(sessions)]
                if id == "s1" && sessions.len() == 1
        ));
    }

    #[test]
    fn test_create_session_refetches() {
        let backend = FakeBackend::default();

        let events = run(
            AppTask::CreateSession("Demos".into()),
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert_eq!(backend.calls(), vec!["create_session Demos", "list_sessions u1"]);
        assert!(matches!(
            events.as_slice(),
            [AppEvent::SessionCreated, AppEvent::SessionsLoaded(_)]
        ));
    }

    #[test]
    fn test_lyrics_success_patches_track() {
        let backend = FakeBackend {
            lyrics: Some("line one\nline two".into()),
            ..Default::default()
        };

        let events = run(
            AppTask::GenerateLyrics {
                track_id: "t1".into(),
                title: "Summer Vibes".into(),
                artist: "Midnight".into(),
            },
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert_eq!(
            backend.calls(),
            vec![
                "generate_lyrics Summer Vibes / Midnight",
                r#"patch_track t1 {"status":"completed","lyrics":"line one\nline two"}"#,
            ]
        );
        assert!(matches!(
            events.as_slice(),
            [AppEvent::LyricsGenerated { track_id, lyrics }]
                if track_id == "t1" && lyrics == "line one\nline two"
        ));
    }

    #[test]
    fn test_lyrics_failure_skips_patch() {
        let backend = FakeBackend::default();

        let events = run(
            AppTask::GenerateLyrics {
                track_id: "t1".into(),
                title: "Summer Vibes".into(),
                artist: "".into(),
            },
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert_eq!(backend.calls().len(), 1);
        assert!(matches!(
            events.as_slice(),
            [AppEvent::LyricsFailed { track_id, message }]
                if track_id == "t1" && message == "Lyrics service down (HTTP 500)"
        ));
    }

    #[test]
    fn test_reextract_outcomes() {
        let backend = FakeBackend::default();
        let events = run(
            AppTask::ReextractTrack("t1".into()),
            &backend,
            &mut FakeIdentity::signed_in(),
        );
        assert_eq!(backend.calls(), vec!["reextract_track t1"]);
        assert!(events.is_empty());

        let backend = FakeBackend {
            fail: Some(502),
            ..Default::default()
        };
        let events = run(
            AppTask::ReextractTrack("t1".into()),
            &backend,
            &mut FakeIdentity::signed_in(),
        );
        assert!(matches!(
            events.as_slice(),
            [AppEvent::ReextractFailed { track_id, message }]
                if track_id == "t1" && message == "Backend unavailable (HTTP 502)"
        ));
    }

    #[test]
    fn test_save_track_outcomes() {
        let backend = FakeBackend::default();
        let events = run(
            AppTask::SaveTrackToSession {
                session_id: "s1".into(),
                metadata: TrackMetadata::default(),
            },
            &backend,
            &mut FakeIdentity::signed_in(),
        );
        assert!(matches!(
            events.as_slice(),
            [AppEvent::TrackSaved { session_id }] if session_id == "s1"
        ));

        let failing = FakeBackend {
            fail: Some(500),
            ..Default::default()
        };
        let events = run(
            AppTask::SaveTrackToSession {
                session_id: "s1".into(),
                metadata: TrackMetadata::default(),
            },
            &failing,
            &mut FakeIdentity::signed_in(),
        );
        assert!(matches!(events.as_slice(), [AppEvent::SaveFailed(_)]));
    }

    #[test]
    fn test_session_tracks_carry_session_id() {
        let backend = FakeBackend {
            tracks: vec![track_fixture("t1", TrackStatus::Completed)],
            ..Default::default()
        };

        let events = run(
            AppTask::FetchSessionTracks("s9".into()),
            &backend,
            &mut FakeIdentity::signed_in(),
        );

        assert!(matches!(
            events.as_slice(),
            [AppEvent::SessionTracksLoaded { session_id, tracks }]
                if session_id == "s9" && tracks.len() == 1
        ));
    }

    #[test]
    fn test_sign_in_outcomes() {
        let backend = FakeBackend::default();
        let mut identity = FakeIdentity::signed_out();

        let events = run(
            AppTask::SignIn {
                email: "nobody@melodex.com".into(),
                password: "x".into(),
            },
            &backend,
            &mut identity,
        );
        assert!(matches!(
            events.as_slice(),
            [AppEvent::SignInFailed(msg)] if msg == "Invalid login credentials (HTTP 400)"
        ));

        let events = run(
            AppTask::SignIn {
                email: "alex@melodex.com".into(),
                password: "secret".into(),
            },
            &backend,
            &mut identity,
        );
        assert!(matches!(events.as_slice(), [AppEvent::Navigate(Route::Home)]));
    }

    #[test]
    fn test_failed_restore_ends_loading() {
        let backend = FakeBackend::default();
        let mut identity = FakeIdentity {
            user: None,
            restore_fails: true,
        };

        let events = run(AppTask::RestoreSession, &backend, &mut identity);

        assert!(matches!(
            events.as_slice(),
            [AppEvent::Auth(AuthEvent::InitialSession(None)), AppEvent::Alert(_)]
        ));
    }

    #[test]
    fn test_sign_out_returns_to_sign_in() {
        let backend = FakeBackend::default();
        let mut identity = FakeIdentity::signed_in();

        let events = run(AppTask::SignOut, &backend, &mut identity);

        assert!(identity.user.is_none());
        assert!(matches!(events.as_slice(), [AppEvent::Navigate(Route::SignIn)]));
    }
}
