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

//! Application events and the main event loop.
//!
//! Everything that changes application state arrives on one channel as an
//! [`AppEvent`]: terminal input from the input thread, ticks from the tick
//! thread, session changes from the identity provider and results from the
//! task worker. The loop applies each event and then redraws.
//!
//! # Organization
//!
//! * `key_handlers`: routes terminal input to overlays, the command line,
//!   global keys and finally the current view.
//! * `handlers`: applies every other event to the application state.

mod handlers;
mod key_handlers;

use handlers::*;

use std::{io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    identity::AuthEvent,
    model::{MediaType, Session, Track, TrackMetadata},
    render::draw,
    routes::Route,
    util::media::LocalMedia,
};

/// Number of ticks a notice stays in the footer.
const NOTICE_TICKS: u8 = 16;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,

    ExitApplication,

    Navigate(Route),
    Notice(String),
    Alert(String),

    Auth(AuthEvent),
    SignInFailed(String),
    SignUpSucceeded,
    SignUpFailed(String),
    OAuthFailed(String),
    ProfileSaved,
    ProfileSaveFailed(String),

    MediaFilesListed {
        media_type: MediaType,
        files: Vec<PathBuf>,
    },
    LocalFileProbed(LocalMedia),
    UploadLinkEntered(String),
    UploadFinished(TrackMetadata),
    UploadFailed(String),

    SessionsLoaded(Vec<Session>),
    PickerSessionsLoaded(Result<Vec<Session>, String>),
    SessionCreated,
    SessionDeleted(String),
    TrackSaved {
        session_id: String,
    },
    SaveFailed(String),

    SessionTracksLoaded {
        session_id: String,
        tracks: Vec<Track>,
    },
    RecentTracksLoaded(Vec<Track>),
    TrackDeleted(String),
    LyricsGenerated {
        track_id: String,
        lyrics: String,
    },
    LyricsFailed {
        track_id: String,
        message: String,
    },
    ReextractFailed {
        track_id: String,
        message: String,
    },
}

/// A transient message shown in the footer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Notice {
    pub(crate) text: String,
    ticks: u8,
}

impl Notice {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ticks: NOTICE_TICKS,
        }
    }

    /// Counts down one tick, returning whether the notice has expired.
    fn tick(&mut self) -> bool {
        self.ticks = self.ticks.saturating_sub(1);
        self.ticks == 0
    }
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_input_event(app, Event::Key(key))?,
        AppEvent::Paste(text) => key_handlers::process_input_event(app, Event::Paste(text))?,
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication => {}

        AppEvent::Navigate(route) => handle_navigate(app, route)?,
        AppEvent::Notice(text) => handle_notice(app, text),
        AppEvent::Alert(message) => handle_alert(app, message),

        AppEvent::Auth(auth_event) => handle_auth(app, auth_event)?,
        AppEvent::SignInFailed(message) => handle_sign_in_failed(app, message),
        AppEvent::SignUpSucceeded => handle_sign_up_succeeded(app)?,
        AppEvent::SignUpFailed(message) => handle_sign_up_failed(app, message),
        AppEvent::OAuthFailed(message) => handle_oauth_failed(app, message),
        AppEvent::ProfileSaved => handle_profile_saved(app),
        AppEvent::ProfileSaveFailed(message) => handle_profile_save_failed(app, message),

        AppEvent::MediaFilesListed { media_type, files } => {
            handle_media_files_listed(app, media_type, files)
        }
        AppEvent::LocalFileProbed(local) => handle_local_file_probed(app, local),
        AppEvent::UploadLinkEntered(url) => handle_upload_link_entered(app, url)?,
        AppEvent::UploadFinished(metadata) => handle_upload_finished(app, metadata),
        AppEvent::UploadFailed(message) => handle_upload_failed(app, message),

        AppEvent::SessionsLoaded(sessions) => handle_sessions_loaded(app, sessions),
        AppEvent::PickerSessionsLoaded(result) => handle_picker_sessions_loaded(app, result),
        AppEvent::SessionCreated => handle_session_created(app),
        AppEvent::SessionDeleted(session_id) => handle_session_deleted(app, session_id),
        AppEvent::TrackSaved { session_id } => handle_track_saved(app, session_id),
        AppEvent::SaveFailed(message) => handle_save_failed(app, message),

        AppEvent::SessionTracksLoaded { session_id, tracks } => {
            handle_session_tracks_loaded(app, session_id, tracks)
        }
        AppEvent::RecentTracksLoaded(tracks) => handle_recent_tracks_loaded(app, tracks),
        AppEvent::TrackDeleted(track_id) => handle_track_deleted(app, track_id),
        AppEvent::LyricsGenerated { track_id, lyrics } => {
            handle_lyrics_generated(app, track_id, lyrics)
        }
        AppEvent::LyricsFailed { track_id, message } => {
            handle_lyrics_failed(app, track_id, message)
        }
        AppEvent::ReextractFailed { track_id, message } => {
            handle_reextract_failed(app, track_id, message)
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::{
        components::{Dialog, SessionPicker},
        config::AppConfig,
        model::{TrackStatus, identity_fixture, session_fixture, track_fixture},
        tasks::AppTask,
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn signed_in() -> (App, Receiver<AppTask>) {
        let (mut app, task_rx) = app();
        handle_event(
            &mut app,
            AppEvent::Auth(AuthEvent::InitialSession(Some(identity_fixture("u1")))),
        )
        .unwrap();
        (app, task_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn open_session(app: &mut App, task_rx: &Receiver<AppTask>, tracks: Vec<Track>) {
        handle_event(app, AppEvent::Navigate(Route::SessionDetail("s1".into()))).unwrap();
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::FetchSessionTracks(id)) if id == "s1"));
        handle_event(
            app,
            AppEvent::SessionTracksLoaded {
                session_id: "s1".into(),
                tracks,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_protected_route_redirects_when_signed_out() {
        let (mut app, task_rx) = app();
        handle_event(&mut app, AppEvent::Auth(AuthEvent::InitialSession(None))).unwrap();

        handle_event(&mut app, AppEvent::Navigate(Route::Home)).unwrap();

        assert_eq!(app.route, Route::SignIn);
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn test_navigation_waits_for_initial_session() {
        let (mut app, task_rx) = app();

        handle_event(&mut app, AppEvent::Navigate(Route::Sessions)).unwrap();
        assert_eq!(app.route, Route::Sessions);
        assert!(task_rx.try_recv().is_err());

        handle_event(
            &mut app,
            AppEvent::Auth(AuthEvent::InitialSession(Some(identity_fixture("u1")))),
        )
        .unwrap();

        assert_eq!(app.route, Route::Sessions);
        assert!(app.sessions_view.loading);
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::FetchSessions)));
    }

    #[test]
    fn test_sign_out_leaves_protected_route() {
        let (mut app, task_rx) = signed_in();
        handle_event(&mut app, AppEvent::Navigate(Route::Profile)).unwrap();

        handle_event(&mut app, AppEvent::Auth(AuthEvent::SignedOut)).unwrap();

        assert_eq!(app.route, Route::SignIn);
        assert!(app.home_view.user_name.is_empty());
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn test_upload_result_opens_confirmation() {
        let (mut app, _task_rx) = signed_in();
        let metadata = TrackMetadata {
            title: Some("Song".into()),
            artist: Some("Band".into()),
            ..Default::default()
        };

        handle_event(&mut app, AppEvent::UploadFinished(metadata.clone())).unwrap();

        let popup = app.metadata_popup.as_ref().unwrap();
        assert_eq!(popup.metadata, metadata);
        assert!(!popup.saving);
        assert!(!app.upload_view.uploading);
    }

    #[test]
    fn test_session_delete_is_optimistic() {
        let (mut app, task_rx) = signed_in();
        handle_event(&mut app, AppEvent::Navigate(Route::Sessions)).unwrap();
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::FetchSessions)));
        handle_event(
            &mut app,
            AppEvent::SessionsLoaded(vec![session_fixture("s1", "Demos"), session_fixture("s2", "Live")]),
        )
        .unwrap();

        press(&mut app, KeyCode::Char('d'));

        let ids: Vec<&str> = app.sessions_view.sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s2"]);
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::DeleteSession(id)) if id == "s1"));
    }

    #[test]
    fn test_track_delete_needs_confirmation() {
        let (mut app, task_rx) = signed_in();
        open_session(&mut app, &task_rx, vec![track_fixture("t1", TrackStatus::Completed)]);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.dialogs.len(), 1);
        assert!(task_rx.try_recv().is_err());

        press(&mut app, KeyCode::Char('y'));
        assert!(app.dialogs.is_empty());
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::DeleteTrack(id)) if id == "t1"));
    }

    #[test]
    fn test_lyrics_generation_success() {
        let (mut app, task_rx) = signed_in();
        open_session(&mut app, &task_rx, vec![track_fixture("t1", TrackStatus::Completed)]);

        press(&mut app, KeyCode::Char('l'));

        assert_eq!(app.session_detail_view.tracks[0].status, TrackStatus::Processing);
        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::GenerateLyrics { track_id, title, artist })
                if track_id == "t1" && title == "Title t1" && artist == "Artist"
        ));

        handle_event(
            &mut app,
            AppEvent::LyricsGenerated {
                track_id: "t1".into(),
                lyrics: "la la".into(),
            },
        )
        .unwrap();

        let track = &app.session_detail_view.tracks[0];
        assert_eq!(track.status, TrackStatus::Completed);
        assert_eq!(track.lyrics.as_deref(), Some("la la"));

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.lyrics_view.as_ref().unwrap().lines, vec!["la la".to_string()]);
    }

    #[test]
    fn test_lyrics_failure_reverts_status() {
        let (mut app, task_rx) = signed_in();
        open_session(&mut app, &task_rx, vec![track_fixture("t1", TrackStatus::Completed)]);
        press(&mut app, KeyCode::Char('l'));

        handle_event(
            &mut app,
            AppEvent::LyricsFailed {
                track_id: "t1".into(),
                message: "quota exceeded".into(),
            },
        )
        .unwrap();

        assert_eq!(app.session_detail_view.tracks[0].status, TrackStatus::Completed);
        assert_eq!(
            app.dialogs.front(),
            Some(&Dialog::Alert("Failed to generate lyrics: quota exceeded".into()))
        );
    }

    #[test]
    fn test_reextract_failure_reverts_status() {
        let (mut app, task_rx) = signed_in();
        open_session(&mut app, &task_rx, vec![track_fixture("t1", TrackStatus::Completed)]);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.session_detail_view.tracks[0].status, TrackStatus::Processing);
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::ReextractTrack(id)) if id == "t1"));

        handle_event(
            &mut app,
            AppEvent::ReextractFailed {
                track_id: "t1".into(),
                message: "timeout".into(),
            },
        )
        .unwrap();

        assert_eq!(app.session_detail_view.tracks[0].status, TrackStatus::Completed);
        assert_eq!(
            app.dialogs.front(),
            Some(&Dialog::Alert("Failed to re-extract track: timeout".into()))
        );
    }

    #[test]
    fn test_pending_track_is_left_alone() {
        let (mut app, task_rx) = signed_in();
        open_session(&mut app, &task_rx, vec![track_fixture("t1", TrackStatus::Pending)]);

        press(&mut app, KeyCode::Char('l'));

        assert_eq!(app.session_detail_view.tracks[0].status, TrackStatus::Pending);
        assert!(task_rx.try_recv().is_err());
        assert_eq!(
            app.notice.as_ref().map(|n| n.text.as_str()),
            Some("Lyrics can be generated once extraction completes")
        );
    }

    #[test]
    fn test_late_tracks_are_ignored() {
        let (mut app, task_rx) = signed_in();
        open_session(&mut app, &task_rx, vec![track_fixture("t1", TrackStatus::Completed)]);
        handle_event(&mut app, AppEvent::Navigate(Route::SessionDetail("s2".into()))).unwrap();

        handle_event(
            &mut app,
            AppEvent::SessionTracksLoaded {
                session_id: "s1".into(),
                tracks: vec![track_fixture("t9", TrackStatus::Pending)],
            },
        )
        .unwrap();

        assert!(app.session_detail_view.tracks.is_empty());
        assert!(app.session_detail_view.loading);
    }

    #[test]
    fn test_save_to_session() {
        let (mut app, task_rx) = signed_in();
        handle_event(&mut app, AppEvent::UploadFinished(TrackMetadata::default())).unwrap();

        press(&mut app, KeyCode::Char('s'));
        assert!(app.session_picker.is_some());
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::FetchPickerSessions)));

        handle_event(
            &mut app,
            AppEvent::PickerSessionsLoaded(Ok(vec![session_fixture("s1", "Demos")])),
        )
        .unwrap();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::SaveTrackToSession { session_id, .. }) if session_id == "s1"
        ));

        handle_event(&mut app, AppEvent::SaveFailed("offline".into())).unwrap();
        assert!(app.session_picker.as_ref().is_some_and(|p| !p.saving));
        assert!(app.metadata_popup.as_ref().is_some_and(|p| !p.saving));

        handle_event(
            &mut app,
            AppEvent::TrackSaved {
                session_id: "s1".into(),
            },
        )
        .unwrap();
        assert!(app.session_picker.is_none());
        assert!(app.metadata_popup.is_none());
    }

    #[test]
    fn test_alerts_queue_ahead_of_overlays() {
        let (mut app, _task_rx) = signed_in();
        app.metadata_popup = Some(crate::components::MetadataPopup::new(TrackMetadata::default()));
        app.session_picker = Some(SessionPicker::new());
        handle_event(&mut app, AppEvent::Alert("first".into())).unwrap();
        handle_event(&mut app, AppEvent::Alert("second".into())).unwrap();

        press(&mut app, KeyCode::Esc);

        assert_eq!(app.dialogs.front(), Some(&Dialog::Alert("second".into())));
        assert!(app.session_picker.is_some());
    }

    #[test]
    fn test_notice_expires() {
        let (mut app, _task_rx) = app();
        handle_event(&mut app, AppEvent::Notice("Session created".into())).unwrap();

        for _ in 1..NOTICE_TICKS {
            handle_event(&mut app, AppEvent::Tick).unwrap();
        }
        assert_eq!(app.notice.as_ref().map(|n| n.text.as_str()), Some("Session created"));

        handle_event(&mut app, AppEvent::Tick).unwrap();
        assert!(app.notice.is_none());
    }
}
