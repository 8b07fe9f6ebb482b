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

use anyhow::Result;

use crate::{
    App,
    components::{Dialog, MetadataPopup},
    events::Notice,
    identity::AuthEvent,
    model::{MediaType, Session, Track, TrackMetadata},
    routes::{Access, Route, guard},
    tasks::AppTask,
    util::media::LocalMedia,
};

const SIGN_UP_WELCOME: &str = "Welcome to Melodex! Your account has been created successfully.";

pub(super) fn handle_tick(app: &mut App) {
    if app.notice.as_mut().is_some_and(|notice| notice.tick()) {
        app.notice = None;
    }
}

pub(super) fn handle_notice(app: &mut App, text: String) {
    app.notice = Some(Notice::new(text));
}

/// Queues a blocking alert. A failed request also ends any loading or
/// submitting state it left behind.
pub(super) fn handle_alert(app: &mut App, message: String) {
    app.home_view.loading = false;
    app.sessions_view.loading = false;
    app.sessions_view.create_failed();
    app.session_detail_view.loading = false;

    push_alert(app, message);
}

pub(super) fn push_alert(app: &mut App, message: impl Into<String>) {
    app.dialogs.push_back(Dialog::Alert(message.into()));
}

/// Switches to `route`, subject to the route guard.
///
/// A protected route requested while the initial session is still loading
/// is entered once the session resolves.
pub(super) fn handle_navigate(app: &mut App, route: Route) -> Result<()> {
    let target = match guard(&route, &app.auth) {
        Access::Granted => route,
        Access::Loading => {
            app.route = route;
            return Ok(());
        }
        Access::Redirect(target) => target,
    };

    tracing::debug!(route = %target.path(), "Navigating");

    app.lyrics_view = None;
    app.route = target;
    enter_route(app)
}

/// Resets the view for the current route and requests its data.
fn enter_route(app: &mut App) -> Result<()> {
    match app.route.clone() {
        Route::Landing | Route::Upload => {}
        Route::SignIn => app.sign_in_view.reset(),
        Route::SignUp => app.sign_up_view.reset(),
        Route::AuthCallback => app.callback_view.reset(),

        Route::Home => {
            app.home_view.loading = true;
            app.task_tx.send(AppTask::FetchRecentTracks)?;
        }

        Route::Sessions => {
            app.sessions_view.loading = true;
            app.task_tx.send(AppTask::FetchSessions)?;
        }

        Route::SessionDetail(session_id) => {
            let name = app
                .sessions_view
                .sessions
                .iter()
                .find(|s| s.id == session_id)
                .map(|s| s.name.clone());

            app.session_detail_view.open(&session_id, name.as_deref());
            app.task_tx.send(AppTask::FetchSessionTracks(session_id))?;
        }

        Route::Profile => {
            app.profile_view.editing = None;
            app.profile_view.set_identity(app.auth.user().cloned());
        }
    }

    Ok(())
}

/// Folds a session change into the auth context and re-applies the route
/// guard to the current route.
pub(super) fn handle_auth(app: &mut App, event: AuthEvent) -> Result<()> {
    let was_loading = app.auth.is_loading();
    app.auth.apply(&event);

    tracing::debug!(?event, signed_in = app.auth.is_signed_in(), "Auth state changed");

    let user = app.auth.user().cloned();
    app.home_view.user_name = user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    if !app.profile_view.saving {
        app.profile_view.set_identity(user);
    }

    if event == AuthEvent::SignedOut {
        clear_user_state(app);
    }

    if !app.route.is_protected() {
        return Ok(());
    }

    match guard(&app.route, &app.auth) {
        Access::Redirect(_) => {
            let route = app.route.clone();
            handle_navigate(app, route)
        }
        Access::Granted if was_loading => enter_route(app),
        _ => Ok(()),
    }
}

/// Drops everything fetched on behalf of the previous user.
fn clear_user_state(app: &mut App) {
    app.home_view.set_tracks(vec![]);
    app.sessions_view.set_sessions(vec![]);
    app.sessions_view.create = None;
    app.session_detail_view.session_id = None;
    app.session_detail_view.tracks.clear();
    app.upload_view.uploading = false;
    app.upload_view.clear();
    app.metadata_popup = None;
    app.session_picker = None;
    app.lyrics_view = None;
}

pub(super) fn handle_sign_in_failed(app: &mut App, message: String) {
    app.sign_in_view.submitting = false;
    push_alert(app, message);
}

pub(super) fn handle_sign_up_succeeded(app: &mut App) -> Result<()> {
    push_alert(app, SIGN_UP_WELCOME);
    handle_navigate(app, Route::SignIn)
}

pub(super) fn handle_sign_up_failed(app: &mut App, message: String) {
    app.sign_up_view.submitting = false;
    push_alert(
        app,
        format!("There was an error signing up. Please try again. ({})", message),
    );
}

pub(super) fn handle_oauth_failed(app: &mut App, message: String) {
    app.callback_view.fail(message);
}

pub(super) fn handle_profile_saved(app: &mut App) {
    app.profile_view.saved(app.auth.user().cloned());
    handle_notice(app, "Profile updated".to_string());
}

pub(super) fn handle_profile_save_failed(app: &mut App, message: String) {
    app.profile_view.save_failed();
    push_alert(app, format!("Failed to update profile: {}", message));
}

pub(super) fn handle_media_files_listed(app: &mut App, media_type: MediaType, files: Vec<PathBuf>) {
    app.upload_view.set_picker_files(media_type, files);
}

pub(super) fn handle_local_file_probed(app: &mut App, local: LocalMedia) {
    if let Err(message) = app.upload_view.set_preview(local) {
        push_alert(app, message);
    }
}

pub(super) fn handle_upload_link_entered(app: &mut App, url: String) -> Result<()> {
    handle_navigate(app, Route::Upload)?;

    if app.route == Route::Upload {
        if let Err(message) = app.upload_view.set_link(&url) {
            handle_notice(app, message);
        }
    }

    Ok(())
}

/// Opens the confirmation popup with the extracted metadata.
pub(super) fn handle_upload_finished(app: &mut App, metadata: TrackMetadata) {
    app.upload_view.finish_upload(true);
    app.metadata_popup = Some(MetadataPopup::new(metadata));
}

pub(super) fn handle_upload_failed(app: &mut App, message: String) {
    app.upload_view.finish_upload(false);
    push_alert(app, format!("Upload failed: {}", message));
}

pub(super) fn handle_sessions_loaded(app: &mut App, sessions: Vec<Session>) {
    if let Some(session_id) = app.session_detail_view.session_id.as_deref() {
        if let Some(session) = sessions.iter().find(|s| s.id == session_id) {
            app.session_detail_view.name = session.name.clone();
        }
    }

    app.sessions_view.set_sessions(sessions);
}

pub(super) fn handle_picker_sessions_loaded(app: &mut App, result: Result<Vec<Session>, String>) {
    if let Some(picker) = app.session_picker.as_mut() {
        picker.set_sessions(result);
    }
}

pub(super) fn handle_session_created(app: &mut App) {
    app.sessions_view.session_created();
    handle_notice(app, "Session created".to_string());
}

pub(super) fn handle_session_deleted(app: &mut App, session_id: String) {
    app.sessions_view.remove(&session_id);
    handle_notice(app, "Session deleted".to_string());
}

/// Closes both the picker and the confirmation popup.
pub(super) fn handle_track_saved(app: &mut App, session_id: String) {
    tracing::debug!(session_id, "Closing metadata confirmation");

    app.session_picker = None;
    app.metadata_popup = None;
    handle_notice(app, "Track saved to session".to_string());
}

/// The picker stays open so another session can be chosen.
pub(super) fn handle_save_failed(app: &mut App, message: String) {
    if let Some(picker) = app.session_picker.as_mut() {
        picker.saving = false;
    }
    if let Some(popup) = app.metadata_popup.as_mut() {
        popup.saving = false;
    }

    push_alert(app, format!("Failed to save track: {}", message));
}

pub(super) fn handle_session_tracks_loaded(app: &mut App, session_id: String, tracks: Vec<Track>) {
    if !app.session_detail_view.set_tracks(&session_id, tracks) {
        tracing::debug!(session_id, "Ignoring tracks for a session no longer shown");
    }
}

pub(super) fn handle_recent_tracks_loaded(app: &mut App, tracks: Vec<Track>) {
    app.home_view.set_tracks(tracks);
}

pub(super) fn handle_track_deleted(app: &mut App, track_id: String) {
    app.session_detail_view.remove_track(&track_id);
    app.home_view.tracks.retain(|t| t.id != track_id);
    handle_notice(app, "Track deleted".to_string());
}

pub(super) fn handle_lyrics_generated(app: &mut App, track_id: String, lyrics: String) {
    app.session_detail_view.finish_lyrics(&track_id, lyrics);
    handle_notice(app, "Lyrics generated".to_string());
}

pub(super) fn handle_lyrics_failed(app: &mut App, track_id: String, message: String) {
    app.session_detail_view.revert_processing(&track_id);
    push_alert(app, format!("Failed to generate lyrics: {}", message));
}

pub(super) fn handle_reextract_failed(app: &mut App, track_id: String, message: String) {
    app.session_detail_view.revert_processing(&track_id);
    push_alert(app, format!("Failed to re-extract track: {}", message));
}
