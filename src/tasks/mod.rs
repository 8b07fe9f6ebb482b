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

//! Background task processing.
//!
//! Every call to the backend or the identity provider blocks on the network,
//! so the UI thread never makes one itself. It sends an [`AppTask`] to the
//! worker spawned here, which executes tasks one at a time and reports the
//! outcome back to the application as [`AppEvent`]s.
//!
//! Failures are logged and turned into alert events; nothing is retried.

mod handlers;
use handlers::*;

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{
    api::{Backend, SignUpRequest},
    config::AppConfig,
    events::AppEvent,
    identity::IdentityProvider,
    model::{MediaType, ProfileUpdate, TrackMetadata},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    RestoreSession,
    SignIn { email: String, password: String },
    SignUp(SignUpRequest),
    StartOAuth,
    CompleteOAuth(String),
    SignOut,
    UpdateProfile(ProfileUpdate),

    ListMediaFiles(MediaType),
    ProbeLocalFile(PathBuf),
    UploadFile(PathBuf),
    UploadLink(String),

    FetchSessions,
    FetchPickerSessions,
    CreateSession(String),
    DeleteSession(String),
    SaveTrackToSession {
        session_id: String,
        metadata: TrackMetadata,
    },

    FetchSessionTracks(String),
    FetchRecentTracks,
    DeleteTrack(String),
    ReextractTrack(String),
    GenerateLyrics {
        track_id: String,
        title: String,
        artist: String,
    },
}

/// Spawns the background thread that owns the backend client and the
/// identity provider and processes tasks until the channel closes.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
    backend: Box<dyn Backend>,
    mut identity: Box<dyn IdentityProvider>,
) {
    let config = config.clone();

    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                backend: backend.as_ref(),
                identity: identity.as_mut(),
            };

            run_task(task, &mut ctx);
        }

        tracing::debug!("Task worker stopped");
    });
}

/// Bundles shared resources required by task handlers.
pub(crate) struct TaskContext<'a> {
    pub(crate) config: &'a AppConfig,
    pub(crate) event_tx: &'a Sender<AppEvent>,
    pub(crate) backend: &'a dyn Backend,
    pub(crate) identity: &'a mut dyn IdentityProvider,
}

/// Executes one task, reporting any failure as an alert.
pub(crate) fn run_task(task: AppTask, ctx: &mut TaskContext) {
    tracing::debug!(?task, "Running task");

    if let Err(e) = handle_task(task, ctx) {
        tracing::error!("Task failed: {:#}", e);
        let _ = ctx.event_tx.send(AppEvent::Alert(format!("{:#}", e)));
    }
}

fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::RestoreSession => restore_session(ctx),
        AppTask::SignIn { email, password } => sign_in(ctx, &email, &password),
        AppTask::SignUp(request) => sign_up(ctx, request),
        AppTask::StartOAuth => start_oauth(ctx),
        AppTask::CompleteOAuth(url) => complete_oauth(ctx, &url),
        AppTask::SignOut => sign_out(ctx),
        AppTask::UpdateProfile(update) => update_profile(ctx, update),

        AppTask::ListMediaFiles(media_type) => list_media_files(ctx, media_type),
        AppTask::ProbeLocalFile(path) => probe_local_file(ctx, path),
        AppTask::UploadFile(path) => upload_file(ctx, path),
        AppTask::UploadLink(url) => upload_link(ctx, &url),

        AppTask::FetchSessions => fetch_sessions(ctx),
        AppTask::FetchPickerSessions => fetch_picker_sessions(ctx),
        AppTask::CreateSession(name) => create_session(ctx, &name),
        AppTask::DeleteSession(id) => delete_session(ctx, &id),
        AppTask::SaveTrackToSession {
            session_id,
            metadata,
        } => save_track_to_session(ctx, &session_id, &metadata),

        AppTask::FetchSessionTracks(id) => fetch_session_tracks(ctx, id),
        AppTask::FetchRecentTracks => fetch_recent_tracks(ctx),
        AppTask::DeleteTrack(id) => delete_track(ctx, id),
        AppTask::ReextractTrack(id) => reextract_track(ctx, id),
        AppTask::GenerateLyrics {
            track_id,
            title,
            artist,
        } => generate_lyrics(ctx, track_id, &title, &artist),
    }
}
