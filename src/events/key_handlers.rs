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

//! Terminal input routing.
//!
//! Input goes to the first of these that is present, which then consumes it:
//!
//! * a queued dialog,
//! * the lyrics popup,
//! * the session picker,
//! * the metadata confirmation popup,
//! * the command line (open, or opened with `:` when no text field has focus),
//! * the global keys (function-key navigation),
//! * the view for the current route.
//!
//! `Ctrl-C` always quits.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    App,
    components::{
        CallbackAction, ConfirmTarget, Dialog, DialogAction, HomeAction, LyricsAction,
        LyricsView, MetadataAction, ProfileAction, SessionDetailAction, SessionPicker,
        SessionPickerAction, SessionsAction, SignInAction, SignUpAction, Submission,
        UploadAction, landing::{self, LandingAction},
    },
    events::{
        AppEvent,
        handlers::{handle_navigate, handle_notice, push_alert},
    },
    routes::Route,
    tasks::AppTask,
    util::external::{open_in_browser, search_url},
};

pub(super) fn process_input_event(app: &mut App, event: Event) -> Result<()> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
    }

    if let Some(dialog) = app.dialogs.front() {
        if let Some(action) = dialog.process_event(&event) {
            app.dialogs.pop_front();
            if let DialogAction::Confirmed(target) = action {
                process_confirmed(app, target)?;
            }
        }
        return Ok(());
    }

    if let Some(lyrics) = app.lyrics_view.as_mut() {
        if let Some(LyricsAction::Close) = lyrics.process_event(&event) {
            app.lyrics_view = None;
        }
        return Ok(());
    }

    if app.session_picker.is_some() {
        return process_session_picker_event(app, &event);
    }

    if app.metadata_popup.is_some() {
        return process_metadata_event(app, &event);
    }

    let can_open = !captures_text(app);
    if app
        .commander
        .handle_event(&event, can_open, &app.task_tx, &app.event_tx)?
    {
        return Ok(());
    }

    if process_global_key_event(app, &event)? {
        return Ok(());
    }

    process_view_event(app, &event)
}

/// Whether the current view has a focused text field.
fn captures_text(app: &App) -> bool {
    match app.route {
        Route::SignIn | Route::SignUp | Route::AuthCallback => true,
        Route::Upload => app.upload_view.captures_text(),
        Route::Sessions => app.sessions_view.captures_text(),
        Route::Profile => app.profile_view.captures_text(),
        Route::Landing | Route::Home | Route::SessionDetail(_) => false,
    }
}

fn process_global_key_event(app: &mut App, event: &Event) -> Result<bool> {
    let Event::Key(key) = event else {
        return Ok(false);
    };

    let route = match key.code {
        KeyCode::F(1) => Route::Home,
        KeyCode::F(2) => Route::Upload,
        KeyCode::F(3) => Route::Sessions,
        KeyCode::F(4) => Route::Profile,
        _ => return Ok(false),
    };

    handle_navigate(app, route)?;
    Ok(true)
}

fn process_confirmed(app: &mut App, target: ConfirmTarget) -> Result<()> {
    match target {
        ConfirmTarget::DeleteTrack(track_id) => app.task_tx.send(AppTask::DeleteTrack(track_id))?,
    }

    Ok(())
}

fn process_session_picker_event(app: &mut App, event: &Event) -> Result<()> {
    let Some(picker) = app.session_picker.as_mut() else {
        return Ok(());
    };

    match picker.process_event(event) {
        Some(SessionPickerAction::Select(session_id)) => {
            if let Some(popup) = app.metadata_popup.as_mut() {
                picker.saving = true;
                popup.saving = true;
                app.task_tx.send(AppTask::SaveTrackToSession {
                    session_id,
                    metadata: popup.metadata.clone(),
                })?;
            }
        }
        Some(SessionPickerAction::Close) => app.session_picker = None,
        None => {}
    }

    Ok(())
}

fn process_metadata_event(app: &mut App, event: &Event) -> Result<()> {
    let Some(popup) = app.metadata_popup.as_mut() else {
        return Ok(());
    };

    match popup.process_event(event) {
        Some(MetadataAction::Save) => {
            app.session_picker = Some(SessionPicker::new());
            app.task_tx.send(AppTask::FetchPickerSessions)?;
        }
        Some(MetadataAction::Search(provider)) => {
            let (title, artist) = popup.search_terms();
            let url = search_url(provider, title, artist);
            if let Err(e) = open_in_browser(&url) {
                tracing::error!("{:#}", e);
                push_alert(app, format!("{:#}", e));
            }
        }
        Some(MetadataAction::Close) => app.metadata_popup = None,
        None => {}
    }

    Ok(())
}

fn process_view_event(app: &mut App, event: &Event) -> Result<()> {
    match app.route {
        Route::Landing => {
            if let Some(action) = landing::process_event(event) {
                let route = match action {
                    LandingAction::GetStarted => Route::Home,
                    LandingAction::SignIn => Route::SignIn,
                    LandingAction::SignUp => Route::SignUp,
                };
                handle_navigate(app, route)?;
            }
        }

        Route::SignIn => match app.sign_in_view.process_event(event) {
            Some(SignInAction::Submit { email, password }) => {
                app.task_tx.send(AppTask::SignIn { email, password })?
            }
            Some(SignInAction::Invalid(message)) => push_alert(app, message),
            Some(SignInAction::OAuth) => app.task_tx.send(AppTask::StartOAuth)?,
            Some(SignInAction::SignUp) => handle_navigate(app, Route::SignUp)?,
            None => {}
        },

        Route::SignUp => match app.sign_up_view.process_event(event) {
            Some(SignUpAction::Submit(request)) => app.task_tx.send(AppTask::SignUp(request))?,
            Some(SignUpAction::Invalid(message)) => push_alert(app, message),
            Some(SignUpAction::SignIn) => handle_navigate(app, Route::SignIn)?,
            None => {}
        },

        Route::AuthCallback => match app.callback_view.process_event(event) {
            Some(CallbackAction::Complete(url)) => app.task_tx.send(AppTask::CompleteOAuth(url))?,
            Some(CallbackAction::Reopen) => app.task_tx.send(AppTask::StartOAuth)?,
            Some(CallbackAction::Cancel) => handle_navigate(app, Route::SignIn)?,
            None => {}
        },

        Route::Home => match app.home_view.process_event(event) {
            Some(HomeAction::Upload) => handle_navigate(app, Route::Upload)?,
            Some(HomeAction::Sessions) => handle_navigate(app, Route::Sessions)?,
            Some(HomeAction::Refresh) => {
                app.home_view.loading = true;
                app.task_tx.send(AppTask::FetchRecentTracks)?;
            }
            None => {}
        },

        Route::Upload => match app.upload_view.process_event(event) {
            Some(UploadAction::OpenPicker(media_type)) => {
                app.task_tx.send(AppTask::ListMediaFiles(media_type))?
            }
            Some(UploadAction::Probe(path)) => app.task_tx.send(AppTask::ProbeLocalFile(path))?,
            Some(UploadAction::Submit(Submission::File(path))) => {
                app.task_tx.send(AppTask::UploadFile(path))?
            }
            Some(UploadAction::Submit(Submission::Link(url))) => {
                app.task_tx.send(AppTask::UploadLink(url))?
            }
            Some(UploadAction::Rejected(message)) => push_alert(app, message),
            None => {}
        },

        Route::Sessions => match app.sessions_view.process_event(event) {
            Some(SessionsAction::Open(session_id)) => {
                handle_navigate(app, Route::SessionDetail(session_id))?
            }
            Some(SessionsAction::Create(name)) => app.task_tx.send(AppTask::CreateSession(name))?,
            Some(SessionsAction::Delete(session_id)) => {
                app.sessions_view.remove(&session_id);
                app.task_tx.send(AppTask::DeleteSession(session_id))?;
            }
            Some(SessionsAction::Refresh) => {
                app.sessions_view.loading = true;
                app.task_tx.send(AppTask::FetchSessions)?;
            }
            None => {}
        },

        Route::SessionDetail(_) => process_session_detail_event(app, event)?,

        Route::Profile => match app.profile_view.process_event(event) {
            Some(ProfileAction::Save(update)) => app.task_tx.send(AppTask::UpdateProfile(update))?,
            Some(ProfileAction::Invalid(message)) => push_alert(app, message),
            Some(ProfileAction::Logout) => app.task_tx.send(AppTask::SignOut)?,
            None => {}
        },
    }

    Ok(())
}

fn process_session_detail_event(app: &mut App, event: &Event) -> Result<()> {
    match app.session_detail_view.process_event(event) {
        Some(SessionDetailAction::ConfirmDelete { track_id, title }) => {
            app.dialogs.push_back(Dialog::Confirm {
                message: format!("Delete \"{}\"? This cannot be undone.", title),
                target: ConfirmTarget::DeleteTrack(track_id),
            });
        }
        Some(SessionDetailAction::Reextract(track_id)) => {
            app.task_tx.send(AppTask::ReextractTrack(track_id))?
        }
        Some(SessionDetailAction::GenerateLyrics {
            track_id,
            title,
            artist,
        }) => app.task_tx.send(AppTask::GenerateLyrics {
            track_id,
            title,
            artist,
        })?,
        Some(SessionDetailAction::ViewLyrics(track_id)) => {
            let track = app
                .session_detail_view
                .tracks
                .iter()
                .find(|t| t.id == track_id);
            if let Some(track) = track {
                app.lyrics_view = Some(LyricsView::new(
                    track.display_title(),
                    track.lyrics.as_deref().unwrap_or_default(),
                ));
            }
        }
        Some(SessionDetailAction::Notice(message)) => handle_notice(app, message.to_string()),
        Some(SessionDetailAction::Upload) => handle_navigate(app, Route::Upload)?,
        Some(SessionDetailAction::Refresh) => {
            if let Some(session_id) = app.session_detail_view.session_id.clone() {
                app.session_detail_view.loading = true;
                app.task_tx.send(AppTask::FetchSessionTracks(session_id))?;
            }
        }
        Some(SessionDetailAction::Back) => handle_navigate(app, Route::Sessions)?,
        None => {}
    }

    Ok(())
}
