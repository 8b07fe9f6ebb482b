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

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::components::upload::{PickerAction, UploadAction, UploadInput, UploadView};

impl UploadView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<UploadAction> {
        if let Some(picker) = self.picker.as_mut() {
            let media_type = picker.media_type;
            return match picker.process_event(event)? {
                PickerAction::Close => {
                    self.picker = None;
                    None
                }
                PickerAction::Select(path) => {
                    self.picker = None;
                    Some(self.choose(UploadInput::for_media_type(media_type), path))
                }
            };
        }

        if self.uploading {
            return None;
        }

        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return match key.code {
                        KeyCode::Char('s') => self.submit(),
                        KeyCode::Char('x') => {
                            self.clear();
                            None
                        }
                        _ => None,
                    };
                }

                match key.code {
                    KeyCode::Tab | KeyCode::Down => self.focus_step(true),
                    KeyCode::BackTab | KeyCode::Up => self.focus_step(false),
                    KeyCode::Enter => {
                        return match self.focus.media_type() {
                            Some(media_type) if !self.is_disabled(self.focus) => {
                                Some(self.open_picker(media_type))
                            }
                            Some(_) => None,
                            None => self.submit(),
                        };
                    }
                    _ => {
                        if self.focus == UploadInput::Link && !self.is_disabled(UploadInput::Link) {
                            self.link.handle_event(event);
                        }
                    }
                }

                None
            }

            Event::Paste(text) => match self.focus {
                UploadInput::Link => {
                    let value = format!("{}{}", self.link.value(), text.trim());
                    self.set_link(&value).err().map(UploadAction::Rejected)
                }
                input => Some(self.choose(input, dropped_path(text))),
            },

            _ => None,
        }
    }

    fn choose(&mut self, input: UploadInput, path: PathBuf) -> UploadAction {
        match self.select_file(input, &path) {
            Ok(()) => UploadAction::Probe(path),
            Err(message) => UploadAction::Rejected(message),
        }
    }
}

/// Terminals deliver a dropped file as its path, sometimes quoted or as a
/// `file://` URL.
fn dropped_path(text: &str) -> PathBuf {
    let trimmed = text.trim().trim_matches(|c| c == '\'' || c == '"');
    let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);

    PathBuf::from(
        urlencoding::decode(path)
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| path.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{components::upload::Submission, model::MediaType};
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_enter_on_file_field_opens_picker() {
        let mut view = UploadView::new();
        view.focus = UploadInput::Video;

        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(UploadAction::OpenPicker(MediaType::Video))
        );
        assert!(view.picker.is_some());

        view.set_picker_files(MediaType::Video, vec![PathBuf::from("/v/clip.mp4")]);
        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(UploadAction::Probe(PathBuf::from("/v/clip.mp4")))
        );
        assert!(view.picker.is_none());
        assert_eq!(view.active_input(), Some(UploadInput::Video));
    }

    #[test]
    fn test_paste_drops_file() {
        let mut view = UploadView::new();

        assert_eq!(
            view.process_event(&Event::Paste("'file:///music/My%20Song.mp3'\n".into())),
            Some(UploadAction::Probe(PathBuf::from("/music/My Song.mp3")))
        );
    }

    #[test]
    fn test_paste_with_wrong_type_is_rejected() {
        let mut view = UploadView::new();

        let action = view.process_event(&Event::Paste("/music/notes.txt".into()));
        assert!(matches!(action, Some(UploadAction::Rejected(_))));
        assert!(view.file.is_none());
    }

    #[test]
    fn test_link_typing_and_submit() {
        let mut view = UploadView::new();
        view.process_event(&key(KeyCode::Tab));
        view.process_event(&key(KeyCode::Tab));
        assert_eq!(view.focus, UploadInput::Link);

        for c in "https://youtu.be/x".chars() {
            view.process_event(&key(KeyCode::Char(c)));
        }
        assert!(view.is_disabled(UploadInput::Audio));

        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(UploadAction::Submit(Submission::Link("https://youtu.be/x".into())))
        );
        assert!(view.uploading);
        assert_eq!(view.process_event(&ctrl('s')), None);
    }

    #[test]
    fn test_focus_skips_disabled_inputs() {
        let mut view = UploadView::new();
        view.select_file(UploadInput::Audio, std::path::Path::new("/m/a.mp3")).unwrap();

        view.process_event(&key(KeyCode::Tab));
        assert_eq!(view.focus, UploadInput::Audio);

        view.process_event(&ctrl('x'));
        view.process_event(&key(KeyCode::Tab));
        assert_eq!(view.focus, UploadInput::Video);
    }

    #[test]
    fn test_submit_without_selection() {
        let mut view = UploadView::new();
        assert_eq!(
            view.process_event(&ctrl('s')),
            Some(UploadAction::Rejected("Please select a file".into()))
        );
    }
}
