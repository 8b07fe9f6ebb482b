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

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::upload::{UploadInput, UploadView},
    render::Render,
    theme::Theme,
    util::{
        format::{format_optional_duration, format_size},
        media::{file_name, supported_extensions},
    },
};

impl Render for UploadView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [heading, audio, video, link, preview, hints] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .horizontal_margin(2)
        .areas(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "Upload Media",
                    Style::default()
                        .fg(theme.text_colour)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Upload one audio file, one video file or a link to extract its metadata.",
                    Style::default().fg(theme.muted_colour),
                )),
            ]),
            heading,
        );

        self.draw_input(f, audio, theme, UploadInput::Audio);
        self.draw_input(f, video, theme, UploadInput::Video);
        self.draw_input(f, link, theme, UploadInput::Link);
        self.draw_preview(f, preview, theme);

        let hint = if self.uploading {
            "Uploading..."
        } else {
            "Tab: Next field   Enter: Browse / Upload link   Ctrl-S: Upload   Ctrl-X: Clear"
        };
        f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(theme.muted_colour)),
            hints,
        );

        if let Some(picker) = self.picker.as_mut() {
            picker.draw(f, area, theme);
        }
    }
}

impl UploadView {
    fn draw_input(&self, f: &mut Frame, area: Rect, theme: &Theme, input: UploadInput) {
        let focused = self.focus == input && self.picker.is_none();
        let disabled = self.is_disabled(input);

        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };
        let text_colour = if disabled {
            theme.border_colour
        } else {
            theme.text_colour
        };

        let title = match input {
            UploadInput::Audio => "Audio File",
            UploadInput::Video => "Video File",
            UploadInput::Link => "Media Link",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(Span::styled(title, Style::default().fg(theme.muted_colour)));

        let text = match (input.media_type(), &self.file) {
            (Some(media_type), Some(file)) if file.media_type == media_type => {
                Span::styled(file_name(&file.path), Style::default().fg(text_colour))
            }
            (Some(media_type), _) => Span::styled(
                format!(
                    "Enter to browse or paste a path ({})",
                    supported_extensions(media_type).join(", ")
                ),
                Style::default().fg(if disabled { text_colour } else { theme.muted_colour }),
            ),
            (None, _) if self.link.value().is_empty() => Span::styled(
                "YouTube, SoundCloud or any direct media URL",
                Style::default().fg(if disabled { text_colour } else { theme.muted_colour }),
            ),
            (None, _) => Span::styled(self.link.value().to_string(), Style::default().fg(text_colour)),
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let scroll = if input == UploadInput::Link {
            self.link.visual_scroll(inner_width)
        } else {
            0
        };

        f.render_widget(
            Paragraph::new(Line::from(text))
                .scroll((0, scroll as u16))
                .block(block),
            area,
        );

        if focused && input == UploadInput::Link && !disabled && !self.uploading {
            let x = area.x + 1 + self.link.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((x, area.y + 1));
        }
    }

    fn draw_preview(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(file) = &self.file else {
            return;
        };

        let label = Style::default().fg(theme.muted_colour);
        let value = Style::default().fg(theme.text_colour);
        let row = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(format!("{:<10}", name), label), Span::styled(text, value)])
        };

        let mut lines = vec![
            row("File", file_name(&file.path)),
            row("Type", file.media_type.label().to_string()),
        ];

        match &file.preview {
            Some(local) => {
                lines.push(row("Size", format_size(local.size_bytes)));
                lines.push(row("Duration", format_optional_duration(local.duration_ms)));
                if let Some(title) = &local.title {
                    lines.push(row("Title", title.clone()));
                }
                if let Some(artist) = &local.artist {
                    lines.push(row("Artist", artist.clone()));
                }
            }
            None => lines.push(Line::from(Span::styled("Reading file...", label))),
        }

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.border_colour))
                    .padding(Padding::top(1))
                    .title(Span::styled(" Selected ", label)),
            ),
            area,
        );
    }
}
