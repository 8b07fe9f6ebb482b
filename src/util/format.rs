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

use chrono::{DateTime, Days, Local, NaiveDate};

/// Formats a duration in milliseconds into a human-readable string.
///
/// Durations shorter than an hour are rendered as `MM:SS`, anything longer
/// gains an hours component and is rendered as `HH:MM:SS`.
///
/// # Arguments
///
/// * `ms` - The duration in milliseconds, as reported by the backend.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_duration(65_000), "01:05");
/// assert_eq!(format_duration(3_661_000), "01:01:01");
/// ```
pub(crate) fn format_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Formats an optional duration, falling back to `00:00` when the backend
/// did not report one.
///
/// A zero duration is treated as missing.
pub(crate) fn format_optional_duration(ms: Option<u64>) -> String {
    match ms {
        Some(ms) if ms > 0 => format_duration(ms),
        _ => "00:00".to_string(),
    }
}

/// Formats a byte count using the largest sensible unit.
///
/// Units are binary (1 KB = 1024 B). Bytes are shown as a whole number, any
/// larger unit with one decimal place.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(8_598_323), "8.2 MB");
/// ```
pub(crate) fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Formats a creation timestamp relative to `today`.
///
/// Produces `Today at 14:05`, `Yesterday at 09:30`, or the full date
/// followed by the time for anything older.
///
/// # Arguments
///
/// * `created` - The timestamp, already converted to local time.
/// * `today` - The local date to compare against.
pub(crate) fn format_created(created: DateTime<Local>, today: NaiveDate) -> String {
    let time = created.format("%H:%M");
    let date = created.date_naive();

    if date == today {
        format!("Today at {}", time)
    } else if today.checked_sub_days(Days::new(1)) == Some(date) {
        format!("Yesterday at {}", time)
    } else {
        format!("{} at {}", date.format("%Y-%m-%d"), time)
    }
}

/// Pluralises a count, e.g. `1 audio file`, `3 audio files`.
pub(crate) fn count_label(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}
