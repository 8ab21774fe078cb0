//! Humanization of byte counts and filesystem timestamps.

use chrono::{DateTime, Local};
use std::time::SystemTime;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Renders a byte count with two decimal places and the largest unit it
/// reaches by repeated division by 1024, capped at TB.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut order = 0;

    while value >= 1024.0 && order < UNITS.len() - 1 {
        value /= 1024.0;
        order += 1;
    }

    format!("{:.2} {}", value, UNITS[order])
}

/// Renders a modification timestamp in the local time zone, e.g.
/// `Mar 05, 2024 09:08:07`.
pub fn modified_time(time: SystemTime) -> String {
    render_timestamp(DateTime::from(time))
}

fn render_timestamp(time: DateTime<Local>) -> String {
    time.format("%b %d, %Y %H:%M:%S").to_string()
}

/// Footer timestamp, `YYYY-MM-DD HH:MM:SS` in the local time zone.
pub fn generated_at(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}
