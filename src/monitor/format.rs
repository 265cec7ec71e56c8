//! Numeric formatting for dashboard output.

use crate::platform::LoadAverage;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// `2147483648` -> `"2.00 GB"`
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes_to_gb(bytes))
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Uptime as days, hours and whole minutes, e.g. `"1d 1h 1m"`.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    format!("{}d {}h {}m", days, hours, minutes)
}

/// Uptime truncated to whole hours, e.g. `"25 hours"`.
pub fn format_uptime_hours(secs: u64) -> String {
    format!("{} hours", secs / 3_600)
}

pub fn format_load_average(load: &LoadAverage) -> String {
    format!("{:.2}, {:.2}, {:.2}", load.one, load.five, load.fifteen)
}
