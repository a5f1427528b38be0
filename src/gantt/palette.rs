// src/gantt/palette.rs

//! Gantt colors.
//!
//! Task colors are a pure function of priority. Milestones get their own
//! color, outside the task palette.

use crate::types::Priority;

pub const CRITICAL: &str = "#e53935";
pub const HIGH: &str = "#fb8c00";
pub const MEDIUM: &str = "#1e88e5";
pub const LOW: &str = "#43a047";
pub const MILESTONE: &str = "#8e24aa";

/// Border fallback when a background color cannot be parsed.
pub const FALLBACK_BORDER: &str = "#666666";

pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => CRITICAL,
        Priority::High => HIGH,
        Priority::Medium => MEDIUM,
        Priority::Low => LOW,
    }
}

/// Darken a `#rrggbb` color to 70% per channel for use as a border.
///
/// Anything that is not a six-digit hex color maps to [`FALLBACK_BORDER`].
pub fn border_color(background: &str) -> String {
    let Some(hex) = background.strip_prefix('#') else {
        return FALLBACK_BORDER.to_string();
    };
    if hex.len() != 6 || !hex.is_ascii() {
        return FALLBACK_BORDER.to_string();
    }

    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        match u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16) {
            Ok(v) => *channel = (u16::from(v) * 7 / 10) as u8,
            Err(_) => return FALLBACK_BORDER.to_string(),
        }
    }

    format!("#{:02x}{:02x}{:02x}", channels[0], channels[1], channels[2])
}
