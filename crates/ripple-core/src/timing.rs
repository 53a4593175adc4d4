//! Pixel/time conversions and time display formatting
//!
//! The scrubber works in two coordinate systems: horizontal pixels within
//! the widget and playback seconds. These conversions are exact inverses
//! of each other up to clamping at the boundaries, which keeps click
//! positions and rendered progress consistent.

/// Convert a horizontal pixel offset within the widget to a playback time.
///
/// The offset is clamped to the widget, so positions outside `[0, width_px]`
/// map to the track boundaries. Returns 0.0 when the widget has no width
/// or the track has no duration (including non-finite inputs).
pub fn pixel_to_time(x_px: f32, width_px: f32, duration: f32) -> f32 {
    if !(width_px > 0.0) || !(duration > 0.0) {
        return 0.0;
    }
    let progress = (x_px / width_px).clamp(0.0, 1.0);
    progress * duration
}

/// Playback progress ratio in `[0.0, 1.0]`.
///
/// 0.0 when the duration is zero, negative, or non-finite. Non-finite
/// times are treated as 0 for display purposes.
pub fn progress_of(time: f32, duration: f32) -> f32 {
    if !(duration > 0.0) || !duration.is_finite() {
        return 0.0;
    }
    let time = if time.is_finite() { time } else { 0.0 };
    (time / duration).clamp(0.0, 1.0)
}

/// Format a time in seconds as `M:SS` (zero-padded seconds, no leading
/// zero on minutes). Non-finite or negative input displays as `0:00`.
pub fn format_time(seconds: f32) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return String::from("0:00");
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
