//! Read-only playback snapshot passed from the player to the widgets
//!
//! The player owns the playback clock; the scrubber receives a snapshot
//! per render. The snapshot never enforces `current_time <= duration` -
//! derived progress ratios are clamped at the point of use instead.

use crate::timing::progress_of;

/// Snapshot of the external player's state at render time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    /// Playback position in seconds (>= 0)
    pub current_time: f32,
    /// Track length in seconds (>= 0, 0 when nothing is loaded)
    pub duration: f32,
    /// Whether the transport is running
    pub is_playing: bool,
}

impl PlaybackSnapshot {
    /// Snapshot with nothing loaded
    pub fn empty() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            is_playing: false,
        }
    }

    /// Progress ratio in `[0.0, 1.0]`
    pub fn progress(&self) -> f32 {
        progress_of(self.current_time, self.duration)
    }
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
