//! Shared theme constants for ripple UI components
//!
//! Color scheme for the scrubber and search bar. Kept in one place so the
//! player and any future widgets stay visually consistent.

use iced::Color;

/// Scrubber background
pub const SCRUBBER_BACKGROUND: Color = Color::from_rgb(0.08, 0.08, 0.1);

/// Unplayed bars (translucent white)
pub const BAR_UNPLAYED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.22);

/// Played bars (accent blue; alpha is modulated per-bar by the layout)
pub const BAR_PLAYED: Color = Color::from_rgb(0.42, 0.55, 1.0);

/// Bars between the playhead and the hover/drag preview position
pub const BAR_PREVIEW: Color = Color::from_rgba(0.68, 0.78, 1.0, 0.9);

/// Playhead line and handle
pub const PLAYHEAD: Color = Color::from_rgb(1.0, 1.0, 1.0);

/// Soft glow behind the handle while scrubbing
pub const PLAYHEAD_GLOW: Color = Color::from_rgba(0.42, 0.55, 1.0, 0.35);

/// Dashed hover guide line
pub const HOVER_GUIDE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.55);
