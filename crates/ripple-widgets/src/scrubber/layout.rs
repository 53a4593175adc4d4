//! Bar geometry and styling for the scrubber canvas
//!
//! Pure computation in logical pixels: the canvas program only rasterises
//! what this module produces, which keeps the color/geometry rules
//! testable without a renderer.

use ripple_core::WaveformSeries;

/// Fixed scrubber height in logical pixels
pub const SCRUBBER_HEIGHT: f32 = 80.0;

/// Tallest possible bar (amplitude 1.0)
pub const MAX_BAR_HEIGHT: f32 = 35.0;

/// Visual style of a single bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarStyle {
    /// Ahead of the playhead, translucent
    Unplayed,
    /// Behind the playhead; intensity ramps up with distance behind it,
    /// capped at 1.0
    Played { intensity: f32 },
    /// Between the playhead and the hover/drag preview position
    Preview,
}

/// Geometry and style of one bar, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Left edge of the bar's slot
    pub x: f32,
    /// Slot width (width / bar count); the canvas insets a 1px gap
    pub width: f32,
    /// Bar height, vertically centered in the widget
    pub height: f32,
    pub style: BarStyle,
}

/// Alpha ramp for played bars: starts just above half strength at the
/// playhead and saturates for bars sitting well behind it.
fn played_intensity(position: f32, progress: f32) -> f32 {
    (0.55 + (progress - position) * 1.5).min(1.0)
}

/// Compute the full bar layout for one render.
///
/// `preview_progress` is the hover/drag position as a ratio, when one is
/// active. Bars strictly after the playhead up to and including the
/// preview position get the preview style; everything at or before the
/// playhead is played; the rest is unplayed.
pub fn bar_layout(
    series: &WaveformSeries,
    width: f32,
    progress: f32,
    preview_progress: Option<f32>,
) -> Vec<Bar> {
    let count = series.len();
    if count == 0 || width <= 0.0 {
        return Vec::new();
    }
    let bar_width = width / count as f32;

    series
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(i, &amplitude)| {
            let position = i as f32 / count as f32;
            let style = match preview_progress {
                Some(hover) if progress < position && position <= hover => BarStyle::Preview,
                _ if position <= progress => BarStyle::Played {
                    intensity: played_intensity(position, progress),
                },
                _ => BarStyle::Unplayed,
            };
            Bar {
                x: i as f32 * bar_width,
                width: bar_width,
                height: amplitude * MAX_BAR_HEIGHT,
                style,
            }
        })
        .collect()
}
