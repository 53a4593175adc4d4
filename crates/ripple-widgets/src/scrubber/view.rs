//! Scrubber view function
//!
//! Plain function taking state references and a callback closure,
//! returning an `Element` (idiomatic iced 0.14 pattern).

use iced::widget::Canvas;
use iced::{Element, Length};

use ripple_core::{PlaybackSnapshot, WaveformSeries};

use super::canvas::ScrubberCanvas;
use super::layout::SCRUBBER_HEIGHT;

/// Create a waveform scrubber element.
///
/// # Arguments
///
/// * `series` - The amplitude series to display
/// * `playback` - Snapshot of the player's clock for this render
/// * `on_seek` - Callback closure called with the target time in seconds
///   on drag start and on every drag move
///
/// # Example
///
/// ```ignore
/// let scrubber = waveform_scrubber(
///     &self.series,
///     self.playback_snapshot(),
///     Message::Seek,
/// );
/// ```
pub fn waveform_scrubber<'a, Message>(
    series: &'a WaveformSeries,
    playback: PlaybackSnapshot,
    on_seek: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(ScrubberCanvas {
        series,
        playback,
        on_seek,
    })
    .width(Length::Fill)
    .height(Length::Fixed(SCRUBBER_HEIGHT))
    .into()
}
