//! Ripple Core - GUI-free logic shared by the ripple widgets and player
//!
//! Everything in this crate is pure data and math: no iced, no rendering,
//! no event loop. The widgets crate consumes these types to lay out and
//! drive the scrubber; the player consumes them for suggestions and
//! time display.

pub mod playback;
pub mod suggest;
pub mod timing;
pub mod voice;
pub mod waveform;

pub use playback::PlaybackSnapshot;
pub use suggest::{suggestions_for, MAX_SUGGESTIONS};
pub use timing::{format_time, pixel_to_time, progress_of};
pub use voice::{NullVoiceInput, VoiceInput};
pub use waveform::{WaveformSeries, DEFAULT_BAR_COUNT};
