//! Waveform scrubber widget
//!
//! A canvas-rendered amplitude bar chart with seek-by-click/drag and a
//! hover preview guide. Module layout mirrors the rest of the crate:
//!
//! - `interaction`: pure hover/drag state machine, no iced types beyond
//!   what the canvas feeds it
//! - `layout`: pure bar geometry and styling computation
//! - `canvas`: the iced `Program` translating events into the state
//!   machine and rasterising the layout
//! - `view`: the public view function
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! let scrubber = waveform_scrubber(
//!     &self.series,
//!     self.playback_snapshot(),
//!     Message::Seek,
//! );
//! ```

mod canvas;
mod interaction;
mod layout;
mod view;

pub use canvas::ScrubberInteraction;
pub use interaction::{Phase, PointerEvent};
pub use layout::{bar_layout, Bar, BarStyle, MAX_BAR_HEIGHT, SCRUBBER_HEIGHT};
pub use view::waveform_scrubber;
