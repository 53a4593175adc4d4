//! Reusable iced widgets for the ripple music player
//!
//! This crate provides the waveform scrubber and the library search bar.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: Pure data (`SearchBarState`); transient pointer
//!   state lives in the canvas `Program::State` (`ScrubberInteraction`)
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: Handle custom rendering and event-to-callback
//!   translation
//!
//! The pure math behind both widgets (pixel/time mapping, bar layout,
//! the hover/drag state machine, suggestion generation) is split into
//! plain modules so it can be unit tested without a renderer.

pub mod scrubber;
pub mod search_bar;
pub mod theme;

// Scrubber widget
pub use scrubber::{
    waveform_scrubber, Bar, BarStyle, Phase, PointerEvent, ScrubberInteraction,
    MAX_BAR_HEIGHT, SCRUBBER_HEIGHT,
};

// Search bar widget
pub use search_bar::{search_bar, SearchBarMessage, SearchBarState};
