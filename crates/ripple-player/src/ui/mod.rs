//! UI module for the ripple player
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! All widget state lives here; playback is a simulated clock since the
//! player carries no audio engine.

pub mod app;

pub use app::RippleApp;
