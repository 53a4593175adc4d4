//! Voice dictation capability boundary for the search bar
//!
//! Speech recognition itself is out of scope; this trait is the seam a
//! platform backend would plug into. The search bar only shows its mic
//! button when the installed capability reports support, and submits the
//! transcript through the same search callback as typed input.

/// A speech-to-text capability as seen by the search bar.
pub trait VoiceInput {
    /// Whether a recognition backend is available at all
    fn is_supported(&self) -> bool;

    /// Whether recognition is currently running
    fn is_listening(&self) -> bool;

    /// The transcript recognized so far (empty until something was heard)
    fn transcript(&self) -> &str;

    /// Begin listening; a no-op when unsupported
    fn start(&mut self);

    /// Stop listening, finalizing the transcript
    fn stop(&mut self);
}

/// Placeholder capability for platforms without a recognition backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVoiceInput;

impl VoiceInput for NullVoiceInput {
    fn is_supported(&self) -> bool {
        false
    }

    fn is_listening(&self) -> bool {
        false
    }

    fn transcript(&self) -> &str {
        ""
    }

    fn start(&mut self) {
        log::debug!("voice input requested but no backend is available");
    }

    fn stop(&mut self) {}
}
