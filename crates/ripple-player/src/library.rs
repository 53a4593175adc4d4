//! Built-in demo track library
//!
//! There is no decoding or storage backend; the library is a fixed list
//! of titles with durations, enough to exercise search and the scrubber.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A library entry
#[derive(Debug, Clone)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Length in seconds
    pub duration: f32,
}

impl Track {
    fn new(title: &str, artist: &str, duration: f32) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            duration,
        }
    }

    /// Stable per-track seed for the decorative waveform
    pub fn waveform_seed(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.title.hash(&mut hasher);
        self.artist.hash(&mut hasher);
        hasher.finish()
    }
}

/// The built-in demo collection
pub fn demo_library() -> Vec<Track> {
    vec![
        Track::new("Midnight Drive", "Neon Harbor", 245.0),
        Track::new("Glass Gardens", "Aurelia", 198.5),
        Track::new("Low Tide", "Cassette Summer", 221.0),
        Track::new("Signal Fade", "The Wire Poets", 187.2),
        Track::new("Amber Waves", "Fieldnotes", 263.8),
        Track::new("Paper Planes Over Houston", "Marlow & June", 204.0),
        Track::new("Static Bloom", "Velvet Circuit", 176.4),
        Track::new("Northern Lights", "Aurelia", 312.6),
        Track::new("Coffee Spoon", "The Wire Poets", 158.9),
        Track::new("Last Train Home", "Neon Harbor", 289.3),
    ]
}

/// Indices of tracks matching a query (case-insensitive substring over
/// title and artist). An empty query matches everything.
pub fn filter_tracks(tracks: &[Track], query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return (0..tracks.len()).collect();
    }
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            t.title.to_lowercase().contains(&query) || t.artist.to_lowercase().contains(&query)
        })
        .map(|(i, _)| i)
        .collect()
}
