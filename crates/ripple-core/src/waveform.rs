//! Synthetic waveform amplitude generation
//!
//! The scrubber's bar chart is decorative: amplitudes are generated from
//! layered sines plus noise rather than decoded audio. The shape reads as
//! a plausible track (quiet intro/outro from the envelope, occasional
//! transient spikes) without requiring any decoding pipeline.

use std::f32::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Default number of bars in a scrubber series
pub const DEFAULT_BAR_COUNT: usize = 150;

/// Chance per bar of an extra transient spike
const SPIKE_PROBABILITY: f64 = 0.05;

/// An ordered series of bar amplitudes, each in `[0.1, 1.0]`.
///
/// Immutable once generated; a widget regenerates the series only when a
/// new track is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformSeries {
    amplitudes: Vec<f32>,
}

impl WaveformSeries {
    /// Generate a series with fresh OS-seeded randomness.
    ///
    /// Each call produces a different shape; use [`generate_seeded`] when
    /// the same track should look identical across reloads.
    ///
    /// [`generate_seeded`]: WaveformSeries::generate_seeded
    pub fn generate(bar_count: usize) -> Self {
        Self::with_rng(bar_count, &mut SmallRng::from_os_rng())
    }

    /// Generate a deterministic series for a seed (typically a track hash).
    pub fn generate_seeded(bar_count: usize, seed: u64) -> Self {
        Self::with_rng(bar_count, &mut SmallRng::seed_from_u64(seed))
    }

    fn with_rng(bar_count: usize, rng: &mut SmallRng) -> Self {
        let amplitudes = (0..bar_count)
            .map(|i| {
                let position = i as f32 / bar_count as f32;
                let noise: f32 = rng.random_range(-0.15..0.15);
                let envelope = (position * PI * 4.0).sin() * 0.5 + 0.5;
                let layered = (position * PI * 8.0).sin() * 0.4
                    + (position * PI * 16.0).sin() * 0.2
                    + (position * PI * 32.0).sin() * 0.1
                    + noise;
                let mut amplitude = layered.abs() * envelope + 0.3;
                if rng.random_bool(SPIKE_PROBABILITY) {
                    amplitude += rng.random_range(0.0..0.4);
                }
                amplitude.clamp(0.1, 1.0)
            })
            .collect();

        Self { amplitudes }
    }

    /// Number of bars in the series
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// True when the series holds no bars
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Bar amplitudes in display order
    pub fn amplitudes(&self) -> &[f32] {
        &self.amplitudes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_length() {
        for count in [0, 1, 17, DEFAULT_BAR_COUNT, 1000] {
            let series = WaveformSeries::generate(count);
            assert_eq!(series.len(), count);
        }
    }

    #[test]
    fn test_amplitude_range() {
        let series = WaveformSeries::generate(500);
        for (i, &a) in series.amplitudes().iter().enumerate() {
            assert!(
                (0.1..=1.0).contains(&a),
                "bar {} amplitude {} out of range",
                i,
                a
            );
        }
    }

    #[test]
    fn test_zero_bars_is_empty() {
        let series = WaveformSeries::generate(0);
        assert!(series.is_empty());
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a = WaveformSeries::generate_seeded(DEFAULT_BAR_COUNT, 42);
        let b = WaveformSeries::generate_seeded(DEFAULT_BAR_COUNT, 42);
        assert_eq!(a, b);

        let c = WaveformSeries::generate_seeded(DEFAULT_BAR_COUNT, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_envelope_quiets_edges() {
        // The envelope crosses zero at the series boundaries, so the
        // first and last bars sit near the 0.3 floor (barring a spike).
        let series = WaveformSeries::generate_seeded(200, 7);
        let first = series.amplitudes()[0];
        assert!(first <= 0.75, "boundary bar unexpectedly loud: {}", first);
    }
}
