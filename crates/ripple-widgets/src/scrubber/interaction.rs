//! Hover/drag state machine for the scrubber
//!
//! Transitions are driven by normalized pointer events so the machine can
//! be tested without a window. The canvas program owns one of these per
//! widget instance and maps raw mouse/touch events onto [`PointerEvent`]s.
//!
//! Seeks are emitted on drag start and on every drag move, not just on
//! release - that is what makes scrubbing feel live. Hovering never seeks.

use ripple_core::pixel_to_time;

/// Interaction lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Pointer outside the widget, nothing held
    #[default]
    Idle,
    /// Pointer inside the widget, button up
    Hovering,
    /// Button/finger held; pointer may be anywhere in the window
    Dragging,
}

/// A pointer event normalized to the widget's coordinate space.
///
/// `x` is the horizontal offset relative to the widget's left edge and may
/// fall outside `[0, width]` while dragging; time conversion clamps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button or finger pressed inside the widget
    Pressed { x: f32 },
    /// Pointer moved; `inside` is whether it is over the widget
    Moved { x: f32, inside: bool },
    /// Button or finger released, anywhere
    Released,
    /// Pointer position no longer known (left the window)
    Left,
}

/// Per-widget interaction state.
///
/// `preview_time` is set only in the Hovering and Dragging phases and is
/// cleared on every transition back to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interaction {
    pub phase: Phase,
    pub preview_time: Option<f32>,
}

impl Interaction {
    /// Apply a pointer event, returning a seek time when one must be
    /// emitted to the player.
    ///
    /// Seeks are suppressed while no track is loaded (`duration <= 0`);
    /// the phase transitions still run so the machine can't wedge.
    pub fn apply(&mut self, event: PointerEvent, width: f32, duration: f32) -> Option<f32> {
        match (self.phase, event) {
            // Drag capture is global: moves are honored wherever the
            // pointer is, with the offset clamped by pixel_to_time.
            (Phase::Dragging, PointerEvent::Moved { x, .. }) => {
                let time = pixel_to_time(x, width, duration);
                self.preview_time = Some(time);
                (duration > 0.0).then_some(time)
            }
            (Phase::Dragging, PointerEvent::Released) => {
                self.phase = Phase::Idle;
                self.preview_time = None;
                None
            }
            // Losing the cursor mid-drag keeps the drag alive; the
            // release will still be delivered.
            (Phase::Dragging, PointerEvent::Left) => None,
            (Phase::Dragging, PointerEvent::Pressed { .. }) => None,

            (Phase::Idle | Phase::Hovering, PointerEvent::Pressed { x }) => {
                self.phase = Phase::Dragging;
                let time = pixel_to_time(x, width, duration);
                self.preview_time = Some(time);
                (duration > 0.0).then_some(time)
            }
            (Phase::Idle | Phase::Hovering, PointerEvent::Moved { x, inside: true }) => {
                self.phase = Phase::Hovering;
                self.preview_time = Some(pixel_to_time(x, width, duration));
                None
            }
            (Phase::Hovering, PointerEvent::Moved { inside: false, .. })
            | (Phase::Hovering, PointerEvent::Left) => {
                self.phase = Phase::Idle;
                self.preview_time = None;
                None
            }
            (Phase::Idle, _) | (Phase::Hovering, PointerEvent::Released) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 300.0;
    const DURATION: f32 = 200.0;

    #[test]
    fn test_press_emits_one_seek() {
        let mut ix = Interaction::default();
        let seek = ix.apply(PointerEvent::Pressed { x: 150.0 }, WIDTH, DURATION);
        assert_eq!(seek, Some(100.0));
        assert_eq!(ix.phase, Phase::Dragging);
        assert_eq!(ix.preview_time, Some(100.0));
    }

    #[test]
    fn test_each_drag_move_emits_one_seek() {
        let mut ix = Interaction::default();
        ix.apply(PointerEvent::Pressed { x: 0.0 }, WIDTH, DURATION);

        let mut seeks = 0;
        for x in [30.0, 60.0, 90.0] {
            if ix
                .apply(PointerEvent::Moved { x, inside: true }, WIDTH, DURATION)
                .is_some()
            {
                seeks += 1;
            }
        }
        assert_eq!(seeks, 3);
    }

    #[test]
    fn test_drag_outside_bounds_clamps() {
        let mut ix = Interaction::default();
        ix.apply(PointerEvent::Pressed { x: 150.0 }, WIDTH, DURATION);

        let seek = ix.apply(
            PointerEvent::Moved { x: 500.0, inside: false },
            WIDTH,
            DURATION,
        );
        assert_eq!(seek, Some(DURATION));

        let seek = ix.apply(
            PointerEvent::Moved { x: -40.0, inside: false },
            WIDTH,
            DURATION,
        );
        assert_eq!(seek, Some(0.0));
        assert_eq!(ix.phase, Phase::Dragging);
    }

    #[test]
    fn test_release_anywhere_ends_drag_silently() {
        let mut ix = Interaction::default();
        ix.apply(PointerEvent::Pressed { x: 150.0 }, WIDTH, DURATION);
        ix.apply(PointerEvent::Moved { x: 999.0, inside: false }, WIDTH, DURATION);

        let seek = ix.apply(PointerEvent::Released, WIDTH, DURATION);
        assert_eq!(seek, None);
        assert_eq!(ix.phase, Phase::Idle);
        assert_eq!(ix.preview_time, None);

        // Further moves are plain hover/idle transitions, no seeks
        let seek = ix.apply(PointerEvent::Moved { x: 10.0, inside: true }, WIDTH, DURATION);
        assert_eq!(seek, None);
        assert_eq!(ix.phase, Phase::Hovering);
    }

    #[test]
    fn test_hover_never_seeks() {
        let mut ix = Interaction::default();
        for x in [10.0, 20.0, 290.0] {
            let seek = ix.apply(PointerEvent::Moved { x, inside: true }, WIDTH, DURATION);
            assert_eq!(seek, None);
            assert_eq!(ix.phase, Phase::Hovering);
        }
        assert!(ix.preview_time.is_some());
    }

    #[test]
    fn test_leave_clears_preview() {
        let mut ix = Interaction::default();
        ix.apply(PointerEvent::Moved { x: 50.0, inside: true }, WIDTH, DURATION);
        assert!(ix.preview_time.is_some());

        ix.apply(PointerEvent::Moved { x: -10.0, inside: false }, WIDTH, DURATION);
        assert_eq!(ix.phase, Phase::Idle);
        assert_eq!(ix.preview_time, None);
    }

    #[test]
    fn test_cursor_lost_keeps_drag() {
        let mut ix = Interaction::default();
        ix.apply(PointerEvent::Pressed { x: 150.0 }, WIDTH, DURATION);
        ix.apply(PointerEvent::Left, WIDTH, DURATION);
        assert_eq!(ix.phase, Phase::Dragging);

        // ...but loses a plain hover
        let mut ix = Interaction::default();
        ix.apply(PointerEvent::Moved { x: 50.0, inside: true }, WIDTH, DURATION);
        ix.apply(PointerEvent::Left, WIDTH, DURATION);
        assert_eq!(ix.phase, Phase::Idle);
    }

    #[test]
    fn test_no_track_suppresses_seeks() {
        let mut ix = Interaction::default();
        let seek = ix.apply(PointerEvent::Pressed { x: 150.0 }, WIDTH, 0.0);
        assert_eq!(seek, None);
        // The drag still runs so release handling stays consistent
        assert_eq!(ix.phase, Phase::Dragging);
        let seek = ix.apply(PointerEvent::Moved { x: 200.0, inside: true }, WIDTH, 0.0);
        assert_eq!(seek, None);
    }

    #[test]
    fn test_zero_width_degenerates_to_start() {
        let mut ix = Interaction::default();
        let seek = ix.apply(PointerEvent::Pressed { x: 150.0 }, 0.0, DURATION);
        assert_eq!(seek, Some(0.0));
    }
}
