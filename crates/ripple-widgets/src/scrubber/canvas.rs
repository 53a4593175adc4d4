//! Canvas Program implementation for the waveform scrubber
//!
//! Implements the iced canvas `Program` trait, following the callback
//! closure pattern: the widget publishes a message built by `on_seek`
//! whenever the user commits a seek (drag start and every drag move).
//!
//! Interaction state lives in the canvas `Program::State`, so it is
//! created and destroyed with the widget - nothing global is registered,
//! and an unmount mid-drag simply drops the state.

use iced::widget::canvas::{self, Event, Frame, Geometry, LineDash, Path, Program, Stroke};
use iced::{mouse, touch, Point, Rectangle, Size, Theme};

use ripple_core::{progress_of, PlaybackSnapshot, WaveformSeries};

use super::interaction::{Interaction, Phase, PointerEvent};
use super::layout::{bar_layout, BarStyle, SCRUBBER_HEIGHT};
use crate::theme::{
    BAR_PLAYED, BAR_PREVIEW, BAR_UNPLAYED, HOVER_GUIDE, PLAYHEAD, PLAYHEAD_GLOW,
    SCRUBBER_BACKGROUND,
};

const HOVER_DASH: [f32; 2] = [4.0, 4.0];

/// Canvas state for the scrubber's hover/drag machine
pub type ScrubberInteraction = Interaction;

/// Canvas program for the scrubber
///
/// Takes a callback closure `on_seek` that's called with the target time
/// in seconds (already clamped to `[0, duration]`) on drag start and on
/// every drag move.
pub struct ScrubberCanvas<'a, Message, F>
where
    F: Fn(f32) -> Message,
{
    pub series: &'a WaveformSeries,
    pub playback: PlaybackSnapshot,
    pub on_seek: F,
}

impl<'a, Message, F> ScrubberCanvas<'a, Message, F>
where
    F: Fn(f32) -> Message,
{
    /// Map a raw canvas event to a normalized pointer event.
    ///
    /// Touch positions arrive in window coordinates; mouse positions come
    /// through the cursor. While dragging, moves outside the bounds are
    /// still reported (with `inside: false`) so capture stays global.
    fn pointer_event(
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PointerEvent> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
                .position_in(bounds)
                .map(|p| PointerEvent::Pressed { x: p.x }),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(PointerEvent::Released)
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(p) = cursor.position_in(bounds) {
                    Some(PointerEvent::Moved { x: p.x, inside: true })
                } else if let Some(p) = cursor.position() {
                    Some(PointerEvent::Moved {
                        x: p.x - bounds.x,
                        inside: false,
                    })
                } else {
                    Some(PointerEvent::Left)
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => Some(PointerEvent::Left),
            Event::Touch(touch::Event::FingerPressed { position, .. }) => bounds
                .contains(*position)
                .then(|| PointerEvent::Pressed {
                    x: position.x - bounds.x,
                }),
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                Some(PointerEvent::Moved {
                    x: position.x - bounds.x,
                    inside: bounds.contains(*position),
                })
            }
            Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => Some(PointerEvent::Released),
            _ => None,
        }
    }
}

impl<'a, Message, F> Program<Message> for ScrubberCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(f32) -> Message,
{
    type State = ScrubberInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let pointer = Self::pointer_event(event, bounds, cursor)?;
        let before = *interaction;
        match interaction.apply(pointer, bounds.width, self.playback.duration) {
            Some(time) => Some(canvas::Action::publish((self.on_seek)(time))),
            // Hover transitions change what's drawn without producing a
            // message, so ask for a repaint explicitly.
            None if *interaction != before => Some(canvas::Action::request_redraw()),
            None => None,
        }
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.phase == Phase::Dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width;

        // Background
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), SCRUBBER_BACKGROUND);

        let progress = self.playback.progress();
        let preview_progress = interaction
            .preview_time
            .map(|t| progress_of(t, self.playback.duration));
        let dragging = interaction.phase == Phase::Dragging;

        // Amplitude bars, vertically centered
        let center_y = SCRUBBER_HEIGHT / 2.0;
        for bar in bar_layout(self.series, width, progress, preview_progress) {
            let color = match bar.style {
                BarStyle::Unplayed => BAR_UNPLAYED,
                BarStyle::Preview => BAR_PREVIEW,
                BarStyle::Played { intensity } => iced::Color {
                    a: intensity,
                    ..BAR_PLAYED
                },
            };
            let gap_width = (bar.width - 1.0).max(0.5);
            frame.fill_rectangle(
                Point::new(bar.x, center_y - bar.height / 2.0),
                Size::new(gap_width, bar.height),
                color,
            );
        }

        // Playhead line and handle (only with a loaded track)
        if self.playback.duration > 0.0 {
            let playhead_x = progress * width;
            let (line_width, handle_radius) = if dragging { (3.0, 7.0) } else { (2.0, 5.0) };

            if dragging {
                frame.fill(
                    &Path::circle(Point::new(playhead_x, center_y), handle_radius + 6.0),
                    PLAYHEAD_GLOW,
                );
            }

            frame.stroke(
                &Path::line(
                    Point::new(playhead_x, 0.0),
                    Point::new(playhead_x, SCRUBBER_HEIGHT),
                ),
                Stroke::default().with_color(PLAYHEAD).with_width(line_width),
            );
            frame.fill(
                &Path::circle(Point::new(playhead_x, center_y), handle_radius),
                PLAYHEAD,
            );
        }

        // Dashed hover guide (hover only - the playhead already tracks
        // the pointer while dragging)
        if interaction.phase == Phase::Hovering {
            if let Some(hover) = preview_progress {
                let hover_x = hover * width;
                frame.stroke(
                    &Path::line(
                        Point::new(hover_x, 0.0),
                        Point::new(hover_x, SCRUBBER_HEIGHT),
                    ),
                    Stroke {
                        line_dash: LineDash {
                            segments: &HOVER_DASH,
                            offset: 0,
                        },
                        ..Stroke::default().with_color(HOVER_GUIDE).with_width(1.0)
                    },
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
