//! Main iced application for the ripple player
//!
//! Manages the demo library, the simulated playback clock, and the two
//! widgets (search bar, waveform scrubber). The clock advances by
//! wall-clock elapsed time on each tick, so the playhead stays accurate
//! regardless of the tick interval.

use std::time::{Duration, Instant};

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{keyboard, time, Center, Element, Fill, Length, Subscription, Task, Theme};

use ripple_core::{format_time, NullVoiceInput, PlaybackSnapshot, VoiceInput, WaveformSeries};
use ripple_widgets::{search_bar, waveform_scrubber, SearchBarMessage, SearchBarState};

use crate::config::PlayerConfig;
use crate::library::{demo_library, filter_tracks, Track};

/// Application state
pub struct RippleApp {
    config: PlayerConfig,
    /// Full demo library
    library: Vec<Track>,
    /// Indices into `library` matching the active search
    visible: Vec<usize>,
    /// Query behind the current `visible` set, for the status line
    active_query: Option<String>,
    /// Selected library index, if a track is loaded
    selected: Option<usize>,
    /// Scrubber amplitude series for the selected track
    series: WaveformSeries,
    /// Playback position in seconds
    current_time: f32,
    is_playing: bool,
    /// Wall clock of the last tick, for elapsed-time integration
    last_tick: Instant,
    /// Search bar widget state
    search: SearchBarState,
    /// Voice dictation capability (no backend on this build)
    voice: NullVoiceInput,
    /// Status message
    status: String,
}

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Tick for advancing the playback clock
    Tick,
    /// Play/pause toggle
    TogglePlay,
    /// Seek to a time in seconds (from the scrubber)
    Seek(f32),
    /// Load a library track
    SelectTrack(usize),
    /// Search bar message
    SearchBar(SearchBarMessage),
    /// Background search finished: committed query and matching indices
    SearchResults(String, Vec<usize>),
}

impl RippleApp {
    /// Create a new application instance
    pub fn new(config: PlayerConfig) -> Self {
        let library = demo_library();
        let visible = (0..library.len()).collect();
        Self {
            config,
            library,
            visible,
            active_query: None,
            selected: None,
            series: WaveformSeries::generate(0),
            current_time: 0.0,
            is_playing: false,
            last_tick: Instant::now(),
            search: SearchBarState::new(),
            voice: NullVoiceInput,
            status: String::from("Select a track"),
        }
    }

    fn duration(&self) -> f32 {
        self.selected.map_or(0.0, |i| self.library[i].duration)
    }

    fn playback_snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_time: self.current_time,
            duration: self.duration(),
            is_playing: self.is_playing,
        }
    }

    /// Load a track: reset the clock and regenerate the scrubber series
    fn load_track(&mut self, index: usize) {
        let track = &self.library[index];
        self.series = if self.config.display.seeded_waveforms {
            WaveformSeries::generate_seeded(self.config.display.bar_count, track.waveform_seed())
        } else {
            WaveformSeries::generate(self.config.display.bar_count)
        };
        self.selected = Some(index);
        self.current_time = 0.0;
        self.is_playing = true;
        self.last_tick = Instant::now();
        self.status = format!("Playing \"{}\"", track.title);
        log::info!(
            "loaded track {:?} by {:?} ({})",
            track.title,
            track.artist,
            format_time(track.duration)
        );
    }

    /// Kick off a committed search as a background task
    fn begin_search(&mut self, query: String) -> Task<Message> {
        self.search.loading = true;
        let library = self.library.clone();
        Task::perform(
            async move {
                let matches = filter_tracks(&library, &query);
                (query, matches)
            },
            |(query, matches)| Message::SearchResults(query, matches),
        )
    }

    fn apply_search_results(&mut self, query: String, matches: Vec<usize>) {
        self.search.loading = false;
        self.visible = matches;
        log::info!("search {:?} matched {} tracks", query, self.visible.len());
        self.status = if self.visible.is_empty() {
            format!("No results for \"{}\"", query)
        } else {
            format!("{} results for \"{}\"", self.visible.len(), query)
        };
        self.active_query = Some(query);
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                let now = Instant::now();
                let elapsed = now.duration_since(self.last_tick).as_secs_f32();
                self.last_tick = now;

                if self.is_playing {
                    let duration = self.duration();
                    self.current_time = (self.current_time + elapsed).min(duration);
                    if duration > 0.0 && self.current_time >= duration {
                        self.is_playing = false;
                        self.status = String::from("End of track");
                    }
                }
                Task::none()
            }

            Message::TogglePlay => {
                if self.selected.is_some() {
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_tick = Instant::now();
                    }
                }
                Task::none()
            }

            Message::Seek(seek_time) => {
                // The scrubber already clamps to [0, duration]
                self.current_time = seek_time.clamp(0.0, self.duration());
                Task::none()
            }

            Message::SelectTrack(index) => {
                if index < self.library.len() {
                    self.load_track(index);
                }
                Task::none()
            }

            Message::SearchBar(search_msg) => {
                match self.search.handle_message(search_msg, &mut self.voice) {
                    Some(query) => self.begin_search(query),
                    None => Task::none(),
                }
            }

            Message::SearchResults(query, matches) => {
                self.apply_search_results(query, matches);
                Task::none()
            }
        }
    }

    /// Subscribe to periodic updates and hotkeys
    pub fn subscription(&self) -> Subscription<Message> {
        let hotkeys = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => handle_key(key, modifiers),
            _ => None,
        });

        if self.is_playing {
            // Advance the clock (and redraw the scrubber) at ~30fps
            Subscription::batch([
                hotkeys,
                time::every(Duration::from_millis(33)).map(|_| Message::Tick),
            ])
        } else {
            hotkeys
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("RIPPLE").size(24),
            Space::new().width(Fill),
            text(&self.status).size(12),
        ]
        .align_y(Center)
        .spacing(20);

        let search = search_bar(
            &self.search,
            self.voice.is_supported(),
            self.voice.is_listening(),
            Message::SearchBar,
        );

        let content = column![
            header,
            search,
            self.view_track_list(),
            self.view_transport(),
        ]
        .spacing(10)
        .padding(10);

        container(content).width(Fill).height(Fill).into()
    }

    fn view_track_list(&self) -> Element<'_, Message> {
        if self.visible.is_empty() {
            let hint = match &self.active_query {
                Some(q) => format!("No tracks match \"{}\"", q),
                None => String::from("Library is empty"),
            };
            return container(text(hint).size(12)).padding(20).into();
        }

        let rows: Vec<Element<'_, Message>> = self
            .visible
            .iter()
            .map(|&i| {
                let track = &self.library[i];
                button(
                    row![
                        text(&track.title).size(13).width(Length::FillPortion(3)),
                        text(&track.artist).size(12).width(Length::FillPortion(2)),
                        text(format_time(track.duration)).size(12),
                    ]
                    .spacing(10),
                )
                .on_press(Message::SelectTrack(i))
                .width(Fill)
                .style(if self.selected == Some(i) {
                    button::primary
                } else {
                    button::text
                })
                .into()
            })
            .collect();

        scrollable(column(rows).spacing(1)).height(Fill).into()
    }

    fn view_transport(&self) -> Element<'_, Message> {
        let scrubber = waveform_scrubber(&self.series, self.playback_snapshot(), Message::Seek);

        let times = row![
            text(format_time(self.current_time)).size(12),
            Space::new().width(Fill),
            text(format_time(self.duration())).size(12),
        ];

        let mut play = button(text(if self.is_playing { "Pause" } else { "Play" }).size(14));
        if self.selected.is_some() {
            play = play.on_press(Message::TogglePlay);
        }

        let now_playing = match self.selected {
            Some(i) => format!("{} - {}", self.library[i].title, self.library[i].artist),
            None => String::from("No track selected"),
        };

        let controls = row![play, text(now_playing).size(13)]
            .spacing(12)
            .align_y(Center);

        column![scrubber, times, controls].spacing(6).into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Hotkeys for suggestion list navigation
fn handle_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::ArrowUp) => {
            Some(Message::SearchBar(SearchBarMessage::HighlightUp))
        }
        keyboard::Key::Named(Named::ArrowDown) => {
            Some(Message::SearchBar(SearchBarMessage::HighlightDown))
        }
        keyboard::Key::Named(Named::Escape) => {
            Some(Message::SearchBar(SearchBarMessage::Dismissed))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> RippleApp {
        RippleApp::new(PlayerConfig::default())
    }

    #[test]
    fn test_select_track_starts_playback() {
        let mut app = app();
        let _ = app.update(Message::SelectTrack(2));
        assert_eq!(app.selected, Some(2));
        assert!(app.is_playing);
        assert_eq!(app.current_time, 0.0);
        assert_eq!(app.series.len(), app.config.display.bar_count);
    }

    #[test]
    fn test_seeded_series_stable_across_reselect() {
        let mut app = app();
        let _ = app.update(Message::SelectTrack(2));
        let first = app.series.clone();
        let _ = app.update(Message::SelectTrack(3));
        let _ = app.update(Message::SelectTrack(2));
        assert_eq!(app.series, first);
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut app = app();
        let _ = app.update(Message::SelectTrack(0));
        let duration = app.duration();

        let _ = app.update(Message::Seek(duration + 50.0));
        assert_eq!(app.current_time, duration);

        let _ = app.update(Message::Seek(-5.0));
        assert_eq!(app.current_time, 0.0);
    }

    #[test]
    fn test_seek_without_track_stays_at_zero() {
        let mut app = app();
        let _ = app.update(Message::Seek(42.0));
        assert_eq!(app.current_time, 0.0);
    }

    #[test]
    fn test_search_filters_list() {
        let mut app = app();
        let matches = filter_tracks(&app.library, "aurelia");
        let _ = app.update(Message::SearchResults("aurelia".into(), matches));
        assert_eq!(app.visible.len(), 2);
        assert_eq!(app.active_query.as_deref(), Some("aurelia"));
    }

    #[test]
    fn test_search_loading_set_until_results_arrive() {
        let mut app = app();
        let _ = app.update(Message::SearchBar(SearchBarMessage::QueryChanged(
            "aurelia".into(),
        )));
        let _ = app.update(Message::SearchBar(SearchBarMessage::Submitted));
        assert!(app.search.loading);

        let matches = filter_tracks(&app.library, "aurelia");
        let _ = app.update(Message::SearchResults("aurelia".into(), matches));
        assert!(!app.search.loading);
        assert_eq!(app.visible.len(), 2);
    }

    #[test]
    fn test_toggle_play_requires_track() {
        let mut app = app();
        let _ = app.update(Message::TogglePlay);
        assert!(!app.is_playing);

        let _ = app.update(Message::SelectTrack(0));
        let _ = app.update(Message::TogglePlay);
        assert!(!app.is_playing);
        let _ = app.update(Message::TogglePlay);
        assert!(app.is_playing);
    }
}
