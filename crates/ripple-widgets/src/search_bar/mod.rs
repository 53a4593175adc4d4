//! Library search bar with generated suggestions and optional voice input
//!
//! State is pure data with a message-driven `handle_message`; the view
//! function takes the state plus a callback closure and returns an
//! `Element`. `handle_message` returns the committed query when the user
//! submits, picks a suggestion, or finalizes a voice transcript - that
//! return value is the application's search boundary.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length, Theme};

use ripple_core::{suggestions_for, VoiceInput};

/// Search bar widget state
#[derive(Debug, Clone, Default)]
pub struct SearchBarState {
    /// Current input text
    pub query: String,
    /// Generated suggestions for the current query (at most 8)
    pub suggestions: Vec<String>,
    /// Keyboard-highlighted suggestion index
    pub highlighted: Option<usize>,
    /// Whether the suggestion list is shown
    pub open: bool,
    /// Whether the application is currently resolving a search
    pub loading: bool,
}

/// Messages produced by the search bar
#[derive(Debug, Clone)]
pub enum SearchBarMessage {
    /// Input text changed
    QueryChanged(String),
    /// Enter pressed in the input
    Submitted,
    /// A suggestion was clicked
    SuggestionPicked(usize),
    /// ArrowUp pressed (from the app's keyboard subscription)
    HighlightUp,
    /// ArrowDown pressed
    HighlightDown,
    /// Escape pressed - close the suggestion list
    Dismissed,
    /// Mic button toggled
    VoiceToggled,
}

impl SearchBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a message. Returns the query to search for when the user
    /// committed one (submit, suggestion pick, or finalized transcript).
    pub fn handle_message(
        &mut self,
        message: SearchBarMessage,
        voice: &mut dyn VoiceInput,
    ) -> Option<String> {
        match message {
            SearchBarMessage::QueryChanged(query) => {
                self.suggestions = suggestions_for(&query);
                self.query = query;
                self.highlighted = None;
                self.open = !self.suggestions.is_empty();
                None
            }
            SearchBarMessage::Submitted => {
                let picked = self
                    .highlighted
                    .and_then(|i| self.suggestions.get(i).cloned())
                    .unwrap_or_else(|| self.query.clone());
                self.close_list();
                if picked.trim().is_empty() {
                    None
                } else {
                    self.query = picked.clone();
                    Some(picked)
                }
            }
            SearchBarMessage::SuggestionPicked(index) => {
                let picked = self.suggestions.get(index).cloned()?;
                self.query = picked.clone();
                self.close_list();
                Some(picked)
            }
            SearchBarMessage::HighlightUp => {
                self.move_highlight(-1);
                None
            }
            SearchBarMessage::HighlightDown => {
                self.move_highlight(1);
                None
            }
            SearchBarMessage::Dismissed => {
                self.close_list();
                None
            }
            SearchBarMessage::VoiceToggled => {
                if !voice.is_supported() {
                    return None;
                }
                if voice.is_listening() {
                    voice.stop();
                    let transcript = voice.transcript().trim().to_string();
                    if transcript.is_empty() {
                        return None;
                    }
                    log::info!("voice transcript finalized: {:?}", transcript);
                    self.query = transcript.clone();
                    self.close_list();
                    Some(transcript)
                } else {
                    voice.start();
                    None
                }
            }
        }
    }

    fn close_list(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Move the keyboard highlight, wrapping at both ends
    fn move_highlight(&mut self, delta: i32) {
        if !self.open || self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len() as i32;
        let current = self.highlighted.map(|i| i as i32);
        let next = match (current, delta) {
            (None, d) if d > 0 => 0,
            (None, _) => len - 1,
            (Some(i), d) => (i + d).rem_euclid(len),
        };
        self.highlighted = Some(next as usize);
    }
}

/// Create a search bar element.
///
/// # Arguments
///
/// * `state` - The search bar state
/// * `voice_supported` - Whether a voice backend is installed (shows the
///   mic button)
/// * `voice_listening` - Whether dictation is currently running
/// * `on_message` - Callback mapping [`SearchBarMessage`] into the
///   application's message type
pub fn search_bar<'a, Message>(
    state: &'a SearchBarState,
    voice_supported: bool,
    voice_listening: bool,
    on_message: impl Fn(SearchBarMessage) -> Message + 'a + Clone,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let on_msg = on_message.clone();
    let input = text_input("Search tracks, artists, moods...", &state.query)
        .on_input(move |s| on_msg(SearchBarMessage::QueryChanged(s)))
        .on_submit(on_message(SearchBarMessage::Submitted))
        .padding(8)
        .size(14);

    let mut input_row = row![input].spacing(6);

    if voice_supported {
        let label = if voice_listening { "Stop" } else { "Voice" };
        let mic = button(text(label).size(13))
            .on_press(on_message(SearchBarMessage::VoiceToggled))
            .style(if voice_listening {
                button::primary
            } else {
                button::secondary
            });
        input_row = input_row.push(mic);
    }

    if state.loading {
        input_row = input_row.push(
            container(text("Searching...").size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }))
            .padding(8),
        );
    }

    let mut content = column![input_row].spacing(4);

    if state.open {
        let items: Vec<Element<'a, Message>> = state
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                button(text(suggestion.as_str()).size(13))
                    .on_press(on_message(SearchBarMessage::SuggestionPicked(i)))
                    .width(Length::Fill)
                    .style(if state.highlighted == Some(i) {
                        button::primary
                    } else {
                        button::text
                    })
                    .into()
            })
            .collect();
        content = content.push(column(items).spacing(1));
    }

    content.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::NullVoiceInput;

    /// Scripted voice backend for testing the dictation flow
    struct FakeVoice {
        listening: bool,
        transcript: String,
    }

    impl VoiceInput for FakeVoice {
        fn is_supported(&self) -> bool {
            true
        }
        fn is_listening(&self) -> bool {
            self.listening
        }
        fn transcript(&self) -> &str {
            &self.transcript
        }
        fn start(&mut self) {
            self.listening = true;
        }
        fn stop(&mut self) {
            self.listening = false;
        }
    }

    #[test]
    fn test_typing_populates_suggestions() {
        let mut state = SearchBarState::new();
        let result = state.handle_message(
            SearchBarMessage::QueryChanged("tech".into()),
            &mut NullVoiceInput,
        );
        assert_eq!(result, None);
        assert!(state.open);
        assert!(!state.suggestions.is_empty());
        assert!(state.suggestions.len() <= 8);
    }

    #[test]
    fn test_submit_returns_query_and_closes() {
        let mut state = SearchBarState::new();
        state.handle_message(
            SearchBarMessage::QueryChanged("sunset".into()),
            &mut NullVoiceInput,
        );
        let result = state.handle_message(SearchBarMessage::Submitted, &mut NullVoiceInput);
        assert_eq!(result.as_deref(), Some("sunset"));
        assert!(!state.open);
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut state = SearchBarState::new();
        let result = state.handle_message(SearchBarMessage::Submitted, &mut NullVoiceInput);
        assert_eq!(result, None);
    }

    #[test]
    fn test_pick_returns_suggestion() {
        let mut state = SearchBarState::new();
        state.handle_message(
            SearchBarMessage::QueryChanged("tech".into()),
            &mut NullVoiceInput,
        );
        let expected = state.suggestions[1].clone();
        let result = state.handle_message(
            SearchBarMessage::SuggestionPicked(1),
            &mut NullVoiceInput,
        );
        assert_eq!(result.as_deref(), Some(expected.as_str()));
        assert_eq!(state.query, expected);
        assert!(!state.open);
    }

    #[test]
    fn test_highlight_navigation_wraps() {
        let mut state = SearchBarState::new();
        state.handle_message(
            SearchBarMessage::QueryChanged("tech".into()),
            &mut NullVoiceInput,
        );
        let len = state.suggestions.len();

        state.handle_message(SearchBarMessage::HighlightDown, &mut NullVoiceInput);
        assert_eq!(state.highlighted, Some(0));

        state.handle_message(SearchBarMessage::HighlightUp, &mut NullVoiceInput);
        assert_eq!(state.highlighted, Some(len - 1));

        state.handle_message(SearchBarMessage::HighlightDown, &mut NullVoiceInput);
        assert_eq!(state.highlighted, Some(0));
    }

    #[test]
    fn test_submit_uses_highlight() {
        let mut state = SearchBarState::new();
        state.handle_message(
            SearchBarMessage::QueryChanged("tech".into()),
            &mut NullVoiceInput,
        );
        state.handle_message(SearchBarMessage::HighlightDown, &mut NullVoiceInput);
        let expected = state.suggestions[0].clone();

        let result = state.handle_message(SearchBarMessage::Submitted, &mut NullVoiceInput);
        assert_eq!(result, Some(expected));
    }

    #[test]
    fn test_escape_closes_list() {
        let mut state = SearchBarState::new();
        state.handle_message(
            SearchBarMessage::QueryChanged("tech".into()),
            &mut NullVoiceInput,
        );
        state.handle_message(SearchBarMessage::Dismissed, &mut NullVoiceInput);
        assert!(!state.open);
        assert_eq!(state.highlighted, None);
        // Query text is retained
        assert_eq!(state.query, "tech");
    }

    #[test]
    fn test_voice_round_trip_submits_transcript() {
        let mut state = SearchBarState::new();
        let mut voice = FakeVoice {
            listening: false,
            transcript: "evening jazz".into(),
        };

        let result = state.handle_message(SearchBarMessage::VoiceToggled, &mut voice);
        assert_eq!(result, None);
        assert!(voice.listening);

        let result = state.handle_message(SearchBarMessage::VoiceToggled, &mut voice);
        assert_eq!(result.as_deref(), Some("evening jazz"));
        assert_eq!(state.query, "evening jazz");
        assert!(!voice.listening);
    }

    #[test]
    fn test_voice_ignored_without_backend() {
        let mut state = SearchBarState::new();
        let result = state.handle_message(SearchBarMessage::VoiceToggled, &mut NullVoiceInput);
        assert_eq!(result, None);
    }
}
