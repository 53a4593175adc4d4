//! Search suggestion generation for the library search bar
//!
//! Suggestions are assembled from static keyword, genre, and mood lists
//! combined with the raw input. No index or backend is involved; the lists
//! are small enough that a linear scan per keystroke is fine.

/// Maximum number of suggestions shown under the search input
pub const MAX_SUGGESTIONS: usize = 8;

/// Action words combined with the raw query ("query remix", "query live")
const KEYWORDS: [&str; 6] = [
    "remix", "live", "acoustic", "extended mix", "instrumental", "radio edit",
];

/// Genre terms matched against the query by prefix/substring
const GENRES: [&str; 10] = [
    "house", "techno", "ambient", "jazz", "hip hop", "drum and bass",
    "indie rock", "classical", "disco", "lo-fi",
];

/// Mood terms matched against the query by prefix/substring
const MOODS: [&str; 8] = [
    "chill", "energetic", "melancholy", "uplifting", "dreamy", "dark",
    "focus", "late night",
];

/// Generate up to [`MAX_SUGGESTIONS`] deduplicated suggestions for a query.
///
/// The raw query always leads the list, followed by matching genre and
/// mood terms, genre-prefixed variants, and keyword-suffixed variants.
/// An empty or whitespace-only query produces no suggestions.
pub fn suggestions_for(query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let lowered = query.to_lowercase();

    let mut suggestions: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    let mut push = |candidate: String| {
        if suggestions.len() < MAX_SUGGESTIONS
            && !suggestions.iter().any(|s| s.eq_ignore_ascii_case(&candidate))
        {
            suggestions.push(candidate);
        }
    };

    push(query.to_string());

    // Terms the query is a fragment of (typing "tech" offers "techno")
    for term in GENRES.iter().chain(MOODS.iter()) {
        if term.contains(&lowered) && *term != lowered {
            push((*term).to_string());
        }
    }

    // Genre-scoped variants (typing "piano" offers "ambient piano")
    for genre in [GENRES[0], GENRES[2]] {
        if !lowered.contains(genre) {
            push(format!("{} {}", genre, lowered));
        }
    }

    // Keyword-suffixed variants ("query remix", "query live", ...)
    for keyword in KEYWORDS {
        if !lowered.contains(keyword) {
            push(format!("{} {}", lowered, keyword));
        }
    }

    suggestions
}
