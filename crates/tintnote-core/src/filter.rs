//! Search and filter pipeline for the note list.
//!
//! A pure function of (notes, query, selected colors). The two tests are
//! combined with AND:
//!
//! - **text match**: the lower-cased query is a substring of the lower-cased
//!   title, content, any tag, or the color string. Whitespace in the query is
//!   significant and an empty query matches everything.
//! - **color match**: no color selected, or the note's color is one of the
//!   selected values. Exact, case-sensitive string comparison.
//!
//! The output keeps the input order. The collection arrives sorted by
//! `updated_at` descending and the pipeline never re-sorts it.
//!
//! ```
//! use tintnote_core::{ColorSelection, NoteFilter};
//!
//! let mut colors = ColorSelection::new();
//! colors.toggle("#FF4C4C");
//!
//! let filter = NoteFilter::new("recipe").with_colors(colors);
//! assert_eq!(filter.query(), "recipe");
//! assert!(filter.colors().contains("#FF4C4C"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::Note;

// =============================================================================
// COLOR SELECTION
// =============================================================================

/// Colors picked in the filter bar (OR logic across entries).
///
/// Kept in the order the chips were switched on. Toggled one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSelection(Vec<String>);

impl ColorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch a chip: add the value if absent, remove it if present.
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, color: impl Into<String>) -> bool {
        let color = color.into();
        if let Some(pos) = self.0.iter().position(|c| *c == color) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(color);
            true
        }
    }

    pub fn contains(&self, color: &str) -> bool {
        self.0.iter().any(|c| c == color)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ColorSelection {
    /// Builds a selection by toggling each value in turn, so a value listed
    /// twice ends up deselected.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for color in iter {
            selection.toggle(color);
        }
        selection
    }
}

// =============================================================================
// NOTE FILTER
// =============================================================================

/// Query text plus color selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFilter {
    query: String,
    #[serde(default)]
    colors: ColorSelection,
}

impl NoteFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            colors: ColorSelection::new(),
        }
    }

    pub fn with_colors(mut self, colors: ColorSelection) -> Self {
        self.colors = colors;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn colors(&self) -> &ColorSelection {
        &self.colors
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn toggle_color(&mut self, color: impl Into<String>) -> bool {
        self.colors.toggle(color)
    }

    /// True when neither the query nor any color narrows the list.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.colors.is_empty()
    }

    /// Whether a single note passes both tests.
    pub fn matches(&self, note: &Note) -> bool {
        let needle = self.query.to_lowercase();
        text_matches(note, &needle) && self.color_matches(note)
    }

    fn color_matches(&self, note: &Note) -> bool {
        self.colors.is_empty() || self.colors.contains(&note.color)
    }

    /// The visible subset, in input order.
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        let needle = self.query.to_lowercase();
        notes
            .iter()
            .filter(|note| {
                let keep = text_matches(note, &needle) && self.color_matches(note);
                trace!(note_id = %note.id, keep, "filter decision");
                keep
            })
            .collect()
    }
}

fn text_matches(note: &Note, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
        || note.tags.iter().any(|t| t.to_lowercase().contains(needle))
        || note.color.to_lowercase().contains(needle)
}

/// Free-function form of [`NoteFilter::apply`].
pub fn filter_notes<'a>(notes: &'a [Note], query: &str, colors: &ColorSelection) -> Vec<&'a Note> {
    NoteFilter::new(query)
        .with_colors(colors.clone())
        .apply(notes)
}
