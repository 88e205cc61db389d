//! Centralized default constants for tintnote.
//!
//! Crates reference these instead of defining their own literals.

// =============================================================================
// REMOTE
// =============================================================================

/// Remote table holding notes.
pub const NOTES_TABLE: &str = "notes";

/// PostgREST path prefix under the project URL.
pub const REST_PATH: &str = "/rest/v1";

/// Column projection for note reads.
pub const NOTE_SELECT: &str = "*";

/// Ordering applied by `list_notes` (most recently modified first).
pub const NOTE_ORDER: &str = "updated_at.desc";

/// Request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Operations slower than this are logged at WARN.
pub const SLOW_REQUEST_MS: u64 = 3000;

// =============================================================================
// NOTE INPUT
// =============================================================================

/// Color assigned to a draft when none is picked.
pub const DRAFT_COLOR: &str = "default";

/// Maximum title length accepted by the create form, in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// Separator for the tags input field.
pub const TAG_SEPARATOR: char = ',';

// =============================================================================
// RENDERING
// =============================================================================

/// Columns in the note grid.
pub const GRID_COLUMNS: usize = 2;

/// Lines of content shown on a card.
pub const CARD_PREVIEW_LINES: usize = 2;

/// Text shown when the filtered list is empty.
pub const EMPTY_LIST_MESSAGE: &str = "No notes found. Try adjusting your search.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_defaults() {
        assert_eq!(NOTES_TABLE, "notes");
        assert_eq!(NOTE_ORDER, "updated_at.desc");
        assert!(REST_PATH.starts_with('/'));
    }

    #[test]
    fn test_grid_is_two_columns() {
        assert_eq!(GRID_COLUMNS, 2);
    }
}
