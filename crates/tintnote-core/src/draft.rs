//! The "new note" form: raw input fields, tag parsing, and submission.

use tracing::{info, warn};

use crate::defaults;
use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft};
use crate::traits::NoteStore;

/// Split a comma-separated tags field into tags.
///
/// Segments are trimmed and empty ones dropped. Order and duplicates are
/// kept.
///
/// ```
/// use tintnote_core::parse_tags;
///
/// assert_eq!(parse_tags(" home, today,,home "), vec!["home", "today", "home"]);
/// assert!(parse_tags(" , ").is_empty());
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(defaults::TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Form fields as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    /// Raw tags field, comma separated.
    pub tags: String,
    pub color: String,
}

impl Default for NoteForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tags: String::new(),
            color: defaults::DRAFT_COLOR.to_string(),
        }
    }
}

impl NoteForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Check the fields and build the insert payload.
    ///
    /// The title must contain something other than whitespace and stay
    /// within [`defaults::TITLE_MAX_CHARS`]. It is submitted as typed, not
    /// trimmed.
    pub fn validate(&self) -> Result<NoteDraft> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }
        let len = self.title.chars().count();
        if len > defaults::TITLE_MAX_CHARS {
            return Err(Error::Validation(format!(
                "Title is too long ({} characters, max {})",
                len,
                defaults::TITLE_MAX_CHARS
            )));
        }

        Ok(NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: parse_tags(&self.tags),
            color: self.color.clone(),
        })
    }

    /// Validate, then insert through `store`.
    ///
    /// A validation failure returns before any round trip.
    pub async fn submit(&self, store: &dyn NoteStore) -> Result<Note> {
        let draft = self.validate()?;

        match store.create_note(draft).await {
            Ok(note) => {
                info!(note_id = %note.id, "Note created");
                Ok(note)
            }
            Err(e) => {
                warn!(error = %e, "Failed to create note");
                Err(e)
            }
        }
    }
}
