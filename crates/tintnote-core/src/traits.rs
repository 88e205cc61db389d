//! Accessor trait for the remote notes table.
//!
//! Screens take a `&dyn NoteStore` (or an `Arc<dyn NoteStore>`) rather than
//! reaching for a process-wide client, so tests can hand them the in-memory
//! store from [`crate::mock`].

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Note, NoteDraft, NoteId};

/// The three round trips the client makes. No caching, no retries.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Every note visible to the current identity, most recently updated
    /// first.
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Exactly one note. `Error::NotFound` when zero or several rows match.
    async fn get_note(&self, id: &NoteId) -> Result<Note>;

    /// Insert and return the stored row.
    ///
    /// Does not validate the draft; [`crate::NoteForm::submit`] does that
    /// before calling here.
    async fn create_note(&self, draft: NoteDraft) -> Result<Note>;
}

#[async_trait]
impl<T: NoteStore + ?Sized> NoteStore for std::sync::Arc<T> {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        (**self).list_notes().await
    }

    async fn get_note(&self, id: &NoteId) -> Result<Note> {
        (**self).get_note(id).await
    }

    async fn create_note(&self, draft: NoteDraft) -> Result<Note> {
        (**self).create_note(draft).await
    }
}
