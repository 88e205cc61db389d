//! In-memory `NoteStore` for deterministic testing.
//!
//! Behaves like the remote table as far as the client can observe: ids,
//! timestamps and owner are assigned on insert, `list_notes` orders by
//! `updated_at` descending, and `get_note` insists on exactly one row.
//!
//! ## Usage
//!
//! ```rust
//! use tintnote_core::mock::MockNoteStore;
//! use tintnote_core::{NoteDraft, NoteStore};
//!
//! # tokio_test_block_on(async {
//! let store = MockNoteStore::new();
//! let note = store.create_note(NoteDraft::new("Hello")).await.unwrap();
//! assert_eq!(store.list_notes().await.unwrap()[0].id, note.id);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft, NoteId};
use crate::traits::NoteStore;

/// Owner id stamped on notes created through the mock.
pub const MOCK_USER_ID: &str = "00000000-0000-4000-8000-000000000001";

/// Mock note store.
///
/// Cloning shares the underlying rows and counters.
#[derive(Clone, Default)]
pub struct MockNoteStore {
    rows: Arc<Mutex<Vec<Note>>>,
    failure: Arc<Mutex<Option<String>>>,
    list_calls: Arc<AtomicUsize>,
    get_calls: Arc<AtomicUsize>,
    create_calls: Arc<AtomicUsize>,
}

impl MockNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed rows. Duplicated ids are allowed, to exercise the exactly-one
    /// contract of `get_note`.
    pub fn with_notes(self, notes: Vec<Note>) -> Self {
        self.lock_rows().extend(notes);
        self
    }

    /// Make every operation fail with `Error::Remote(message)`.
    pub fn fail_with(self, message: impl Into<String>) -> Self {
        self.set_failure(Some(message.into()));
        self
    }

    /// Switch failure injection on or off after construction.
    pub fn set_failure(&self, message: Option<String>) {
        *self
            .failure
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = message;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn lock_rows(&self) -> std::sync::MutexGuard<'_, Vec<Note>> {
        self.rows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_failure(&self) -> Result<()> {
        let failure = self
            .failure
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match failure.as_ref() {
            Some(msg) => Err(Error::Remote(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NoteStore for MockNoteStore {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut notes = self.lock_rows().clone();
        // Stable sort; rows are kept newest-insert-first so ties list the
        // latest insert first.
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        debug!(component = "mock", result_count = notes.len(), "list_notes");
        Ok(notes)
    }

    async fn get_note(&self, id: &NoteId) -> Result<Note> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let rows = self.lock_rows();
        let mut matches = rows.iter().filter(|n| &n.id == id);
        match (matches.next(), matches.next()) {
            (Some(note), None) => Ok(note.clone()),
            (None, _) => Err(Error::NotFound(format!("No note with id {}", id))),
            (Some(_), Some(_)) => Err(Error::NotFound(format!(
                "More than one note with id {}",
                id
            ))),
        }
    }

    async fn create_note(&self, draft: NoteDraft) -> Result<Note> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let now = Utc::now();
        let note = Note {
            id: NoteId::new(uuid::Uuid::new_v4().to_string()),
            title: draft.title,
            content: draft.content,
            color: draft.color,
            tags: draft.tags,
            is_archived: false,
            created_at: now,
            updated_at: now,
            user_id: Some(MOCK_USER_ID.to_string()),
        };
        self.lock_rows().insert(0, note.clone());
        Ok(note)
    }
}
