//! State behind the note list screen.
//!
//! Holds the last fetched collection and the filter inputs, and derives the
//! visible subset through [`NoteFilter`]. Refreshes can overlap (screen
//! focus, pull-to-refresh, returning from the create screen). Each one takes
//! a [`RefreshTicket`] carrying a sequence number, and only the most recently
//! issued ticket may replace the collection. An older fetch that completes
//! late is dropped instead of overwriting newer data.

use tracing::{debug, instrument, trace, warn};

use crate::error::Result;
use crate::filter::{ColorSelection, NoteFilter};
use crate::models::Note;
use crate::traits::NoteStore;

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// What `finish_refresh` did with a completed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Collection replaced; carries the new size.
    Applied(usize),
    /// Latest fetch failed; previous collection kept.
    Failed(String),
    /// A newer fetch was issued since; result discarded.
    Stale,
}

#[derive(Debug, Default)]
pub struct NoteList {
    notes: Vec<Note>,
    filter: NoteFilter,
    issued: u64,
    refreshing: bool,
    error: Option<String>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch. Supersedes every ticket issued before it.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.refreshing = true;
        RefreshTicket(self.issued)
    }

    /// Land a completed fetch.
    ///
    /// Only the latest ticket is applied. On failure the previous collection
    /// stays and the message is kept for display.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Note>>,
    ) -> RefreshOutcome {
        if ticket.0 != self.issued {
            debug!(
                seq = ticket.0,
                latest = self.issued,
                "Dropping stale refresh result"
            );
            return RefreshOutcome::Stale;
        }

        self.refreshing = false;
        match result {
            Ok(notes) => {
                let count = notes.len();
                self.notes = notes;
                self.error = None;
                debug!(seq = ticket.0, result_count = count, "Refresh applied");
                RefreshOutcome::Applied(count)
            }
            Err(e) => {
                let msg = e.user_message();
                warn!(seq = ticket.0, error = %msg, "Refresh failed, keeping previous notes");
                self.error = Some(msg.clone());
                RefreshOutcome::Failed(msg)
            }
        }
    }

    /// Fetch through `store` and land the result.
    #[instrument(skip(self, store), fields(subsystem = "list", component = "note_list", op = "refresh"))]
    pub async fn refresh(&mut self, store: &dyn NoteStore) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        let result = store.list_notes().await;
        self.finish_refresh(ticket, result)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        trace!(query = %query, "Search query changed");
        self.filter.set_query(query);
    }

    /// Switch one color chip. Returns whether it is on afterwards.
    pub fn toggle_color(&mut self, color: impl Into<String>) -> bool {
        self.filter.toggle_color(color)
    }

    pub fn query(&self) -> &str {
        self.filter.query()
    }

    pub fn selected_colors(&self) -> &ColorSelection {
        self.filter.colors()
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    /// The full collection as last fetched.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes to render, in fetch order.
    pub fn visible(&self) -> Vec<&Note> {
        self.filter.apply(&self.notes)
    }

    /// Count shown in the header.
    pub fn count(&self) -> usize {
        self.visible().len()
    }

    /// Whether to show the "no notes found" line.
    ///
    /// Driven by the filtered result alone, so an empty collection shows it
    /// too.
    pub fn shows_empty_indicator(&self) -> bool {
        self.count() == 0
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Message from the last failed refresh, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
