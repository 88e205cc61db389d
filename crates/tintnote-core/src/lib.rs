//! # tintnote-core
//!
//! Core types, traits, and the search and filter pipeline for tintnote.
//!
//! This crate has no I/O of its own. The remote accessor lives in
//! `tintnote-remote` and implements [`NoteStore`]; everything here is either
//! plain data or a pure function over it, plus the list-screen state machine
//! that decides which fetch result is allowed to land.

pub mod defaults;
pub mod draft;
pub mod error;
pub mod filter;
pub mod list;
pub mod logging;
pub mod models;
pub mod palette;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types at crate root
pub use draft::{parse_tags, NoteForm};
pub use error::{Error, Result};
pub use filter::{filter_notes, ColorSelection, NoteFilter};
pub use list::{NoteList, RefreshOutcome, RefreshTicket};
pub use models::*;
pub use palette::{PaletteColor, PALETTE};
pub use traits::NoteStore;
