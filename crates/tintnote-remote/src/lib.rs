//! # tintnote-remote
//!
//! The note accessor over a hosted PostgREST endpoint (Supabase or a bare
//! PostgREST server).
//!
//! # Example
//!
//! ```rust,no_run
//! use tintnote_core::NoteStore;
//! use tintnote_remote::RemoteNoteStore;
//!
//! #[tokio::main]
//! async fn main() -> tintnote_core::Result<()> {
//!     let store = RemoteNoteStore::from_env()?;
//!     for note in store.list_notes().await? {
//!         println!("{} {}", note.id, note.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod store;

pub use config::RemoteConfig;
pub use error::PostgrestError;
pub use store::RemoteNoteStore;
