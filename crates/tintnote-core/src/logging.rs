//! Logging conventions for tintnote.
//!
//! All crates log through `tracing`. Spans and events use the same field
//! names whichever layer emits them: `subsystem`, `component`, `op`,
//! `note_id`, `query`, `seq`, `duration_ms`, `result_count`, `status`,
//! `error` and `slow`.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Operation failed and the user sees an error state |
//! | WARN  | Recoverable issue (slow request, stale data kept) |
//! | INFO  | Lifecycle events, completed writes |
//! | DEBUG | Round trips, refresh sequencing decisions |
//! | TRACE | Per-note filter decisions, query edits |
