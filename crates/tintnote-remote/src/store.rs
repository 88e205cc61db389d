//! PostgREST-backed note store.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use tintnote_core::{defaults, Error, Note, NoteDraft, NoteId, NoteStore, Result};

use crate::config::RemoteConfig;
use crate::error::PostgrestError;

/// Media type asking PostgREST for a single JSON object instead of an array.
pub const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Note store talking to `{url}/rest/v1/{table}`.
///
/// Owns its `reqwest::Client`; build one per process and share it behind an
/// `Arc` if several screens need it.
pub struct RemoteNoteStore {
    client: Client,
    config: RemoteConfig,
}

impl RemoteNoteStore {
    /// Create a new store with the given configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing remote note store: url={}, table={}",
            config.url, config.table
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables (see [`RemoteConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(RemoteConfig::from_env()?)
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Request against the table with key and bearer attached.
    fn build_request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.config.table_url())
            .header("apikey", self.config.anon_key.as_str())
            .header("Authorization", self.config.bearer())
    }

    /// Send, check status, decode.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        op: &'static str,
        singular_read: bool,
    ) -> Result<T> {
        let start = Instant::now();

        let response = request
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Request failed: {}", e)))?;

        let result = decode(response, singular_read).await;
        let elapsed = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => debug!(op, duration_ms = elapsed, "Round trip complete"),
            Err(e) => warn!(op, duration_ms = elapsed, error = %e, "Round trip failed"),
        }
        if elapsed > defaults::SLOW_REQUEST_MS {
            warn!(op, duration_ms = elapsed, slow = true, "Slow remote operation");
        }
        result
    }
}

async fn decode<T: DeserializeOwned>(response: Response, singular_read: bool) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let err = PostgrestError::from_response(status.as_u16(), &body);
        debug!(status = status.as_u16(), code = ?err.code, "Backend returned error");
        return Err(err.into_error(singular_read));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| Error::Remote(format!("Failed to parse response: {}", e)))
}

#[async_trait]
impl NoteStore for RemoteNoteStore {
    #[instrument(skip(self), fields(subsystem = "remote", component = "postgrest", op = "list_notes"))]
    async fn list_notes(&self) -> Result<Vec<Note>> {
        let request = self.build_request(Method::GET).query(&[
            ("select", defaults::NOTE_SELECT),
            ("order", defaults::NOTE_ORDER),
        ]);

        let notes: Vec<Note> = self.execute(request, "list_notes", false).await?;
        debug!(result_count = notes.len(), "Fetched notes");
        Ok(notes)
    }

    #[instrument(skip(self, id), fields(subsystem = "remote", component = "postgrest", op = "get_note", note_id = %id))]
    async fn get_note(&self, id: &NoteId) -> Result<Note> {
        let request = self
            .build_request(Method::GET)
            .query(&[
                ("select", defaults::NOTE_SELECT.to_string()),
                ("id", format!("eq.{}", id)),
            ])
            .header("Accept", SINGLE_OBJECT);

        self.execute(request, "get_note", true).await
    }

    #[instrument(skip(self, draft), fields(subsystem = "remote", component = "postgrest", op = "create_note"))]
    async fn create_note(&self, draft: NoteDraft) -> Result<Note> {
        let request = self
            .build_request(Method::POST)
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(&[draft]);

        let note: Note = self.execute(request, "create_note", false).await?;
        info!(note_id = %note.id, "Note inserted");
        Ok(note)
    }
}
