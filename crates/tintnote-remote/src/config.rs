//! Endpoint configuration.

use tintnote_core::{defaults, Error, Result};

/// Connection settings for the notes table.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`. The REST path is appended.
    pub url: String,
    /// Public (anon) API key, sent as `apikey`.
    pub anon_key: String,
    /// Signed-in user's JWT. Falls back to the anon key for `Authorization`.
    pub access_token: Option<String>,
    /// Table name.
    pub table: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl RemoteConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            access_token: None,
            table: defaults::NOTES_TABLE.to_string(),
            timeout_seconds: defaults::TIMEOUT_SECS,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Read settings from the environment.
    ///
    /// | Variable | Fallback | Default |
    /// |----------|----------|---------|
    /// | `TINTNOTE_URL` | `SUPABASE_URL` | required |
    /// | `TINTNOTE_ANON_KEY` | `SUPABASE_ANON_KEY` | required |
    /// | `TINTNOTE_ACCESS_TOKEN` | | none |
    /// | `TINTNOTE_TABLE` | | `notes` |
    /// | `TINTNOTE_TIMEOUT_SECS` | | 30 (must be at least 1) |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = non_empty("TINTNOTE_URL")
            .or_else(|| non_empty("SUPABASE_URL"))
            .ok_or_else(|| Error::Config("TINTNOTE_URL (or SUPABASE_URL) is not set".into()))?;
        let anon_key = non_empty("TINTNOTE_ANON_KEY")
            .or_else(|| non_empty("SUPABASE_ANON_KEY"))
            .ok_or_else(|| {
                Error::Config("TINTNOTE_ANON_KEY (or SUPABASE_ANON_KEY) is not set".into())
            })?;

        let timeout_seconds = match non_empty("TINTNOTE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(Error::Config(
                        "TINTNOTE_TIMEOUT_SECS must be at least 1".to_string(),
                    ))
                }
                Ok(secs) => secs,
                Err(_) => {
                    return Err(Error::Config(format!(
                        "TINTNOTE_TIMEOUT_SECS is not a number: {}",
                        raw
                    )))
                }
            },
            None => defaults::TIMEOUT_SECS,
        };

        Ok(Self {
            url,
            anon_key,
            access_token: non_empty("TINTNOTE_ACCESS_TOKEN"),
            table: non_empty("TINTNOTE_TABLE").unwrap_or_else(|| defaults::NOTES_TABLE.to_string()),
            timeout_seconds,
        })
    }

    /// `{url}/rest/v1/{table}`
    pub fn table_url(&self) -> String {
        format!(
            "{}{}/{}",
            self.url.trim_end_matches('/'),
            defaults::REST_PATH,
            self.table
        )
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!(
            "Bearer {}",
            self.access_token.as_deref().unwrap_or(&self.anon_key)
        )
    }
}
