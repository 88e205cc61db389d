//! Note model and insert payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::defaults;

// =============================================================================
// NOTE
// =============================================================================

/// Backend-assigned note identifier.
///
/// Opaque: the backend may key notes by uuid, bigint, or anything else that
/// PostgREST renders as a JSON scalar. Numbers are kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(Self(s)),
            serde_json::Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "note id must be a string or number, got {}",
                other
            ))),
        }
    }
}

/// A persisted note row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// May be empty. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Palette value, the draft sentinel, or whatever another client wrote.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    /// Insertion order preserved, duplicates allowed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Owner, filled in by the backend from the caller's identity.
    #[serde(default)]
    pub user_id: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// DRAFT
// =============================================================================

/// Insert payload for a new note.
///
/// Only the user-supplied columns. `id`, timestamps, `user_id` and
/// `is_archived` come from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub color: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            tags: Vec::new(),
            color: defaults::DRAFT_COLOR.to_string(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> serde_json::Value {
        serde_json::json!({
            "id": "9b2f4c1e-3a57-4d1b-a0e4-5c6f7d8e9a0b",
            "title": "Trip Plan",
            "content": "Book flights",
            "color": "#4F86F7",
            "tags": ["travel", "summer"],
            "is_archived": false,
            "created_at": "2024-05-01T09:30:00.123456+00:00",
            "updated_at": "2024-05-02T10:00:00+00:00",
            "user_id": "5d0c2a9e-1111-2222-3333-444455556666"
        })
    }

    #[test]
    fn test_note_deserializes_postgrest_row() {
        let note: Note = serde_json::from_value(row()).unwrap();
        assert_eq!(note.id.as_str(), "9b2f4c1e-3a57-4d1b-a0e4-5c6f7d8e9a0b");
        assert_eq!(note.title, "Trip Plan");
        assert_eq!(note.tags, vec!["travel", "summer"]);
        assert!(!note.is_archived);
        assert!(note.updated_at > note.created_at);
        assert_eq!(
            note.user_id.as_deref(),
            Some("5d0c2a9e-1111-2222-3333-444455556666")
        );
    }

    #[test]
    fn test_note_nulls_read_as_empty() {
        let mut value = row();
        value["content"] = serde_json::Value::Null;
        value["tags"] = serde_json::Value::Null;
        value["color"] = serde_json::Value::Null;
        value["user_id"] = serde_json::Value::Null;

        let note: Note = serde_json::from_value(value).unwrap();
        assert!(note.content.is_empty());
        assert!(note.tags.is_empty());
        assert!(note.color.is_empty());
        assert!(note.user_id.is_none());
    }

    #[test]
    fn test_note_ignores_joined_columns() {
        let mut value = row();
        value["tasks"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Note>(value).is_ok());
    }

    #[test]
    fn test_numeric_id_is_kept_as_text() {
        let mut value = row();
        value["id"] = serde_json::json!(42);
        let note: Note = serde_json::from_value(value).unwrap();
        assert_eq!(note.id, NoteId::from("42"));
    }

    #[test]
    fn test_boolean_id_is_rejected() {
        let mut value = row();
        value["id"] = serde_json::json!(true);
        assert!(serde_json::from_value::<Note>(value).is_err());
    }

    #[test]
    fn test_duplicate_tags_are_kept() {
        let mut value = row();
        value["tags"] = serde_json::json!(["a", "b", "a"]);
        let note: Note = serde_json::from_value(value).unwrap();
        assert_eq!(note.tags, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_draft_serializes_only_user_columns() {
        let draft = NoteDraft::new("Groceries")
            .with_content("milk, eggs")
            .with_tags(["home", "today"])
            .with_color("#4CAF50");

        let json = serde_json::to_value(&draft).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(json["title"], "Groceries");
        assert_eq!(json["tags"], serde_json::json!(["home", "today"]));
        assert!(obj.get("id").is_none());
        assert!(obj.get("user_id").is_none());
    }

    #[test]
    fn test_draft_default_color_is_sentinel() {
        let draft = NoteDraft::new("x");
        assert_eq!(draft.color, "default");
        assert!(draft.content.is_empty());
        assert!(draft.tags.is_empty());
    }
}
