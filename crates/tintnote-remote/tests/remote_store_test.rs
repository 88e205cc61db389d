//! Wire-level tests for `RemoteNoteStore` against a mock PostgREST server.

use serde_json::json;
use tintnote_core::{Error, NoteDraft, NoteId, NoteStore};
use tintnote_remote::{RemoteConfig, RemoteNoteStore};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NOTES_PATH: &str = "/rest/v1/notes";

fn store_for(server: &MockServer) -> RemoteNoteStore {
    let config = RemoteConfig::new(server.uri(), "anon-key");
    RemoteNoteStore::new(config).expect("Failed to create store")
}

fn row(id: &str, title: &str, color: &str, updated_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "content": "",
        "color": color,
        "tags": [],
        "is_archived": false,
        "created_at": "2024-04-01T08:00:00+00:00",
        "updated_at": updated_at,
        "user_id": "user-1"
    })
}

#[tokio::test]
async fn test_list_notes_requests_ordered_rows() {
    let server = MockServer::start().await;

    let body = json!([
        row("b", "Newer", "#FF4C4C", "2024-04-03T08:00:00+00:00"),
        row("a", "Older", "#4F86F7", "2024-04-02T08:00:00+00:00"),
    ]);

    Mock::given(method("GET"))
        .and(path(NOTES_PATH))
        .and(query_param("select", "*"))
        .and(query_param("order", "updated_at.desc"))
        .and(header("apikey", "anon-key"))
        .and(header("Authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let notes = store_for(&server).list_notes().await.expect("list should succeed");

    // Server order is kept as-is.
    let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn test_list_notes_sends_access_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NOTES_PATH))
        .and(header("apikey", "anon-key"))
        .and(header("Authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = RemoteConfig::new(server.uri(), "anon-key").with_access_token("user-jwt");
    let store = RemoteNoteStore::new(config).unwrap();
    assert!(store.list_notes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_notes_surfaces_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NOTES_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "42P01",
            "details": null,
            "hint": null,
            "message": "relation \"public.notes\" does not exist"
        })))
        .mount(&server)
        .await;

    let err = store_for(&server).list_notes().await.unwrap_err();
    match err {
        Error::Remote(msg) => assert_eq!(msg, "relation \"public.notes\" does not exist"),
        other => panic!("Expected Remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_notes_undecodable_body_is_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NOTES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = store_for(&server).list_notes().await.unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_remote_error() {
    // Nothing listens on port 9 on the loopback interface.
    let store = RemoteNoteStore::new(RemoteConfig::new("http://127.0.0.1:9", "k")).unwrap();
    let err = store.list_notes().await.unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
}

#[tokio::test]
async fn test_get_note_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NOTES_PATH))
        .and(query_param("select", "*"))
        .and(query_param("id", "eq.abc-123"))
        .and(header("Accept", "application/vnd.pgrst.object+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(row(
            "abc-123",
            "Trip Plan",
            "#4F86F7",
            "2024-04-02T08:00:00+00:00",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let note = store_for(&server)
        .get_note(&NoteId::from("abc-123"))
        .await
        .expect("get should succeed");
    assert_eq!(note.id.as_str(), "abc-123");
    assert_eq!(note.title, "Trip Plan");
}

#[tokio::test]
async fn test_get_note_zero_rows_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NOTES_PATH))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "details": "The result contains 0 rows",
            "hint": null,
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .get_note(&NoteId::from("missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_get_note_several_rows_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NOTES_PATH))
        .and(query_param("id", "eq.dup"))
        .and(header("Accept", "application/vnd.pgrst.object+json"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "details": "The result contains 2 rows",
            "hint": null,
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = store_for(&server)
        .get_note(&NoteId::from("dup"))
        .await
        .unwrap_err();
    match err {
        Error::NotFound(msg) => {
            assert_eq!(msg, "JSON object requested, multiple (or no) rows returned")
        }
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_note_auth_failure_is_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NOTES_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .get_note(&NoteId::from("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Remote(ref m) if m == "Invalid API key"));
}

#[tokio::test]
async fn test_create_note_round_trip() {
    let server = MockServer::start().await;

    let expected_body = json!([{
        "title": "Groceries",
        "content": "milk, eggs",
        "tags": ["home", "today"],
        "color": "#4CAF50"
    }]);

    let stored = json!({
        "id": "7f1e2d3c-0000-4000-8000-000000000abc",
        "title": "Groceries",
        "content": "milk, eggs",
        "color": "#4CAF50",
        "tags": ["home", "today"],
        "is_archived": false,
        "created_at": "2024-04-05T10:00:00.5+00:00",
        "updated_at": "2024-04-05T10:00:00.5+00:00",
        "user_id": "user-1"
    });

    Mock::given(method("POST"))
        .and(path(NOTES_PATH))
        .and(header("Prefer", "return=representation"))
        .and(header("Accept", "application/vnd.pgrst.object+json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(&stored))
        .expect(1)
        .mount(&server)
        .await;

    let draft = NoteDraft::new("Groceries")
        .with_content("milk, eggs")
        .with_tags(["home", "today"])
        .with_color("#4CAF50");

    let note = store_for(&server)
        .create_note(draft.clone())
        .await
        .expect("create should succeed");

    assert!(!note.id.is_empty());
    assert_eq!(note.user_id.as_deref(), Some("user-1"));
    assert!(!note.is_archived);
    assert_eq!(note.title, draft.title);
    assert_eq!(note.content, draft.content);
    assert_eq!(note.tags, draft.tags);
    assert_eq!(note.color, draft.color);
    assert_eq!(
        note.created_at,
        chrono::DateTime::parse_from_rfc3339("2024-04-05T10:00:00.5+00:00").unwrap()
    );
}

#[tokio::test]
async fn test_create_note_rls_rejection_is_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(NOTES_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "42501",
            "message": "new row violates row-level security policy for table \"notes\""
        })))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .create_note(NoteDraft::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
}

#[tokio::test]
async fn test_custom_table_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/notes_staging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = RemoteConfig::new(server.uri(), "anon-key");
    config.table = "notes_staging".to_string();
    let store = RemoteNoteStore::new(config).unwrap();
    assert!(store.list_notes().await.unwrap().is_empty());
}
