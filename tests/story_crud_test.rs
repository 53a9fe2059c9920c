//! Integration tests for the story store and tool handlers against SQLite.
//!
//! Tests verify that:
//! - Create/update/delete mutate exactly one row and re-fetch the stored state
//! - Duplicate creates and missing tickets fail without mutating storage
//! - Partial updates change only the supplied fields
//! - Search and related-story queries behave as documented
//! - Tool handlers produce the expected response and error text

use std::sync::Arc;
use story_mcp_server::config::Config;
use story_mcp_server::db::{DbPool, StoryStore};
use story_mcp_server::error::StoryError;
use story_mcp_server::models::{StoryDraft, StoryPatch};
use story_mcp_server::tools::{
    CreateStoryInput, DeleteStoryInput, GetStoryInput, RelatedStoriesInput, SearchStoriesInput,
    StoryToolHandler, UpdateStoryInput,
};
use tempfile::NamedTempFile;

/// Create a store over a fresh temp-file SQLite database with the story schema.
async fn setup_store() -> StoryStore {
    let temp_file = NamedTempFile::new().unwrap();
    // Keep the temp file alive - prevent deletion when function returns
    let db_path = temp_file
        .into_temp_path()
        .keep()
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let config = Config::for_sqlite(format!("sqlite:{}", db_path));
    let pool = DbPool::connect(&config).await.unwrap();

    let schema = "CREATE TABLE instagram_stories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        ticket_number TEXT NOT NULL UNIQUE,
        title TEXT NOT NULL,
        description TEXT,
        status TEXT NOT NULL DEFAULT 'To Do',
        priority TEXT NOT NULL DEFAULT 'Medium',
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )";
    match &pool {
        DbPool::Sqlite(p) => {
            sqlx::query(schema).execute(p).await.unwrap();
        }
        DbPool::MySql(_) => unreachable!("tests run against sqlite"),
    }

    StoryStore::new(pool, "instagram_stories").unwrap()
}

fn draft(ticket: &str, title: &str) -> StoryDraft {
    StoryDraft::new(ticket, title, None, None, None)
}

fn full_draft(ticket: &str, title: &str, description: &str, status: &str, priority: &str) -> StoryDraft {
    StoryDraft::new(
        ticket,
        title,
        Some(description.to_string()),
        Some(status.to_string()),
        Some(priority.to_string()),
    )
}

fn field<'a>(row: &'a serde_json::Map<String, serde_json::Value>, name: &str) -> &'a str {
    row.get(name).and_then(|v| v.as_str()).unwrap()
}

#[tokio::test]
async fn test_store_reports_configured_table() {
    let store = setup_store().await;
    assert_eq!(store.table(), "instagram_stories");
}

#[tokio::test]
async fn test_create_then_fetch_roundtrip() {
    let store = setup_store().await;

    let row = store
        .create(&full_draft(
            "T-1",
            "Login page",
            "As a user, I want to login",
            "In Progress",
            "High",
        ))
        .await
        .unwrap();
    assert_eq!(field(&row, "ticket_number"), "T-1");
    assert_eq!(field(&row, "title"), "Login page");
    assert_eq!(field(&row, "status"), "In Progress");

    let fetched = store.fetch_by_key("T-1").await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0], row);
}

#[tokio::test]
async fn test_create_omitted_fields_take_storage_defaults() {
    let store = setup_store().await;

    let row = store.create(&draft("T-2", "Feed")).await.unwrap();
    assert_eq!(field(&row, "status"), "To Do");
    assert_eq!(field(&row, "priority"), "Medium");
    assert!(row.get("description").unwrap().is_null());
}

#[tokio::test]
async fn test_create_blank_status_treated_as_not_supplied() {
    let store = setup_store().await;

    let s = StoryDraft::new("T-3", "Profile", None, Some("   ".to_string()), None);
    let row = store.create(&s).await.unwrap();
    assert_eq!(field(&row, "status"), "To Do");
}

#[tokio::test]
async fn test_duplicate_create_conflicts_and_leaves_one_row() {
    let store = setup_store().await;

    store.create(&draft("T-1", "First")).await.unwrap();
    let err = store.create(&draft("T-1", "Second")).await.unwrap_err();
    assert!(matches!(err, StoryError::Conflict { .. }));
    assert_eq!(
        err.to_string(),
        "Story with ticket number T-1 already exists"
    );

    let rows = store.list_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(field(&rows[0], "title"), "First");
}

#[tokio::test]
async fn test_update_status_only_preserves_other_fields() {
    let store = setup_store().await;
    store
        .create(&full_draft("T-1", "Login", "desc", "To Do", "High"))
        .await
        .unwrap();

    let patch = StoryPatch::new(None, None, Some("Done".to_string()), None);
    let row = store.update("T-1", &patch).await.unwrap();
    assert_eq!(field(&row, "status"), "Done");
    assert_eq!(field(&row, "title"), "Login");
    assert_eq!(field(&row, "description"), "desc");
    assert_eq!(field(&row, "priority"), "High");
}

#[tokio::test]
async fn test_update_empty_description_clears_it() {
    let store = setup_store().await;
    store
        .create(&full_draft("T-1", "Login", "old text", "To Do", "High"))
        .await
        .unwrap();

    let patch = StoryPatch::new(None, Some(String::new()), None, None);
    let row = store.update("T-1", &patch).await.unwrap();
    assert_eq!(field(&row, "description"), "");
    assert_eq!(field(&row, "title"), "Login");
}

#[tokio::test]
async fn test_update_with_no_fields_fails_before_storage() {
    let store = setup_store().await;
    store.create(&draft("T-1", "Login")).await.unwrap();

    // Blank-only values normalize away, leaving nothing to update
    let patch = StoryPatch::new(Some("  ".to_string()), None, None, None);
    let err = store.update("T-1", &patch).await.unwrap_err();
    assert!(matches!(err, StoryError::NoFields));
    assert_eq!(err.to_string(), "No fields provided to update");
}

#[tokio::test]
async fn test_update_missing_ticket_not_found() {
    let store = setup_store().await;

    let patch = StoryPatch::new(Some("New".to_string()), None, None, None);
    let err = store.update("T-404", &patch).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Story with ticket number T-404 not found"
    );
}

#[tokio::test]
async fn test_delete_returns_snapshot_then_row_is_gone() {
    let store = setup_store().await;
    store
        .create(&full_draft("T-1", "Login", "desc", "Done", "Low"))
        .await
        .unwrap();

    let snapshot = store.delete("T-1").await.unwrap();
    assert_eq!(field(&snapshot, "title"), "Login");
    assert_eq!(field(&snapshot, "status"), "Done");

    assert!(store.fetch_by_key("T-1").await.unwrap().is_empty());
    let err = store.delete("T-1").await.unwrap_err();
    assert!(matches!(err, StoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_search_is_case_insensitive_over_title_and_description() {
    let store = setup_store().await;
    store
        .create(&full_draft("T-1", "Login page", "auth flow", "To Do", "High"))
        .await
        .unwrap();
    store
        .create(&full_draft("T-2", "Feed", "infinite scroll after LOGIN", "To Do", "Low"))
        .await
        .unwrap();
    store.create(&draft("T-3", "Settings")).await.unwrap();

    let rows = store.search("login").await.unwrap();
    assert_eq!(rows.len(), 2);

    let rows = store.search("LOGIN").await.unwrap();
    assert_eq!(rows.len(), 2);

    assert!(store.search("payments").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_excluding_drops_only_the_given_ticket() {
    let store = setup_store().await;
    store.create(&draft("T-1", "Login")).await.unwrap();
    store.create(&draft("T-2", "Feed")).await.unwrap();
    store.create(&draft("T-3", "Settings")).await.unwrap();

    let rows = store.fetch_excluding("T-1").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| field(r, "ticket_number") != "T-1"));

    // A nonexistent exclusion key excludes nothing
    let rows = store.fetch_excluding("T-404").await.unwrap();
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn test_full_story_lifecycle() {
    let store = setup_store().await;

    store.create(&draft("T-9", "Login")).await.unwrap();
    let rows = store.fetch_by_key("T-9").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].get("description").unwrap().is_null());

    let patch = StoryPatch::new(None, None, None, Some("High".to_string()));
    store.update("T-9", &patch).await.unwrap();
    let rows = store.fetch_by_key("T-9").await.unwrap();
    assert_eq!(field(&rows[0], "title"), "Login");
    assert_eq!(field(&rows[0], "priority"), "High");

    store.delete("T-9").await.unwrap();
    assert!(store.fetch_by_key("T-9").await.unwrap().is_empty());
}

// =============================================================================
// Tool handler layer
// =============================================================================

async fn setup_handler() -> StoryToolHandler {
    StoryToolHandler::new(Arc::new(setup_store().await))
}

#[tokio::test]
async fn test_get_all_stories_empty_database_message() {
    let handler = setup_handler().await;
    let text = handler.get_all_stories().await.unwrap();
    assert_eq!(text, "No stories found in the database.");
}

#[tokio::test]
async fn test_get_all_stories_carries_generation_prelude() {
    let handler = setup_handler().await;
    handler
        .create_story(CreateStoryInput {
            ticket_number: "101".to_string(),
            title: "Login".to_string(),
            description: None,
            status: None,
            priority: None,
        })
        .await
        .unwrap();

    let text = handler.get_all_stories().await.unwrap();
    assert!(text.starts_with("USER STORIES DATA FOR TEST CASE GENERATION"));
    assert!(text.contains("Stories Data:"));
    assert!(text.contains("\"ticket_number\": \"101\""));
}

#[tokio::test]
async fn test_get_story_by_ticket_not_found_message() {
    let handler = setup_handler().await;
    let text = handler
        .get_story_by_ticket(GetStoryInput {
            ticket_number: "999".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(text, "No story found with ticket number: 999");
}

#[tokio::test]
async fn test_get_story_by_ticket_requires_ticket_number() {
    let handler = setup_handler().await;
    let err = handler
        .get_story_by_ticket(GetStoryInput {
            ticket_number: "   ".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "ticket_number is required and must be a string"
    );
}

#[tokio::test]
async fn test_search_stories_no_match_message() {
    let handler = setup_handler().await;
    let text = handler
        .search_stories(SearchStoriesInput {
            keyword: "checkout".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(text, "No stories found matching keyword: checkout");
}

#[tokio::test]
async fn test_related_stories_excludes_current_and_has_prelude() {
    let handler = setup_handler().await;
    for (ticket, title) in [("101", "Login"), ("102", "Feed")] {
        handler
            .create_story(CreateStoryInput {
                ticket_number: ticket.to_string(),
                title: title.to_string(),
                description: None,
                status: None,
                priority: None,
            })
            .await
            .unwrap();
    }

    let text = handler
        .get_related_stories(RelatedStoriesInput {
            exclude_ticket: "101".to_string(),
        })
        .await
        .unwrap();
    assert!(text.starts_with("RELATED STORIES FOR CONTEXT"));
    assert!(!text.contains("\"ticket_number\": \"101\""));
    assert!(text.contains("\"ticket_number\": \"102\""));
}

#[tokio::test]
async fn test_create_update_delete_response_text() {
    let handler = setup_handler().await;

    let created = handler
        .create_story(CreateStoryInput {
            ticket_number: "T-9".to_string(),
            title: "Notifications".to_string(),
            description: Some("Push notifications for new followers".to_string()),
            status: Some("To Do".to_string()),
            priority: Some("High".to_string()),
        })
        .await
        .unwrap();
    assert!(created.starts_with("Story created successfully:\n{"));
    assert!(created.contains("\"priority\": \"High\""));

    let updated = handler
        .update_story(UpdateStoryInput {
            ticket_number: "T-9".to_string(),
            title: None,
            description: None,
            status: Some("Done".to_string()),
            priority: None,
        })
        .await
        .unwrap();
    assert!(updated.starts_with("Story updated successfully:\n{"));
    assert!(updated.contains("\"status\": \"Done\""));
    assert!(updated.contains("\"title\": \"Notifications\""));

    let deleted = handler
        .delete_story(DeleteStoryInput {
            ticket_number: "T-9".to_string(),
        })
        .await
        .unwrap();
    assert!(deleted.starts_with("Story T-9 deleted successfully:\n{"));
    assert!(deleted.contains("\"status\": \"Done\""));

    let text = handler.get_all_stories().await.unwrap();
    assert_eq!(text, "No stories found in the database.");
}

#[tokio::test]
async fn test_create_story_requires_title() {
    let handler = setup_handler().await;
    let err = handler
        .create_story(CreateStoryInput {
            ticket_number: "T-1".to_string(),
            title: "".to_string(),
            description: None,
            status: None,
            priority: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "title is required and must be a string");
}

#[tokio::test]
async fn test_update_story_all_blank_fields_is_no_fields_error() {
    let handler = setup_handler().await;
    handler
        .create_story(CreateStoryInput {
            ticket_number: "T-1".to_string(),
            title: "Login".to_string(),
            description: None,
            status: None,
            priority: None,
        })
        .await
        .unwrap();

    let err = handler
        .update_story(UpdateStoryInput {
            ticket_number: "T-1".to_string(),
            title: Some("  ".to_string()),
            description: None,
            status: Some("".to_string()),
            priority: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No fields provided to update");
}
