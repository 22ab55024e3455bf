//! Integration tests for the saved-query persistence flow.

use tempfile::TempDir;
use uuid::Uuid;

use mongolens::models::{SavedQuery, SavedQueryDraft};
use mongolens::state::ConfigManager;

fn draft(connection_id: Uuid, name: &str) -> SavedQueryDraft {
    SavedQueryDraft {
        connection_id,
        database: "testdb".to_string(),
        collection: "users".to_string(),
        name: name.to_string(),
        description: "users with status active".to_string(),
        filter: "{ status: 'active' }".to_string(),
    }
}

#[test]
fn create_edit_delete_round_trip() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());
    let connection_id = Uuid::new_v4();

    // Create
    let created = SavedQuery::from_draft(draft(connection_id, "active users"));
    manager.save_queries(std::slice::from_ref(&created)).expect("failed to save");

    let mut loaded = manager.load_queries().expect("failed to load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "active users");
    assert_eq!(loaded[0].connection_id, connection_id);

    // Edit in place, as the modal's update path does
    let mut renamed = draft(connection_id, "recently active users");
    renamed.filter = "{ status: 'active', seen_at: { $gte: 1700000000 } }".to_string();
    loaded[0].apply_draft(renamed);
    manager.save_queries(&loaded).expect("failed to save edit");

    let reloaded = manager.load_queries().expect("failed to reload");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].id, created.id);
    assert_eq!(reloaded[0].created_at, created.created_at);
    assert_eq!(reloaded[0].name, "recently active users");
    assert!(reloaded[0].updated_at >= reloaded[0].created_at);

    // Delete
    manager.save_queries(&[]).expect("failed to save deletion");
    assert!(manager.load_queries().expect("failed to load after delete").is_empty());
}

#[test]
fn queries_for_other_connections_are_distinct() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());

    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let queries = vec![
        SavedQuery::from_draft(draft(first, "first connection query")),
        SavedQuery::from_draft(draft(second, "second connection query")),
    ];
    manager.save_queries(&queries).expect("failed to save");

    let loaded = manager.load_queries().expect("failed to load");
    let for_first: Vec<_> =
        loaded.iter().filter(|query| query.connection_id == first).collect();
    assert_eq!(for_first.len(), 1);
    assert_eq!(for_first[0].name, "first connection query");
}
