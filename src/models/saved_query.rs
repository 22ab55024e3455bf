use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named query saved against a connection/database/collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuery {
    pub id: Uuid,
    pub connection_id: Uuid,
    pub database: String,
    pub collection: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub filter: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form output from the save-query modal, before it is given an identity.
#[derive(Debug, Clone)]
pub struct SavedQueryDraft {
    pub connection_id: Uuid,
    pub database: String,
    pub collection: String,
    pub name: String,
    pub description: String,
    pub filter: String,
}

impl SavedQuery {
    /// Mint a new saved query from a draft.
    pub fn from_draft(draft: SavedQueryDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            connection_id: draft.connection_id,
            database: draft.database,
            collection: draft.collection,
            name: draft.name.trim().to_string(),
            description: draft.description,
            filter: draft.filter,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a draft to an existing query, preserving its identity and
    /// creation time.
    pub fn apply_draft(&mut self, draft: SavedQueryDraft) {
        self.connection_id = draft.connection_id;
        self.database = draft.database;
        self.collection = draft.collection;
        self.name = draft.name.trim().to_string();
        self.description = draft.description;
        self.filter = draft.filter;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> SavedQueryDraft {
        SavedQueryDraft {
            connection_id: Uuid::new_v4(),
            database: "testdb".to_string(),
            collection: "users".to_string(),
            name: name.to_string(),
            description: "all active users".to_string(),
            filter: "{ status: 'active' }".to_string(),
        }
    }

    #[test]
    fn test_from_draft_trims_name_and_stamps_times() {
        let query = SavedQuery::from_draft(draft("  active users  "));
        assert_eq!(query.name, "active users");
        assert_eq!(query.created_at, query.updated_at);
    }

    #[test]
    fn test_apply_draft_preserves_identity() {
        let mut query = SavedQuery::from_draft(draft("before"));
        let id = query.id;
        let created_at = query.created_at;

        query.apply_draft(draft("after"));

        assert_eq!(query.id, id);
        assert_eq!(query.created_at, created_at);
        assert_eq!(query.name, "after");
        assert!(query.updated_at >= created_at);
    }
}
