// Configuration management for persistent state

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::path::PathBuf;

use crate::models::{SavedConnection, SavedQuery};

#[cfg(debug_assertions)]
const APP_NAME: &str = "mongolens-dev";

#[cfg(not(debug_assertions))]
const APP_NAME: &str = "mongolens";

/// Manages persistent configuration files
#[derive(Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    const CONNECTIONS_FILE: &'static str = "connections.json";
    const QUERIES_FILE: &'static str = "saved_queries.json";

    /// Create a new ConfigManager, initializing the config directory if needed
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(Self { config_dir })
    }

    /// Use an explicit config directory (tests and scripting).
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the platform-specific config directory
    fn get_config_dir() -> Result<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_NAME)).context("Could not determine config directory")
    }

    /// Get path to a specific config file
    fn file_path(&self, filename: &str) -> PathBuf {
        self.config_dir.join(filename)
    }

    /// Load data from a JSON file
    fn load_json<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.file_path(filename);

        if !path.exists() {
            return Ok(None);
        }

        let data =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", filename))?;

        let value: T = serde_json::from_str(&data)
            .with_context(|| format!("Failed to deserialize {}", filename))?;

        Ok(Some(value))
    }

    /// Save data to a JSON file (atomic via temp + rename).
    fn save_json<T: Serialize + ?Sized>(&self, filename: &str, data: &T) -> Result<()> {
        let path = self.file_path(filename);

        let json = serde_json::to_string_pretty(data)
            .with_context(|| format!("Failed to serialize {}", filename))?;

        atomic_write(&path, json.as_bytes())
            .with_context(|| format!("Failed to write {}", filename))?;

        Ok(())
    }

    /// Load saved connections from disk
    pub fn load_connections(&self) -> Result<Vec<SavedConnection>> {
        Ok(self.load_json(Self::CONNECTIONS_FILE)?.unwrap_or_default())
    }

    /// Save connections to disk
    pub fn save_connections(&self, connections: &[SavedConnection]) -> Result<()> {
        self.save_json(Self::CONNECTIONS_FILE, connections)
    }

    /// Load saved queries from disk
    pub fn load_queries(&self) -> Result<Vec<SavedQuery>> {
        Ok(self.load_json(Self::QUERIES_FILE)?.unwrap_or_default())
    }

    /// Save queries to disk
    pub fn save_queries(&self, queries: &[SavedQuery]) -> Result<()> {
        self.save_json(Self::QUERIES_FILE, queries)
    }
}

fn atomic_write(path: &std::path::Path, data: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(path);
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    std::io::Write::write_all(&mut tmp, data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use uuid::Uuid;

    use super::*;
    use crate::models::saved_query::SavedQueryDraft;

    fn sample_query(name: &str) -> SavedQuery {
        SavedQuery::from_draft(SavedQueryDraft {
            connection_id: Uuid::new_v4(),
            database: "testdb".to_string(),
            collection: "users".to_string(),
            name: name.to_string(),
            description: String::new(),
            filter: "{ status: 'active' }".to_string(),
        })
    }

    #[test]
    fn load_missing_files_returns_empty() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());

        assert!(manager.load_connections().expect("load connections").is_empty());
        assert!(manager.load_queries().expect("load queries").is_empty());
    }

    #[test]
    fn queries_round_trip_through_json() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());

        let queries = vec![sample_query("active users"), sample_query("stale sessions")];
        manager.save_queries(&queries).expect("failed to save queries");

        let loaded = manager.load_queries().expect("failed to load queries");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, queries[0].id);
        assert_eq!(loaded[0].name, "active users");
        assert_eq!(loaded[1].filter, "{ status: 'active' }");
    }

    #[test]
    fn connections_round_trip_through_json() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());

        let mut connection =
            SavedConnection::new("local".to_string(), "mongodb://localhost:27017".to_string());
        connection.mark_connected();
        manager.save_connections(&[connection.clone()]).expect("failed to save connections");

        let loaded = manager.load_connections().expect("failed to load connections");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, connection.id);
        assert!(loaded[0].last_connected.is_some());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());

        manager.save_queries(&[sample_query("first")]).expect("failed to save");
        manager.save_queries(&[sample_query("second")]).expect("failed to save");

        let loaded = manager.load_queries().expect("failed to load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "second");
    }
}
