use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::lenient;
use super::model::{NewPlacement, PlacementRecord, RecordId};

const STORE_VERSION: u32 = 1;

/// Get the default entries file path (~/.config/meet-board/entries.json)
pub fn get_store_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("entries.json"))
}

/// All placement records of a meet, as kept on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordStore {
    pub version: u32,
    #[serde(default = "first_id")]
    pub next_id: RecordId,
    /// Rows that fail to decode are dropped on load with a warning
    #[serde(default, deserialize_with = "lenient::rows")]
    pub entries: Vec<PlacementRecord>,
}

fn first_id() -> RecordId {
    1
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create a new empty store with version 1
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            next_id: first_id(),
            entries: Vec::new(),
        }
    }

    /// Store placements, assigning increasing ids. Returns the new ids.
    pub fn insert_all(&mut self, placements: Vec<NewPlacement>) -> Vec<RecordId> {
        // Keep ids unique even if next_id was edited below an existing id
        let max_existing = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_existing + 1);

        placements
            .into_iter()
            .map(|placement| {
                let id = self.next_id;
                self.next_id += 1;
                self.entries.push(placement.into_record(id));
                id
            })
            .collect()
    }

    pub fn get(&self, id: RecordId) -> Option<&PlacementRecord> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Replace the entry with the same id.
    /// Returns false if there was no such entry.
    pub fn update(&mut self, record: PlacementRecord) -> bool {
        match self.entries.iter_mut().find(|e| e.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove an entry by id.
    /// Returns true if the entry existed, false otherwise
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Snapshot of every entry, newest first (ties: highest id first)
    pub fn entries_newest_first(&self) -> Vec<PlacementRecord> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        entries
    }
}

/// Load the store from a JSON file
///
/// If the file doesn't exist, returns a new empty store.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_store(path: &Path) -> Result<RecordStore> {
    if !path.exists() {
        debug!(path = %path.display(), "No entries file yet, starting empty");
        return Ok(RecordStore::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open entries file at {}", path.display()))?;

    let store: RecordStore = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load entries from {}", path.display()))?;

    if store.version != STORE_VERSION {
        anyhow::bail!("Unsupported entries file version: {}", store.version);
    }

    debug!(entries = store.entries.len(), "Loaded entries");
    Ok(store)
}

/// Save the store to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_store(path: &Path, store: &RecordStore) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, store).context("Failed to serialize entries")?;

    file.commit().context("Failed to save entries")?;

    debug!(entries = store.entries.len(), path = %path.display(), "Saved entries");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AgeClass, Sport};
    use chrono::{Duration, Utc};

    fn placement(team: &str, position: u32, minutes_ago: i64) -> NewPlacement {
        NewPlacement {
            team: Some(team.to_string()),
            player: None,
            sport: Sport::Kabaddi,
            age_class: AgeClass::MenOpen,
            position,
            points: 0,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_new_store_empty() {
        let store = RecordStore::new();
        assert_eq!(store.version, 1);
        assert_eq!(store.next_id, 1);
        assert!(store.entries.is_empty());
    }

    #[test]
    fn test_insert_assigns_ids() {
        let mut store = RecordStore::new();
        let ids = store.insert_all(vec![placement("Mandi", 1, 0), placement("Solan", 2, 0)]);
        assert_eq!(ids, vec![1, 2]);
        let ids = store.insert_all(vec![placement("Kullu", 3, 0)]);
        assert_eq!(ids, vec![3]);
        assert_eq!(store.get(3).unwrap().team.as_deref(), Some("Kullu"));
    }

    #[test]
    fn test_insert_skips_taken_ids() {
        let mut store = RecordStore::new();
        store.insert_all(vec![placement("Mandi", 1, 0), placement("Solan", 2, 0)]);
        store.next_id = 1;
        let ids = store.insert_all(vec![placement("Kullu", 3, 0)]);
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_update_and_remove() {
        let mut store = RecordStore::new();
        store.insert_all(vec![placement("Mandi", 1, 0)]);

        let mut record = store.get(1).unwrap().clone();
        record.team = Some("Solan".to_string());
        assert!(store.update(record.clone()));
        assert_eq!(store.get(1).unwrap().team.as_deref(), Some("Solan"));

        record.id = 9;
        assert!(!store.update(record));

        assert!(store.remove(1));
        assert!(!store.remove(1));
        assert!(store.entries.is_empty());
    }

    #[test]
    fn test_entries_newest_first() {
        let mut store = RecordStore::new();
        store.insert_all(vec![placement("Old", 1, 60)]);
        store.insert_all(vec![placement("New", 1, 0)]);
        store.insert_all(vec![placement("Mid", 1, 30)]);

        let teams: Vec<_> = store
            .entries_newest_first()
            .into_iter()
            .map(|e| e.team.unwrap())
            .collect();
        assert_eq!(teams, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_store(&dir.path().join("missing.json")).unwrap();
        assert_eq!(store, RecordStore::new());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("entries.json");

        let mut store = RecordStore::new();
        store.insert_all(vec![placement("Mandi", 1, 5), placement("Solan", 2, 5)]);

        save_store(&path, &store).unwrap();
        let loaded = load_store(&path).unwrap();

        assert_eq!(loaded, store);
        assert_eq!(loaded.next_id, 3);
    }

    #[test]
    fn test_load_skips_unreadable_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(
            &path,
            r#"{
                "version": 1,
                "next_id": 5,
                "entries": [
                    {"id": 1, "team": "Mandi", "sport": "Kabaddi", "age_class": "Men - Open",
                     "position": 1, "points": 10, "created_at": "2025-11-20T10:00:00Z"},
                    {"id": 2, "team": "Solan", "sport": "Curling", "age_class": "Men - Open",
                     "position": 1, "points": 5, "created_at": "2025-11-20T10:05:00Z"},
                    {"id": 3, "team": "Kullu", "sport": "Chess", "age_class": "Men - Open"},
                    {"id": 4, "team": 7, "sport": "Chess", "age_class": "Women - Open",
                     "position": 2, "points": 3, "created_at": "2025-11-20T10:10:00Z"}
                ]
            }"#,
        )
        .unwrap();

        let store = load_store(&path).unwrap();
        let ids: Vec<_> = store.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(store.get(4).unwrap().team.as_deref(), Some("7"));
        assert_eq!(store.next_id, 5);
    }

    #[test]
    fn test_load_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(&path, r#"{"version": 2, "entries": []}"#).unwrap();

        let err = load_store(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported entries file version"));
    }
}
