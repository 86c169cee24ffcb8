//! Status store backed by a JSON export of the realtime database
//!
//! The file holds the whole database tree:
//! `{"truck_status": {...}, "scan_history": {...}, "fire_trucks": {...}}`.
//! Scanners keep rewriting it, so every read goes back to disk.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde_json::{Map, Value};

use dispatch_domain::StatusStore;
use dispatch_types::{Error, Result};

/// File-based implementation of StatusStore
pub struct FileStatusStore {
    snapshot_path: PathBuf,
}

impl FileStatusStore {
    /// Open a snapshot file; it must already exist
    pub fn open(snapshot_path: PathBuf) -> Result<Self> {
        if !snapshot_path.is_file() {
            return Err(Error::StoreUnavailable(format!(
                "snapshot not found: {}",
                snapshot_path.display()
            )));
        }
        Ok(Self { snapshot_path })
    }

    /// Read the whole tree from disk
    fn read_tree(&self) -> Result<Map<String, Value>> {
        let unavailable = |reason: String| {
            Error::StoreUnavailable(format!("{}: {}", self.snapshot_path.display(), reason))
        };

        let file = File::open(&self.snapshot_path).map_err(|e| unavailable(e.to_string()))?;
        let reader = BufReader::new(file);
        let tree: Value =
            serde_json::from_reader(reader).map_err(|e| unavailable(e.to_string()))?;
        log::debug!("Read status snapshot {}", self.snapshot_path.display());

        match tree {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            _ => Err(unavailable("root is not an object".to_string())),
        }
    }
}

impl StatusStore for FileStatusStore {
    fn get_all(&self, collection: &str) -> Result<Option<Map<String, Value>>> {
        let mut tree = self.read_tree()?;
        match tree.remove(collection) {
            Some(Value::Object(children)) => Ok(Some(children)),
            Some(Value::Null) | None => Ok(None),
            Some(_) => {
                log::warn!("Collection {} is not an object, treating as empty", collection);
                Ok(None)
            }
        }
    }

    fn get_child(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        Ok(self
            .get_all(collection)?
            .and_then(|mut children| children.remove(id))
            .filter(|v| !v.is_null()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_domain::service::get_available_trucks;
    use dispatch_types::collections;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_snapshot(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileStatusStore::open(dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::StoreUnavailable(_))));
    }

    #[test]
    fn test_reads_collection() {
        let file = write_snapshot(
            r#"{"truck_status": {"E1": {"scan_count": 2, "station_id": "Central"}}}"#,
        );
        let store = FileStatusStore::open(file.path().to_path_buf()).unwrap();
        let trucks = store.get_all(collections::TRUCK_STATUS).unwrap().unwrap();
        assert!(trucks.contains_key("E1"));
        assert!(store.get_all(collections::SCAN_HISTORY).unwrap().is_none());
    }

    #[test]
    fn test_get_child() {
        let file = write_snapshot(
            r#"{"scan_history": {"E1": {"k": {"timestamp": 1, "scan_count": 1}}, "E2": null}}"#,
        );
        let store = FileStatusStore::open(file.path().to_path_buf()).unwrap();
        assert!(store.get_child(collections::SCAN_HISTORY, "E1").unwrap().is_some());
        assert!(store.get_child(collections::SCAN_HISTORY, "E2").unwrap().is_none());
        assert!(store.get_child(collections::SCAN_HISTORY, "E3").unwrap().is_none());
    }

    #[test]
    fn test_null_root_is_empty() {
        let file = write_snapshot("null");
        let store = FileStatusStore::open(file.path().to_path_buf()).unwrap();
        assert!(get_available_trucks(&store).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_is_unavailable() {
        let file = write_snapshot("{not json");
        let store = FileStatusStore::open(file.path().to_path_buf()).unwrap();
        assert!(matches!(
            get_available_trucks(&store),
            Err(Error::StoreUnavailable(_))
        ));
    }

    #[test]
    fn test_sees_updates_between_reads() {
        let file = write_snapshot(r#"{"truck_status": {"E1": {"scan_count": 0}}}"#);
        let store = FileStatusStore::open(file.path().to_path_buf()).unwrap();
        assert_eq!(get_available_trucks(&store).unwrap().len(), 1);

        std::fs::write(file.path(), r#"{"truck_status": {"E1": {"scan_count": 1}}}"#).unwrap();
        assert!(get_available_trucks(&store).unwrap().is_empty());
    }
}
