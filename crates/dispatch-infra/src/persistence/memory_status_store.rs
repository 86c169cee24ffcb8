//! In-memory status store

use std::cell::RefCell;

use serde_json::{Map, Value};

use dispatch_domain::StatusStore;
use dispatch_types::{Error, Result};

/// Status store holding the database tree in memory
///
/// Used in tests and for serving a tree that was fetched elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    tree: RefCell<Map<String, Value>>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a whole tree; a non-object root is rejected
    pub fn from_tree(tree: Value) -> Result<Self> {
        match tree {
            Value::Object(map) => Ok(Self {
                tree: RefCell::new(map),
            }),
            Value::Null => Ok(Self::new()),
            other => Err(Error::StoreUnavailable(format!(
                "tree root must be an object, got {}",
                other
            ))),
        }
    }

    /// Replace one child, creating the collection if needed
    pub fn put(&self, collection: &str, id: &str, value: Value) {
        let mut tree = self.tree.borrow_mut();
        let entry = tree
            .entry(collection.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(children) = entry {
            children.insert(id.to_string(), value);
        }
    }

    /// Remove one child, returning whether it existed
    pub fn remove(&self, collection: &str, id: &str) -> bool {
        self.tree
            .borrow_mut()
            .get_mut(collection)
            .and_then(Value::as_object_mut)
            .map(|children| children.remove(id).is_some())
            .unwrap_or(false)
    }
}

impl StatusStore for MemoryStatusStore {
    fn get_all(&self, collection: &str) -> Result<Option<Map<String, Value>>> {
        Ok(self
            .tree
            .borrow()
            .get(collection)
            .and_then(Value::as_object)
            .cloned())
    }

    fn get_child(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        Ok(self
            .tree
            .borrow()
            .get(collection)
            .and_then(|c| c.get(id))
            .filter(|v| !v.is_null())
            .cloned())
    }
}
