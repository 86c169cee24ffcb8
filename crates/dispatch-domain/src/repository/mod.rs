//! Read interface to the external status store

use serde_json::{Map, Value};

use dispatch_types::Error;

/// A key-value status store organised in named collections
///
/// Mirrors a realtime-database tree: each collection maps child IDs to JSON
/// records. The dispatch core only reads. Map iteration order carries no
/// meaning.
pub trait StatusStore {
    /// All children of a collection, or `None` if the collection is absent
    fn get_all(&self, collection: &str) -> Result<Option<Map<String, Value>>, Error>;

    /// One child of a collection, or `None` if it is absent
    fn get_child(&self, collection: &str, id: &str) -> Result<Option<Value>, Error>;
}
