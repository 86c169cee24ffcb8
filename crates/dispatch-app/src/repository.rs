//! Store adapters for the persistence layer

use dispatch_infra::persistence::FileStatusStore;
use dispatch_types::Result;

use crate::config::Config;

/// Open the status store configured in `config`
pub fn open_status_store(config: &Config) -> Result<FileStatusStore> {
    let store_path = config.store_path()?;
    log::debug!("Opening status store at {}", store_path.display());
    FileStatusStore::open(store_path)
}
