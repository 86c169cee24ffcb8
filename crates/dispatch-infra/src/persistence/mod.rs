//! Status store implementations

mod file_status_store;
mod memory_status_store;

pub use file_status_store::FileStatusStore;
pub use memory_status_store::MemoryStatusStore;
