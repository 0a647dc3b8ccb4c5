//! Storage module - key-value persistence for tasks and preferences.
//!
//! Two layers:
//! - `StorageBackend`: raw string get/set, the boundary to whatever actually
//!   holds the bytes (memory, files on disk)
//! - `PersistentStore`: typed JSON load/save with best-effort semantics. Reads
//!   fall back to a default, writes log and swallow failures.

mod backend;
mod store;

pub use backend::{FileStorage, MemoryStorage, SharedStorage, StorageBackend};
pub use store::{PersistenceError, PersistentStore, Stored};
