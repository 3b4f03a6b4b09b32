#![forbid(unsafe_code)]

pub mod profile_store;
pub mod repository;
pub mod session_store;
pub mod sqlite;

pub use profile_store::ProfileStore;
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
pub use session_store::SessionStore;
pub use sqlite::{SqliteInitError, SqliteKeyValueStore};
