pub mod memory_store;
pub mod sqlite_store;
pub mod workspace_store;
