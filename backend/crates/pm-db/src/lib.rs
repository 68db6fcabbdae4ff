pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;


pub use connection::sqlite_pool::{open_in_memory_pool, open_pool, run_migrations};
pub use error::{DbError, Result, Result as DbErrorResult};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::team_member_repository::TeamMemberRepository;
pub use store::memory_store::MemoryStore;
pub use store::sqlite_store::SqliteStore;
pub use store::workspace_store::WorkspaceStore;
