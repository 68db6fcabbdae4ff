#![allow(dead_code)]

use pm_core::{Project, Task, TeamMember};
use pm_db::{MemoryStore, SqliteStore, WorkspaceStore, open_in_memory_pool};

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

/// In-memory SQLite pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// One instance of every backend, for contract tests
pub async fn all_stores() -> Vec<Arc<dyn WorkspaceStore>> {
    vec![
        Arc::new(SqliteStore::new(create_test_pool().await)),
        Arc::new(MemoryStore::new()),
    ]
}

pub fn create_test_project(name: &str) -> Project {
    let mut project = Project::new(name.to_string());
    project.due_date = "2025-03-14".to_string();
    project.studio_lead = "Ava Martin".to_string();
    project
}

pub fn create_test_task(project_id: Uuid, name: &str) -> Task {
    Task::new(project_id, name.to_string(), None)
}

pub fn create_test_member(name: &str) -> TeamMember {
    TeamMember::new(name.to_string(), "Designer".to_string())
}
