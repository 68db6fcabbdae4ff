//! Process-local store with the same ordering and cascade rules as
//! [`SqliteStore`](crate::SqliteStore). Data is lost when the process exits.

use crate::{Result as DbErrorResult, WorkspaceStore};

use pm_core::{Project, ProjectPatch, Task, TaskPatch, TeamMember, TeamMemberPatch, clock};

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Insertion sequence stands in for SQLite's rowid when timestamps tie.
#[derive(Debug, Clone)]
struct Stored<T> {
    seq: u64,
    value: T,
}

#[derive(Debug, Default)]
struct MemoryInner {
    next_seq: u64,
    projects: HashMap<Uuid, Stored<Project>>,
    tasks: HashMap<Uuid, Stored<Task>>,
    team_members: HashMap<Uuid, Stored<TeamMember>>,
}

impl MemoryInner {
    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T, F>(entries: Vec<&Stored<T>>, created_at: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> chrono::DateTime<Utc>,
{
    let mut entries = entries;
    entries.sort_by_key(|e| Reverse((created_at(&e.value), e.seq)));
    entries.into_iter().map(|e| e.value.clone()).collect()
}

#[async_trait]
impl WorkspaceStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_project(&self, project: Project) -> DbErrorResult<Project> {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner.projects.insert(
            project.id,
            Stored {
                seq,
                value: project.clone(),
            },
        );
        Ok(project)
    }

    async fn get_project(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let inner = self.inner.read().await;
        Ok(inner.projects.get(&id).map(|p| p.value.clone()))
    }

    async fn list_projects(&self) -> DbErrorResult<Vec<Project>> {
        let inner = self.inner.read().await;
        Ok(newest_first(inner.projects.values().collect(), |p| {
            p.created_at
        }))
    }

    async fn update_project(
        &self,
        id: Uuid,
        patch: &ProjectPatch,
    ) -> DbErrorResult<Option<Project>> {
        let mut inner = self.inner.write().await;
        let Some(stored) = inner.projects.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(&mut stored.value);
        stored.value.updated_at = clock::now();
        Ok(Some(stored.value.clone()))
    }

    async fn delete_project(&self, id: Uuid) -> DbErrorResult<bool> {
        let mut inner = self.inner.write().await;
        if inner.projects.remove(&id).is_none() {
            return Ok(false);
        }

        let before = inner.tasks.len();
        inner.tasks.retain(|_, t| t.value.project_id != id);
        debug!(
            "Deleted project {} and {} task(s)",
            id,
            before - inner.tasks.len()
        );
        Ok(true)
    }

    async fn create_task(&self, task: Task) -> DbErrorResult<Task> {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner.tasks.insert(
            task.id,
            Stored {
                seq,
                value: task.clone(),
            },
        );
        Ok(task)
    }

    async fn get_task(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.get(&id).map(|t| t.value.clone()))
    }

    async fn list_tasks(&self) -> DbErrorResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(newest_first(inner.tasks.values().collect(), |t| t.created_at))
    }

    async fn list_tasks_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let inner = self.inner.read().await;
        let matching = inner
            .tasks
            .values()
            .filter(|t| t.value.project_id == project_id)
            .collect();
        Ok(newest_first(matching, |t| t.created_at))
    }

    async fn list_tasks_by_assignee(&self, assignee_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let inner = self.inner.read().await;
        let matching = inner
            .tasks
            .values()
            .filter(|t| t.value.assignee_id == Some(assignee_id))
            .collect();
        Ok(newest_first(matching, |t| t.created_at))
    }

    async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> DbErrorResult<Option<Task>> {
        let mut inner = self.inner.write().await;
        let Some(stored) = inner.tasks.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(&mut stored.value);
        stored.value.updated_at = clock::now();
        Ok(Some(stored.value.clone()))
    }

    async fn delete_task(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let mut inner = self.inner.write().await;
        Ok(inner.tasks.remove(&id).map(|t| t.value))
    }

    async fn create_team_member(&self, member: TeamMember) -> DbErrorResult<TeamMember> {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner.team_members.insert(
            member.id,
            Stored {
                seq,
                value: member.clone(),
            },
        );
        Ok(member)
    }

    async fn get_team_member(&self, id: Uuid) -> DbErrorResult<Option<TeamMember>> {
        let inner = self.inner.read().await;
        Ok(inner.team_members.get(&id).map(|m| m.value.clone()))
    }

    async fn list_team_members(&self) -> DbErrorResult<Vec<TeamMember>> {
        let inner = self.inner.read().await;
        let mut members: Vec<&Stored<TeamMember>> = inner.team_members.values().collect();
        members.sort_by(|a, b| {
            a.value
                .name
                .cmp(&b.value.name)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        Ok(members.into_iter().map(|m| m.value.clone()).collect())
    }

    async fn update_team_member(
        &self,
        id: Uuid,
        patch: &TeamMemberPatch,
    ) -> DbErrorResult<Option<TeamMember>> {
        let mut inner = self.inner.write().await;
        let Some(stored) = inner.team_members.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(&mut stored.value);
        stored.value.updated_at = clock::now();
        Ok(Some(stored.value.clone()))
    }

    async fn delete_team_member(&self, id: Uuid) -> DbErrorResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.team_members.remove(&id).is_some())
    }

    async fn is_empty(&self) -> DbErrorResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.projects.is_empty() && inner.tasks.is_empty() && inner.team_members.is_empty())
    }
}
