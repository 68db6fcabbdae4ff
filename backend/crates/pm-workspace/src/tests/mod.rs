mod workspace_team;

use crate::{
    NewProjectInput, NewTaskInput, NewTeamMemberInput, SyncOutcome, TaskChanges, Workspace,
};

use pm_core::{Project, ProjectPatch, Task, TaskPatch, TeamMember, TeamMemberPatch};
use pm_db::{DbError, DbErrorResult, MemoryStore, WorkspaceStore};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Memory store whose project updates can be switched to fail, standing in
/// for a storage hiccup between a task write and the progress sync.
#[derive(Default)]
pub(crate) struct FailingStore {
    inner: MemoryStore,
    fail_project_updates: AtomicBool,
}

impl FailingStore {
    pub(crate) fn set_failing(&self, failing: bool) {
        self.fail_project_updates.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl WorkspaceStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn create_project(&self, project: Project) -> DbErrorResult<Project> {
        self.inner.create_project(project).await
    }

    async fn get_project(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        self.inner.get_project(id).await
    }

    async fn list_projects(&self) -> DbErrorResult<Vec<Project>> {
        self.inner.list_projects().await
    }

    async fn update_project(
        &self,
        id: Uuid,
        patch: &ProjectPatch,
    ) -> DbErrorResult<Option<Project>> {
        if self.fail_project_updates.load(Ordering::SeqCst) {
            return Err(DbError::Initialization {
                message: "database is locked".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.inner.update_project(id, patch).await
    }

    async fn delete_project(&self, id: Uuid) -> DbErrorResult<bool> {
        self.inner.delete_project(id).await
    }

    async fn create_task(&self, task: Task) -> DbErrorResult<Task> {
        self.inner.create_task(task).await
    }

    async fn get_task(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        self.inner.get_task(id).await
    }

    async fn list_tasks(&self) -> DbErrorResult<Vec<Task>> {
        self.inner.list_tasks().await
    }

    async fn list_tasks_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Task>> {
        self.inner.list_tasks_by_project(project_id).await
    }

    async fn list_tasks_by_assignee(&self, assignee_id: Uuid) -> DbErrorResult<Vec<Task>> {
        self.inner.list_tasks_by_assignee(assignee_id).await
    }

    async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> DbErrorResult<Option<Task>> {
        self.inner.update_task(id, patch).await
    }

    async fn delete_task(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        self.inner.delete_task(id).await
    }

    async fn create_team_member(&self, member: TeamMember) -> DbErrorResult<TeamMember> {
        self.inner.create_team_member(member).await
    }

    async fn get_team_member(&self, id: Uuid) -> DbErrorResult<Option<TeamMember>> {
        self.inner.get_team_member(id).await
    }

    async fn list_team_members(&self) -> DbErrorResult<Vec<TeamMember>> {
        self.inner.list_team_members().await
    }

    async fn update_team_member(
        &self,
        id: Uuid,
        patch: &TeamMemberPatch,
    ) -> DbErrorResult<Option<TeamMember>> {
        self.inner.update_team_member(id, patch).await
    }

    async fn delete_team_member(&self, id: Uuid) -> DbErrorResult<bool> {
        self.inner.delete_team_member(id).await
    }

    async fn is_empty(&self) -> DbErrorResult<bool> {
        self.inner.is_empty().await
    }
}

pub(crate) fn memory_workspace() -> Workspace {
    Workspace::new(Arc::new(MemoryStore::new()))
}

pub(crate) async fn sqlite_workspace() -> Workspace {
    let pool = pm_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool");
    Workspace::new(Arc::new(pm_db::SqliteStore::new(pool)))
}

/// One workspace per backend
pub(crate) async fn all_workspaces() -> Vec<Workspace> {
    vec![memory_workspace(), sqlite_workspace().await]
}

pub(crate) async fn create_project(workspace: &Workspace, name: &str) -> Project {
    workspace
        .create_project(NewProjectInput {
            name: Some(name.to_string()),
            ..NewProjectInput::default()
        })
        .await
        .unwrap()
}

pub(crate) async fn create_task(workspace: &Workspace, project_id: Uuid, name: &str) -> Task {
    workspace
        .create_task(NewTaskInput {
            project_id: Some(project_id.to_string()),
            name: Some(name.to_string()),
            assignee_id: None,
        })
        .await
        .unwrap()
        .task
}

pub(crate) async fn create_member(workspace: &Workspace, name: &str) -> TeamMember {
    workspace
        .create_team_member(NewTeamMemberInput {
            name: Some(name.to_string()),
            ..NewTeamMemberInput::default()
        })
        .await
        .unwrap()
}

pub(crate) fn status_change(status: &str) -> TaskChanges {
    TaskChanges {
        status: Some(status.to_string()),
        ..TaskChanges::default()
    }
}

/// The project a sync produced, if it went through
pub(crate) fn synced(outcome: &SyncOutcome) -> Option<&Project> {
    match outcome {
        SyncOutcome::Synced(project) => Some(project),
        _ => None,
    }
}
