use crate::{
    ProjectRepository, Result as DbErrorResult, TaskRepository, TeamMemberRepository,
    WorkspaceStore,
};

use pm_core::{Project, ProjectPatch, Task, TaskPatch, TeamMember, TeamMemberPatch, clock};

use async_trait::async_trait;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Durable store backed by a SQLite pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap a pool that already has migrations applied
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl WorkspaceStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create_project(&self, project: Project) -> DbErrorResult<Project> {
        ProjectRepository::create(&self.pool, &project).await?;
        Ok(project)
    }

    async fn get_project(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        ProjectRepository::find_by_id(&self.pool, id).await
    }

    async fn list_projects(&self) -> DbErrorResult<Vec<Project>> {
        ProjectRepository::find_all(&self.pool).await
    }

    async fn update_project(
        &self,
        id: Uuid,
        patch: &ProjectPatch,
    ) -> DbErrorResult<Option<Project>> {
        let mut tx = self.pool.begin().await?;

        if !ProjectRepository::update(&mut *tx, id, patch, clock::now()).await? {
            return Ok(None);
        }
        let project = ProjectRepository::find_by_id(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(project)
    }

    async fn delete_project(&self, id: Uuid) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        let tasks_removed = TaskRepository::delete_by_project(&mut *tx, id).await?;
        let deleted = ProjectRepository::delete(&mut *tx, id).await?;

        if !deleted {
            // Transaction rolls back on drop
            return Ok(false);
        }

        tx.commit().await?;
        debug!("Deleted project {} and {} task(s)", id, tasks_removed);
        Ok(true)
    }

    async fn create_task(&self, task: Task) -> DbErrorResult<Task> {
        TaskRepository::create(&self.pool, &task).await?;
        Ok(task)
    }

    async fn get_task(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        TaskRepository::find_by_id(&self.pool, id).await
    }

    async fn list_tasks(&self) -> DbErrorResult<Vec<Task>> {
        TaskRepository::find_all(&self.pool).await
    }

    async fn list_tasks_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Task>> {
        TaskRepository::find_by_project(&self.pool, project_id).await
    }

    async fn list_tasks_by_assignee(&self, assignee_id: Uuid) -> DbErrorResult<Vec<Task>> {
        TaskRepository::find_by_assignee(&self.pool, assignee_id).await
    }

    async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> DbErrorResult<Option<Task>> {
        let mut tx = self.pool.begin().await?;

        if !TaskRepository::update(&mut *tx, id, patch, clock::now()).await? {
            return Ok(None);
        }
        let task = TaskRepository::find_by_id(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(task)
    }

    async fn delete_task(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let mut tx = self.pool.begin().await?;

        let Some(task) = TaskRepository::find_by_id(&mut *tx, id).await? else {
            return Ok(None);
        };
        TaskRepository::delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(Some(task))
    }

    async fn create_team_member(&self, member: TeamMember) -> DbErrorResult<TeamMember> {
        TeamMemberRepository::create(&self.pool, &member).await?;
        Ok(member)
    }

    async fn get_team_member(&self, id: Uuid) -> DbErrorResult<Option<TeamMember>> {
        TeamMemberRepository::find_by_id(&self.pool, id).await
    }

    async fn list_team_members(&self) -> DbErrorResult<Vec<TeamMember>> {
        TeamMemberRepository::find_all(&self.pool).await
    }

    async fn update_team_member(
        &self,
        id: Uuid,
        patch: &TeamMemberPatch,
    ) -> DbErrorResult<Option<TeamMember>> {
        let mut tx = self.pool.begin().await?;

        if !TeamMemberRepository::update(&mut *tx, id, patch, clock::now()).await? {
            return Ok(None);
        }
        let member = TeamMemberRepository::find_by_id(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(member)
    }

    async fn delete_team_member(&self, id: Uuid) -> DbErrorResult<bool> {
        TeamMemberRepository::delete(&self.pool, id).await
    }

    async fn is_empty(&self) -> DbErrorResult<bool> {
        let projects = ProjectRepository::count(&self.pool).await?;
        let tasks = TaskRepository::count(&self.pool).await?;
        let members = TeamMemberRepository::count(&self.pool).await?;

        Ok(projects == 0 && tasks == 0 && members == 0)
    }
}
