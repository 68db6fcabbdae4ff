//! Storage seam for the workspace.
//!
//! Every backend must give the same answers for the same sequence of calls:
//! projects and tasks list newest first, team members alphabetically, updates
//! only touch the fields present in the patch, and deleting a project removes
//! its tasks in the same step.

use crate::Result as DbErrorResult;

use pm_core::{Project, ProjectPatch, Task, TaskPatch, TeamMember, TeamMemberPatch};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;

    // Projects

    async fn create_project(&self, project: Project) -> DbErrorResult<Project>;

    async fn get_project(&self, id: Uuid) -> DbErrorResult<Option<Project>>;

    async fn list_projects(&self) -> DbErrorResult<Vec<Project>>;

    /// `None` when the project does not exist
    async fn update_project(
        &self,
        id: Uuid,
        patch: &ProjectPatch,
    ) -> DbErrorResult<Option<Project>>;

    /// Deletes the project and all of its tasks atomically.
    /// Returns false when the project does not exist (nothing is removed).
    async fn delete_project(&self, id: Uuid) -> DbErrorResult<bool>;

    // Tasks

    async fn create_task(&self, task: Task) -> DbErrorResult<Task>;

    async fn get_task(&self, id: Uuid) -> DbErrorResult<Option<Task>>;

    async fn list_tasks(&self) -> DbErrorResult<Vec<Task>>;

    async fn list_tasks_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Task>>;

    async fn list_tasks_by_assignee(&self, assignee_id: Uuid) -> DbErrorResult<Vec<Task>>;

    async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> DbErrorResult<Option<Task>>;

    /// Returns the removed task, or `None` when it did not exist
    async fn delete_task(&self, id: Uuid) -> DbErrorResult<Option<Task>>;

    // Team members

    async fn create_team_member(&self, member: TeamMember) -> DbErrorResult<TeamMember>;

    async fn get_team_member(&self, id: Uuid) -> DbErrorResult<Option<TeamMember>>;

    async fn list_team_members(&self) -> DbErrorResult<Vec<TeamMember>>;

    async fn update_team_member(
        &self,
        id: Uuid,
        patch: &TeamMemberPatch,
    ) -> DbErrorResult<Option<TeamMember>>;

    /// Leaves references in `Project.team` and `Task.assignee_id` untouched
    async fn delete_team_member(&self, id: Uuid) -> DbErrorResult<bool>;

    /// True when projects, tasks, and team members are all empty
    async fn is_empty(&self) -> DbErrorResult<bool>;
}
