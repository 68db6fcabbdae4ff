//! Workspace operation layer.
//!
//! Every client-visible mutation goes through [`Workspace`]. Inputs are
//! normalized and validated before the store is touched; operations that
//! change a project's task set run under that project's lock and finish with a
//! progress sync.

use crate::{
    NewProjectInput, NewTaskInput, NewTeamMemberInput, ProgressSynchronizer, ProjectChanges,
    ProjectLocks, Result as WorkspaceErrorResult, SyncOutcome, TaskChange, TaskChanges,
    TaskFilter, TaskRemoval, TeamMemberChanges, TeamMemberView, WorkspaceError,
    WorkspaceSnapshot,
};

use pm_core::normalize::{
    DEFAULT_MEMBER_NAME, DEFAULT_PROJECT_NAME, DEFAULT_TASK_NAME, name_or_default,
    normalize_progress, parse_id_set, parse_optional_id, trimmed,
};
use pm_core::{
    Project, ProjectPatch, ProjectStatus, Task, TaskPatch, TaskStatus, TeamMember,
    TeamMemberPatch,
};
use pm_db::WorkspaceStore;

use std::collections::HashSet;
use std::sync::Arc;

use log::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct Workspace {
    store: Arc<dyn WorkspaceStore>,
    locks: ProjectLocks,
    synchronizer: ProgressSynchronizer,
}

impl Workspace {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self {
            synchronizer: ProgressSynchronizer::new(Arc::clone(&store)),
            locks: ProjectLocks::new(),
            store,
        }
    }

    pub fn store(&self) -> &Arc<dyn WorkspaceStore> {
        &self.store
    }

    pub fn locks(&self) -> &ProjectLocks {
        &self.locks
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub async fn create_project(&self, input: NewProjectInput) -> WorkspaceErrorResult<Project> {
        let status = match input.status.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_project_status(raw)?,
            _ => ProjectStatus::default(),
        };

        let mut project = Project::new(name_or_default(
            input.name.as_deref(),
            DEFAULT_PROJECT_NAME,
        ));
        project.status = status;
        project.progress = input.progress.and_then(normalize_progress).unwrap_or(0);
        project.due_date = input.due_date.unwrap_or_default();
        project.studio_lead = trimmed(input.studio_lead.as_deref());
        if let Some(team) = &input.team {
            project.team = self.existing_members(team).await?;
        }

        let project = self.store.create_project(project).await?;
        info!("Created project {} ({})", project.id, project.name);

        Ok(project)
    }

    pub async fn get_project(&self, id: &str) -> WorkspaceErrorResult<Project> {
        let project_id = path_id(id, "Project")?;

        self.store
            .get_project(project_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found("Project", project_id))
    }

    /// Newest first
    pub async fn list_projects(&self) -> WorkspaceErrorResult<Vec<Project>> {
        Ok(self.store.list_projects().await?)
    }

    /// Edit project fields. Does not take the project lock and does not sync:
    /// only the given columns are written.
    pub async fn update_project(
        &self,
        id: &str,
        changes: ProjectChanges,
    ) -> WorkspaceErrorResult<Project> {
        let project_id = path_id(id, "Project")?;

        let mut patch = ProjectPatch {
            name: changes
                .name
                .as_deref()
                .map(|n| name_or_default(Some(n), DEFAULT_PROJECT_NAME)),
            status: changes
                .status
                .as_deref()
                .map(parse_project_status)
                .transpose()?,
            progress: changes.progress.and_then(normalize_progress),
            due_date: changes.due_date,
            studio_lead: changes.studio_lead.as_deref().map(|s| trimmed(Some(s))),
            team: None,
        };
        if let Some(team) = &changes.team {
            patch.team = Some(self.existing_members(team).await?);
        }

        let project = self
            .store
            .update_project(project_id, &patch)
            .await?
            .ok_or_else(|| WorkspaceError::not_found("Project", project_id))?;
        info!("Updated project {}", project_id);

        Ok(project)
    }

    /// Delete a project and all of its tasks. Returns the deleted id.
    pub async fn delete_project(&self, id: &str) -> WorkspaceErrorResult<Uuid> {
        let project_id = path_id(id, "Project")?;

        let _guard = self.locks.acquire(project_id).await;
        if !self.store.delete_project(project_id).await? {
            return Err(WorkspaceError::not_found("Project", project_id));
        }
        info!("Deleted project {}", project_id);

        Ok(project_id)
    }

    /// Recompute a project's progress on demand, e.g. after a sync warning.
    pub async fn resync_project(&self, id: &str) -> WorkspaceErrorResult<SyncOutcome> {
        let project_id = path_id(id, "Project")?;

        let _guard = self.locks.acquire(project_id).await;
        if self.store.get_project(project_id).await?.is_none() {
            return Err(WorkspaceError::not_found("Project", project_id));
        }

        match self.synchronizer.sync_outcome(project_id).await {
            SyncOutcome::ProjectMissing => Err(WorkspaceError::not_found("Project", project_id)),
            outcome => Ok(outcome),
        }
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    pub async fn create_task(&self, input: NewTaskInput) -> WorkspaceErrorResult<TaskChange> {
        let project_id = parse_optional_id(input.project_id.as_deref()).ok_or_else(|| {
            WorkspaceError::invalid_reference("projectId", "A valid projectId is required")
        })?;

        let _guard = self.locks.acquire(project_id).await;
        if self.store.get_project(project_id).await?.is_none() {
            return Err(WorkspaceError::invalid_reference(
                "projectId",
                format!("Project {} does not exist", project_id),
            ));
        }

        let assignee_id = self.resolve_assignee(input.assignee_id.as_deref()).await?;
        let task = Task::new(
            project_id,
            name_or_default(input.name.as_deref(), DEFAULT_TASK_NAME),
            assignee_id,
        );

        let task = self.store.create_task(task).await?;
        info!("Created task {} in project {}", task.id, project_id);

        let sync = self.synchronizer.sync_outcome(project_id).await;
        Ok(TaskChange { task, sync })
    }

    pub async fn update_task(
        &self,
        id: &str,
        changes: TaskChanges,
    ) -> WorkspaceErrorResult<TaskChange> {
        let task_id = path_id(id, "Task")?;

        let status = changes
            .status
            .as_deref()
            .map(parse_task_status)
            .transpose()?;

        let project_id = self
            .store
            .get_task(task_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found("Task", task_id))?
            .project_id;

        let _guard = self.locks.acquire(project_id).await;

        let assignee_id = match changes.assignee_id {
            Some(raw) => Some(self.resolve_assignee(raw.as_deref()).await?),
            None => None,
        };
        let patch = TaskPatch {
            name: changes
                .name
                .as_deref()
                .map(|n| name_or_default(Some(n), DEFAULT_TASK_NAME)),
            status,
            assignee_id,
        };

        let task = self
            .store
            .update_task(task_id, &patch)
            .await?
            .ok_or_else(|| WorkspaceError::not_found("Task", task_id))?;
        info!("Updated task {} (status={})", task.id, task.status);

        let sync = self.synchronizer.sync_outcome(project_id).await;
        Ok(TaskChange { task, sync })
    }

    pub async fn delete_task(&self, id: &str) -> WorkspaceErrorResult<TaskRemoval> {
        let task_id = path_id(id, "Task")?;

        let project_id = self
            .store
            .get_task(task_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found("Task", task_id))?
            .project_id;

        let _guard = self.locks.acquire(project_id).await;
        let task = self
            .store
            .delete_task(task_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found("Task", task_id))?;
        info!("Deleted task {} from project {}", task_id, project_id);

        let sync = self.synchronizer.sync_outcome(project_id).await;
        Ok(TaskRemoval { task, sync })
    }

    /// Newest first. A malformed filter id matches nothing.
    pub async fn list_tasks(&self, filter: TaskFilter) -> WorkspaceErrorResult<Vec<Task>> {
        let project_id = match filter.project_id.as_deref() {
            Some(raw) => match parse_optional_id(Some(raw)) {
                Some(id) => Some(id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };
        let assignee_id = match filter.assignee_id.as_deref() {
            Some(raw) => match parse_optional_id(Some(raw)) {
                Some(id) => Some(id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let tasks = match (project_id, assignee_id) {
            (Some(project_id), assignee_id) => self
                .store
                .list_tasks_by_project(project_id)
                .await?
                .into_iter()
                .filter(|t| assignee_id.is_none() || t.assignee_id == assignee_id)
                .collect(),
            (None, Some(assignee_id)) => self.store.list_tasks_by_assignee(assignee_id).await?,
            (None, None) => self.store.list_tasks().await?,
        };

        Ok(tasks)
    }

    // =========================================================================
    // Team members
    // =========================================================================

    pub async fn create_team_member(
        &self,
        input: NewTeamMemberInput,
    ) -> WorkspaceErrorResult<TeamMember> {
        let capacity = input.capacity.map(validate_capacity).transpose()?;

        let mut member = TeamMember::new(
            name_or_default(input.name.as_deref(), DEFAULT_MEMBER_NAME),
            trimmed(input.role.as_deref()),
        );
        if let Some(capacity) = capacity {
            member.capacity = capacity;
        }

        let member = self.store.create_team_member(member).await?;
        info!("Created team member {} ({})", member.id, member.name);

        Ok(member)
    }

    /// Alphabetical by name, with assignment counts
    pub async fn list_team_members(&self) -> WorkspaceErrorResult<Vec<TeamMemberView>> {
        let members = self.store.list_team_members().await?;
        let tasks = self.store.list_tasks().await?;

        Ok(members
            .into_iter()
            .map(|m| TeamMemberView::new(m, &tasks))
            .collect())
    }

    pub async fn update_team_member(
        &self,
        id: &str,
        changes: TeamMemberChanges,
    ) -> WorkspaceErrorResult<TeamMemberView> {
        let member_id = path_id(id, "TeamMember")?;

        let patch = TeamMemberPatch {
            name: changes
                .name
                .as_deref()
                .map(|n| name_or_default(Some(n), DEFAULT_MEMBER_NAME)),
            role: changes.role.as_deref().map(|r| trimmed(Some(r))),
            capacity: changes.capacity.map(validate_capacity).transpose()?,
        };

        let member = self
            .store
            .update_team_member(member_id, &patch)
            .await?
            .ok_or_else(|| WorkspaceError::not_found("TeamMember", member_id))?;
        info!("Updated team member {}", member_id);

        let tasks = self.store.list_tasks_by_assignee(member_id).await?;
        Ok(TeamMemberView::new(member, &tasks))
    }

    /// Remove a member. Project teams and task assignees keep the dangling id.
    pub async fn delete_team_member(&self, id: &str) -> WorkspaceErrorResult<Uuid> {
        let member_id = path_id(id, "TeamMember")?;

        if !self.store.delete_team_member(member_id).await? {
            return Err(WorkspaceError::not_found("TeamMember", member_id));
        }
        info!("Deleted team member {}", member_id);

        Ok(member_id)
    }

    // =========================================================================
    // Workspace
    // =========================================================================

    pub async fn snapshot(&self) -> WorkspaceErrorResult<WorkspaceSnapshot> {
        let projects = self.store.list_projects().await?;
        let tasks = self.store.list_tasks().await?;
        let team_members = self
            .store
            .list_team_members()
            .await?
            .into_iter()
            .map(|m| TeamMemberView::new(m, &tasks))
            .collect();

        Ok(WorkspaceSnapshot {
            projects,
            tasks,
            team_members,
        })
    }

    /// Keep only well-formed ids that name an existing member, first-seen order.
    async fn existing_members(&self, raw: &[String]) -> WorkspaceErrorResult<Vec<Uuid>> {
        let ids = parse_id_set(raw);
        if ids.is_empty() {
            return Ok(ids);
        }

        let known: HashSet<Uuid> = self
            .store
            .list_team_members()
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();

        Ok(ids.into_iter().filter(|id| known.contains(id)).collect())
    }

    /// An assignee that is malformed or unknown is stored as no assignee.
    async fn resolve_assignee(&self, raw: Option<&str>) -> WorkspaceErrorResult<Option<Uuid>> {
        let Some(id) = parse_optional_id(raw) else {
            return Ok(None);
        };

        Ok(self.store.get_team_member(id).await?.map(|m| m.id))
    }
}

/// Path ids that are not UUIDs cannot name anything.
#[track_caller]
fn path_id(raw: &str, entity: &'static str) -> WorkspaceErrorResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| WorkspaceError::not_found(entity, raw))
}

#[track_caller]
fn parse_project_status(raw: &str) -> WorkspaceErrorResult<ProjectStatus> {
    Ok(raw.trim().parse::<ProjectStatus>()?)
}

#[track_caller]
fn parse_task_status(raw: &str) -> WorkspaceErrorResult<TaskStatus> {
    Ok(raw.trim().parse::<TaskStatus>()?)
}

#[track_caller]
fn validate_capacity(raw: i64) -> WorkspaceErrorResult<u32> {
    if raw < 1 {
        return Err(WorkspaceError::validation(
            format!("capacity must be at least 1, got {}", raw),
            "capacity",
        ));
    }

    u32::try_from(raw).map_err(|_| {
        WorkspaceError::validation(format!("capacity is too large: {}", raw), "capacity")
    })
}
