//! Project repository for CRUD operations on projects.
//!
//! ## Partial updates
//!
//! `update` only writes the columns present in the `ProjectPatch`. Progress
//! synchronization and user edits of unrelated fields (name, due date) can
//! therefore interleave without one overwriting the other's columns.

use crate::repositories::row_decode;
use crate::Result as DbErrorResult;

use pm_core::{Project, ProjectPatch, ProjectStatus};

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    status: String,
    progress: i64,
    due_date: String,
    studio_lead: String,
    team: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = crate::DbError;

    fn try_from(r: ProjectRow) -> DbErrorResult<Self> {
        let team: Vec<String> = serde_json::from_str(&r.team)?;

        Ok(Project {
            id: row_decode::uuid(&r.id, "project.id")?,
            name: r.name,
            status: row_decode::parsed::<ProjectStatus>(&r.status, "project.status")?,
            progress: row_decode::bounded_u8(r.progress, "project.progress")?,
            due_date: r.due_date,
            studio_lead: r.studio_lead,
            team: team
                .iter()
                .filter_map(|id| row_decode::optional_uuid(Some(id)))
                .collect(),
            created_at: row_decode::timestamp(r.created_at, "project.created_at")?,
            updated_at: row_decode::timestamp(r.updated_at, "project.updated_at")?,
        })
    }
}

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let team = serde_json::to_string(&project.team)?;

        sqlx::query(
            r#"
                INSERT INTO pm_projects (
                    id, name, status, progress, due_date, studio_lead, team,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(project.status.as_str())
        .bind(i64::from(project.progress))
        .bind(&project.due_date)
        .bind(&project.studio_lead)
        .bind(team)
        .bind(project.created_at.timestamp_millis())
        .bind(project.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, name, status, progress, due_date, studio_lead, team,
                    created_at, updated_at
                FROM pm_projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Project::try_from).transpose()
    }

    /// All projects, newest first
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, name, status, progress, due_date, studio_lead, team,
                    created_at, updated_at
                FROM pm_projects
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Write the fields present in `patch`. Returns false when no row matched.
    pub async fn update<'e, E>(
        executor: E,
        id: Uuid,
        patch: &ProjectPatch,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE pm_projects SET updated_at = ");
        query.push_bind(updated_at.timestamp_millis());

        if let Some(name) = &patch.name {
            query.push(", name = ").push_bind(name.clone());
        }
        if let Some(status) = patch.status {
            query.push(", status = ").push_bind(status.as_str());
        }
        if let Some(progress) = patch.progress {
            query.push(", progress = ").push_bind(i64::from(progress.min(100)));
        }
        if let Some(due_date) = &patch.due_date {
            query.push(", due_date = ").push_bind(due_date.clone());
        }
        if let Some(studio_lead) = &patch.studio_lead {
            query.push(", studio_lead = ").push_bind(studio_lead.clone());
        }
        if let Some(team) = &patch.team {
            query.push(", team = ").push_bind(serde_json::to_string(team)?);
        }

        query.push(" WHERE id = ").push_bind(id.to_string());

        let result = query.build().execute(executor).await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM pm_projects WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pm_projects")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
