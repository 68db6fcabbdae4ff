use crate::repositories::row_decode;
use crate::{DbError, Result as DbErrorResult};

use pm_core::{Task, TaskPatch, TaskStatus};

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    project_id: String,
    name: String,
    status: String,
    assignee_id: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = DbError;

    fn try_from(r: TaskRow) -> DbErrorResult<Self> {
        Ok(Task {
            id: row_decode::uuid(&r.id, "task.id")?,
            project_id: row_decode::uuid(&r.project_id, "task.project_id")?,
            name: r.name,
            status: row_decode::parsed::<TaskStatus>(&r.status, "task.status")?,
            assignee_id: row_decode::optional_uuid(r.assignee_id.as_deref()),
            created_at: row_decode::timestamp(r.created_at, "task.created_at")?,
            updated_at: row_decode::timestamp(r.updated_at, "task.updated_at")?,
        })
    }
}

pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO pm_tasks (
                    id, project_id, name, status, assignee_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.project_id.to_string())
        .bind(&task.name)
        .bind(task.status.as_str())
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(task.created_at.timestamp_millis())
        .bind(task.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT id, project_id, name, status, assignee_id, created_at, updated_at
                FROM pm_tasks
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Task::try_from).transpose()
    }

    /// All tasks, newest first
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT id, project_id, name, status, assignee_id, created_at, updated_at
                FROM pm_tasks
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(Task::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn find_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT id, project_id, name, status, assignee_id, created_at, updated_at
                FROM pm_tasks
                WHERE project_id = ?
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(Task::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn find_by_assignee<'e, E>(
        executor: E,
        assignee_id: Uuid,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT id, project_id, name, status, assignee_id, created_at, updated_at
                FROM pm_tasks
                WHERE assignee_id = ?
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(assignee_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(Task::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update<'e, E>(
        executor: E,
        id: Uuid,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE pm_tasks SET updated_at = ");
        query.push_bind(updated_at.timestamp_millis());

        if let Some(name) = &patch.name {
            query.push(", name = ").push_bind(name.clone());
        }
        if let Some(status) = patch.status {
            query.push(", status = ").push_bind(status.as_str());
        }
        if let Some(assignee_id) = patch.assignee_id {
            query
                .push(", assignee_id = ")
                .push_bind(assignee_id.map(|id| id.to_string()));
        }

        query.push(" WHERE id = ").push_bind(id.to_string());

        let result = query.build().execute(executor).await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM pm_tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove every task of a project. Returns the number of tasks removed.
    pub async fn delete_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM pm_tasks WHERE project_id = ?")
            .bind(project_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pm_tasks")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
