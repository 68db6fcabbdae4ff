use crate::repositories::row_decode;
use crate::{DbError, Result as DbErrorResult};

use pm_core::{TeamMember, TeamMemberPatch};

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct TeamMemberRow {
    id: String,
    name: String,
    role: String,
    capacity: i64,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<TeamMemberRow> for TeamMember {
    type Error = DbError;

    fn try_from(r: TeamMemberRow) -> DbErrorResult<Self> {
        Ok(TeamMember {
            id: row_decode::uuid(&r.id, "team_member.id")?,
            name: r.name,
            role: r.role,
            capacity: row_decode::positive_u32(r.capacity, "team_member.capacity")?,
            created_at: row_decode::timestamp(r.created_at, "team_member.created_at")?,
            updated_at: row_decode::timestamp(r.updated_at, "team_member.updated_at")?,
        })
    }
}

pub struct TeamMemberRepository;

impl TeamMemberRepository {
    pub async fn create<'e, E>(executor: E, member: &TeamMember) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO pm_team_members (id, name, role, capacity, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(member.id.to_string())
        .bind(&member.name)
        .bind(&member.role)
        .bind(i64::from(member.capacity))
        .bind(member.created_at.timestamp_millis())
        .bind(member.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<TeamMember>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, TeamMemberRow>(
            r#"
                SELECT id, name, role, capacity, created_at, updated_at
                FROM pm_team_members
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(TeamMember::try_from).transpose()
    }

    /// All members, alphabetical by name
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<TeamMember>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, TeamMemberRow>(
            r#"
                SELECT id, name, role, capacity, created_at, updated_at
                FROM pm_team_members
                ORDER BY name ASC, rowid ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(TeamMember::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update<'e, E>(
        executor: E,
        id: Uuid,
        patch: &TeamMemberPatch,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE pm_team_members SET updated_at = ");
        query.push_bind(updated_at.timestamp_millis());

        if let Some(name) = &patch.name {
            query.push(", name = ").push_bind(name.clone());
        }
        if let Some(role) = &patch.role {
            query.push(", role = ").push_bind(role.clone());
        }
        if let Some(capacity) = patch.capacity {
            query.push(", capacity = ").push_bind(i64::from(capacity));
        }

        query.push(" WHERE id = ").push_bind(id.to_string());

        let result = query.build().execute(executor).await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM pm_team_members WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pm_team_members")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
