use crate::db::models::Skill;
use crate::schemas::SkillCreate;

/// Page size for list calls. Negative `skip` or `limit` values are clamped to zero.
pub const DEFAULT_LIMIT: i64 = 102;

const COLUMNS: &str = "id, internal_idx, original_skill_id, name";

pub async fn find_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(&format!("SELECT {COLUMNS} FROM skills WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_internal_idx(
    executor: impl sqlx::PgExecutor<'_>,
    internal_idx: i32,
) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(&format!("SELECT {COLUMNS} FROM skills WHERE internal_idx = $1"))
        .bind(internal_idx)
        .fetch_optional(executor)
        .await
}

/// Names are not unique; the lowest id wins.
pub async fn find_by_name(
    executor: impl sqlx::PgExecutor<'_>,
    name: &str,
) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(&format!(
        "SELECT {COLUMNS} FROM skills WHERE name = $1 ORDER BY id LIMIT 1"
    ))
    .bind(name)
    .fetch_optional(executor)
    .await
}

pub async fn find_by_original_id(
    executor: impl sqlx::PgExecutor<'_>,
    original_skill_id: &str,
) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(&format!(
        "SELECT {COLUMNS} FROM skills WHERE original_skill_id = $1"
    ))
    .bind(original_skill_id)
    .fetch_optional(executor)
    .await
}

pub async fn list(
    executor: impl sqlx::PgExecutor<'_>,
    skip: i64,
    limit: i64,
) -> Result<Vec<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(&format!("SELECT {COLUMNS} FROM skills ORDER BY id OFFSET $1 LIMIT $2"))
        .bind(skip.max(0))
        .bind(limit.max(0))
        .fetch_all(executor)
        .await
}

pub async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    data: &SkillCreate,
) -> Result<Skill, sqlx::Error> {
    sqlx::query_as::<_, Skill>(&format!(
        "INSERT INTO skills (internal_idx, original_skill_id, name)
         VALUES ($1, $2, $3)
         RETURNING {COLUMNS}"
    ))
    .bind(data.internal_idx)
    .bind(&data.original_skill_id)
    .bind(&data.name)
    .fetch_one(executor)
    .await
}
