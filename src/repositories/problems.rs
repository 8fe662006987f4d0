use sqlx::PgPool;

use crate::db::models::Problem;
use crate::repositories::errors::RecordsError;
use crate::repositories::skills;
use crate::schemas::ProblemCreate;

/// Page size for list calls. Negative `skip` or `limit` values are clamped to zero.
pub const DEFAULT_LIMIT: i64 = 100;
pub const DEFAULT_SKILL_INTERNAL_IDX_LIMIT: i64 = 3200;

const COLUMNS: &str =
    "id, internal_idx, original_problem_id, description_placeholder, skill_id, difficulty_mu_q";

pub async fn find_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<Option<Problem>, sqlx::Error> {
    sqlx::query_as::<_, Problem>(&format!("SELECT {COLUMNS} FROM problems WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_internal_idx(
    executor: impl sqlx::PgExecutor<'_>,
    internal_idx: i32,
) -> Result<Option<Problem>, sqlx::Error> {
    sqlx::query_as::<_, Problem>(&format!("SELECT {COLUMNS} FROM problems WHERE internal_idx = $1"))
        .bind(internal_idx)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_original_id(
    executor: impl sqlx::PgExecutor<'_>,
    original_problem_id: &str,
) -> Result<Option<Problem>, sqlx::Error> {
    sqlx::query_as::<_, Problem>(&format!(
        "SELECT {COLUMNS} FROM problems WHERE original_problem_id = $1"
    ))
    .bind(original_problem_id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_skill_id(
    executor: impl sqlx::PgExecutor<'_>,
    skill_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Problem>, sqlx::Error> {
    sqlx::query_as::<_, Problem>(&format!(
        "SELECT {COLUMNS}
         FROM problems
         WHERE skill_id = $1
         ORDER BY id
         OFFSET $2
         LIMIT $3"
    ))
    .bind(skill_id)
    .bind(skip.max(0))
    .bind(limit.max(0))
    .fetch_all(executor)
    .await
}

/// Returns an empty list when no skill has the given internal index.
pub async fn list_by_skill_internal_idx(
    pool: &PgPool,
    skill_internal_idx: i32,
    skip: i64,
    limit: i64,
) -> Result<Vec<Problem>, sqlx::Error> {
    let Some(skill) = skills::find_by_internal_idx(pool, skill_internal_idx).await? else {
        return Ok(Vec::new());
    };

    list_by_skill_id(pool, skill.id, skip, limit).await
}

pub async fn create(pool: &PgPool, data: &ProblemCreate) -> Result<Problem, RecordsError> {
    let skill = skills::find_by_internal_idx(pool, data.skill_internal_idx)
        .await?
        .ok_or(RecordsError::SkillNotFound { internal_idx: data.skill_internal_idx })?;

    let problem = sqlx::query_as::<_, Problem>(&format!(
        "INSERT INTO problems (
            internal_idx, original_problem_id, description_placeholder, skill_id, difficulty_mu_q
         ) VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(data.internal_idx)
    .bind(&data.original_problem_id)
    .bind(&data.description_placeholder)
    .bind(skill.id)
    .bind(data.difficulty_mu_q)
    .fetch_one(pool)
    .await?;

    Ok(problem)
}

pub async fn update_difficulty(
    executor: impl sqlx::PgExecutor<'_>,
    internal_idx: i32,
    mu_q: f64,
) -> Result<Option<Problem>, sqlx::Error> {
    sqlx::query_as::<_, Problem>(&format!(
        "UPDATE problems
         SET difficulty_mu_q = $1
         WHERE internal_idx = $2
         RETURNING {COLUMNS}"
    ))
    .bind(mu_q)
    .bind(internal_idx)
    .fetch_optional(executor)
    .await
}
