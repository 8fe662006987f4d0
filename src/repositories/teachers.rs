use sqlx::PgPool;

use crate::core::security;
use crate::db::models::Teacher;
use crate::repositories::errors::RecordsError;

/// Page size for list calls. Negative `skip` or `limit` values are clamped to zero.
pub const DEFAULT_LIMIT: i64 = 100;

const COLUMNS: &str = "id, username, hashed_password";

pub async fn find_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<Option<Teacher>, sqlx::Error> {
    sqlx::query_as::<_, Teacher>(&format!("SELECT {COLUMNS} FROM teachers WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_username(
    executor: impl sqlx::PgExecutor<'_>,
    username: &str,
) -> Result<Option<Teacher>, sqlx::Error> {
    sqlx::query_as::<_, Teacher>(&format!("SELECT {COLUMNS} FROM teachers WHERE username = $1"))
        .bind(username)
        .fetch_optional(executor)
        .await
}

pub async fn list(
    executor: impl sqlx::PgExecutor<'_>,
    skip: i64,
    limit: i64,
) -> Result<Vec<Teacher>, sqlx::Error> {
    sqlx::query_as::<_, Teacher>(&format!("SELECT {COLUMNS} FROM teachers ORDER BY id OFFSET $1 LIMIT $2"))
        .bind(skip.max(0))
        .bind(limit.max(0))
        .fetch_all(executor)
        .await
}

/// Duplicate usernames surface as the store's unique-constraint error.
pub async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    username: &str,
    password: &str,
) -> Result<Teacher, RecordsError> {
    let hashed_password = security::hash_password(password)?;

    let teacher = sqlx::query_as::<_, Teacher>(&format!(
        "INSERT INTO teachers (username, hashed_password)
         VALUES ($1, $2)
         RETURNING {COLUMNS}"
    ))
    .bind(username)
    .bind(hashed_password)
    .fetch_one(executor)
    .await?;

    tracing::info!(teacher_id = teacher.id, "Teacher created");
    Ok(teacher)
}

pub async fn update_password(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
    hashed_password: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE teachers SET hashed_password = $1 WHERE id = $2")
        .bind(hashed_password)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Looks the teacher up by username and checks the password against the
/// stored hash. Unknown usernames and wrong passwords both yield `None`.
pub async fn authenticate(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<Option<Teacher>, RecordsError> {
    let Some(teacher) = find_by_username(pool, username).await? else {
        return Ok(None);
    };

    if security::verify_password(password, &teacher.hashed_password)? {
        Ok(Some(teacher))
    } else {
        Ok(None)
    }
}
