use sqlx::PgPool;

use crate::db::models::Class;
use crate::repositories::errors::RecordsError;
use crate::schemas::ClassCreate;

/// Page size for list calls. Negative `skip` or `limit` values are clamped to zero.
pub const DEFAULT_LIMIT: i64 = 100;

const COLUMNS: &str = "id, name, description, created_at, teacher_id";

pub async fn find_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<Option<Class>, sqlx::Error> {
    sqlx::query_as::<_, Class>(&format!("SELECT {COLUMNS} FROM classes WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn list_by_teacher(
    executor: impl sqlx::PgExecutor<'_>,
    teacher_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Class>, sqlx::Error> {
    sqlx::query_as::<_, Class>(&format!(
        "SELECT {COLUMNS}
         FROM classes
         WHERE teacher_id = $1
         ORDER BY id
         OFFSET $2
         LIMIT $3"
    ))
    .bind(teacher_id)
    .bind(skip.max(0))
    .bind(limit.max(0))
    .fetch_all(executor)
    .await
}

pub async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    data: &ClassCreate,
    teacher_id: i64,
) -> Result<Class, sqlx::Error> {
    let class = sqlx::query_as::<_, Class>(&format!(
        "INSERT INTO classes (name, description, created_at, teacher_id)
         VALUES ($1, $2, $3, $4)
         RETURNING {COLUMNS}"
    ))
    .bind(&data.name)
    .bind(&data.description)
    .bind(crate::core::time::primitive_now_utc())
    .bind(teacher_id)
    .fetch_one(executor)
    .await?;

    tracing::info!(class_id = class.id, teacher_id, "Class created");
    Ok(class)
}

/// Overwrites name and description; every other column is left alone.
pub async fn update(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
    data: &ClassCreate,
) -> Result<Option<Class>, sqlx::Error> {
    sqlx::query_as::<_, Class>(&format!(
        "UPDATE classes
         SET name = $1,
             description = $2
         WHERE id = $3
         RETURNING {COLUMNS}"
    ))
    .bind(&data.name)
    .bind(&data.description)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Hard-deletes a class once it has no active students left.
///
/// Soft-deleted students of the class are removed in the same transaction,
/// which also cascades to their interactions. Returns the deleted row, or
/// `None` if the class did not exist.
pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Class>, RecordsError> {
    let mut tx = pool.begin().await?;

    let class = sqlx::query_as::<_, Class>(&format!(
        "SELECT {COLUMNS} FROM classes WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(class) = class else {
        return Ok(None);
    };

    let active_students: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM students WHERE class_id = $1 AND is_deleted = FALSE",
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    if active_students > 0 {
        tracing::debug!(class_id = id, active_students, "Refusing to delete class");
        return Err(RecordsError::ClassHasActiveStudents { class_id: id, active_students });
    }

    let purged = sqlx::query("DELETE FROM students WHERE class_id = $1 AND is_deleted = TRUE")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM classes WHERE id = $1").bind(id).execute(&mut *tx).await?;

    tx.commit().await?;

    metrics::counter!("records_classes_deleted_total").increment(1);
    tracing::info!(class_id = id, purged_students = purged, "Class deleted");
    Ok(Some(class))
}
