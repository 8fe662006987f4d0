use time::PrimitiveDateTime;

use crate::core::time::primitive_now_utc;
use crate::db::models::Student;
use crate::schemas::StudentCreate;

/// Page size for list calls. Negative `skip` or `limit` values are clamped to zero.
pub const DEFAULT_LIMIT: i64 = 100;

pub(crate) const COLUMNS: &str = "\
    id, first_name, last_name, class_id, is_deleted, deleted_at, \
    last_interaction_update_timestamp";

pub async fn find_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!("SELECT {COLUMNS} FROM students WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Active students of a class; soft-deleted rows are skipped.
pub async fn list_by_class(
    executor: impl sqlx::PgExecutor<'_>,
    class_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "SELECT {COLUMNS}
         FROM students
         WHERE class_id = $1
           AND is_deleted = FALSE
         ORDER BY id
         OFFSET $2
         LIMIT $3"
    ))
    .bind(class_id)
    .bind(skip.max(0))
    .bind(limit.max(0))
    .fetch_all(executor)
    .await
}

/// Case-insensitive substring match on first or last name.
///
/// Soft-deleted students are included so they can still be found and
/// recovered.
pub async fn search_in_class(
    executor: impl sqlx::PgExecutor<'_>,
    class_id: i64,
    query: &str,
    skip: i64,
    limit: i64,
) -> Result<Vec<Student>, sqlx::Error> {
    let pattern = format!("%{}%", escape_like(query));

    sqlx::query_as::<_, Student>(&format!(
        "SELECT {COLUMNS}
         FROM students
         WHERE class_id = $1
           AND (first_name ILIKE $2 ESCAPE '\\' OR last_name ILIKE $2 ESCAPE '\\')
         ORDER BY id
         OFFSET $3
         LIMIT $4"
    ))
    .bind(class_id)
    .bind(pattern)
    .bind(skip.max(0))
    .bind(limit.max(0))
    .fetch_all(executor)
    .await
}

pub async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    data: &StudentCreate,
    class_id: i64,
) -> Result<Student, sqlx::Error> {
    let student = sqlx::query_as::<_, Student>(&format!(
        "INSERT INTO students (first_name, last_name, class_id, last_interaction_update_timestamp)
         VALUES ($1, $2, $3, $4)
         RETURNING {COLUMNS}"
    ))
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(class_id)
    .bind(primitive_now_utc())
    .fetch_one(executor)
    .await?;

    tracing::info!(student_id = student.id, class_id, "Student created");
    Ok(student)
}

pub async fn update(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
    data: &StudentCreate,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "UPDATE students
         SET first_name = $1,
             last_name = $2
         WHERE id = $3
         RETURNING {COLUMNS}"
    ))
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Sets the last-interaction marker, defaulting to the current time.
pub async fn touch_last_interaction(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
    timestamp: Option<PrimitiveDateTime>,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "UPDATE students
         SET last_interaction_update_timestamp = $1
         WHERE id = $2
         RETURNING {COLUMNS}"
    ))
    .bind(timestamp.unwrap_or_else(primitive_now_utc))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn soft_delete(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<Option<Student>, sqlx::Error> {
    let student = sqlx::query_as::<_, Student>(&format!(
        "UPDATE students
         SET is_deleted = TRUE,
             deleted_at = $1
         WHERE id = $2
         RETURNING {COLUMNS}"
    ))
    .bind(primitive_now_utc())
    .bind(id)
    .fetch_optional(executor)
    .await?;

    if let Some(student) = &student {
        metrics::counter!("records_students_soft_deleted_total").increment(1);
        tracing::info!(student_id = student.id, class_id = student.class_id, "Student soft-deleted");
    }

    Ok(student)
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_quotes_wildcards() {
        assert_eq!(escape_like("an%na_"), "an\\%na\\_");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("Müller"), "Müller");
    }
}
