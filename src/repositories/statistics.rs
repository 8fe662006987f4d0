use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::repositories::students;
use crate::schemas::{ClassDashboardEntry, StudentStatistics};

/// A negative `limit` is clamped to zero.
pub const DEFAULT_DASHBOARD_LIMIT: i64 = 5;

#[derive(Debug, sqlx::FromRow)]
struct InteractionTotalsRow {
    total: i64,
    correct: i64,
    skills_practiced: i64,
    problems_attempted: i64,
    last_activity: Option<PrimitiveDateTime>,
}

/// Accuracy and activity summary for one student, or `None` if the student
/// does not exist.
pub async fn student_statistics(
    pool: &PgPool,
    student_id: i64,
) -> Result<Option<StudentStatistics>, sqlx::Error> {
    if students::find_by_id(pool, student_id).await?.is_none() {
        return Ok(None);
    }

    let totals = sqlx::query_as::<_, InteractionTotalsRow>(
        "SELECT COUNT(*) AS total,
                COUNT(*) FILTER (WHERE is_correct) AS correct,
                COUNT(DISTINCT skill_id) AS skills_practiced,
                COUNT(DISTINCT problem_id) AS problems_attempted,
                MAX(timestamp) AS last_activity
         FROM interactions
         WHERE student_id = $1",
    )
    .bind(student_id)
    .fetch_one(pool)
    .await?;

    Ok(Some(StudentStatistics::from_counts(
        totals.total,
        totals.correct,
        totals.skills_practiced,
        totals.problems_attempted,
        totals.last_activity,
    )))
}

/// The teacher's most recently created classes with their active student
/// counts. Classes without students are included with a count of zero.
pub async fn classes_for_dashboard(
    executor: impl sqlx::PgExecutor<'_>,
    teacher_id: i64,
    limit: i64,
) -> Result<Vec<ClassDashboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, ClassDashboardEntry>(
        "SELECT c.id,
                c.name,
                COALESCE(counts.student_count, 0) AS student_count
         FROM classes c
         LEFT JOIN (
             SELECT class_id, COUNT(*) AS student_count
             FROM students
             WHERE is_deleted = FALSE
             GROUP BY class_id
         ) counts ON counts.class_id = c.id
         WHERE c.teacher_id = $1
         ORDER BY c.created_at DESC, c.id DESC
         LIMIT $2",
    )
    .bind(teacher_id)
    .bind(limit.max(0))
    .fetch_all(executor)
    .await
}
