use sqlx::{PgPool, Postgres, QueryBuilder};
use time::PrimitiveDateTime;

use crate::core::time::to_primitive_utc;
use crate::db::models::{Interaction, InteractionDetails, Problem, Skill};
use crate::repositories::errors::RecordsError;
use crate::repositories::{problems, skills, students};
use crate::schemas::{InteractionCreate, InteractionCsvRow};

const COLUMNS: &str = "id, student_id, problem_id, skill_id, is_correct, timestamp";

/// Filters for [`list_for_student`]. All set filters must match.
#[derive(Debug, Clone)]
pub struct InteractionFilter {
    /// `None` or zero returns every matching row.
    pub limit: Option<i64>,
    pub sort_descending: bool,
    pub start_date: Option<PrimitiveDateTime>,
    pub end_date: Option<PrimitiveDateTime>,
    pub skill_id: Option<i64>,
}

impl Default for InteractionFilter {
    fn default() -> Self {
        Self { limit: None, sort_descending: true, start_date: None, end_date: None, skill_id: None }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct InteractionDetailsRow {
    id: i64,
    student_id: i64,
    problem_id: i64,
    skill_id: i64,
    is_correct: bool,
    timestamp: PrimitiveDateTime,
    problem_internal_idx: i32,
    problem_original_id: String,
    problem_description: Option<String>,
    problem_skill_id: i64,
    problem_difficulty_mu_q: f64,
    skill_internal_idx: i32,
    skill_original_id: String,
    skill_name: String,
}

impl From<InteractionDetailsRow> for InteractionDetails {
    fn from(row: InteractionDetailsRow) -> Self {
        Self {
            interaction: Interaction {
                id: row.id,
                student_id: row.student_id,
                problem_id: row.problem_id,
                skill_id: row.skill_id,
                is_correct: row.is_correct,
                timestamp: row.timestamp,
            },
            problem: Problem {
                id: row.problem_id,
                internal_idx: row.problem_internal_idx,
                original_problem_id: row.problem_original_id,
                description_placeholder: row.problem_description,
                skill_id: row.problem_skill_id,
                difficulty_mu_q: row.problem_difficulty_mu_q,
            },
            skill: Skill {
                id: row.skill_id,
                internal_idx: row.skill_internal_idx,
                original_skill_id: row.skill_original_id,
                name: row.skill_name,
            },
        }
    }
}

pub async fn find_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<Option<Interaction>, sqlx::Error> {
    sqlx::query_as::<_, Interaction>(&format!("SELECT {COLUMNS} FROM interactions WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// A student's interactions ordered by timestamp, each loaded together with
/// its problem and skill in a single joined query.
pub async fn list_for_student(
    executor: impl sqlx::PgExecutor<'_>,
    student_id: i64,
    filter: &InteractionFilter,
) -> Result<Vec<InteractionDetails>, sqlx::Error> {
    let mut builder = QueryBuilder::<Postgres>::new(
        "SELECT i.id,
                i.student_id,
                i.problem_id,
                i.skill_id,
                i.is_correct,
                i.timestamp,
                p.internal_idx AS problem_internal_idx,
                p.original_problem_id AS problem_original_id,
                p.description_placeholder AS problem_description,
                p.skill_id AS problem_skill_id,
                p.difficulty_mu_q AS problem_difficulty_mu_q,
                s.internal_idx AS skill_internal_idx,
                s.original_skill_id AS skill_original_id,
                s.name AS skill_name
         FROM interactions i
         JOIN problems p ON p.id = i.problem_id
         JOIN skills s ON s.id = i.skill_id
         WHERE i.student_id = ",
    );
    builder.push_bind(student_id);

    if let Some(start_date) = filter.start_date {
        builder.push(" AND i.timestamp >= ");
        builder.push_bind(start_date);
    }
    if let Some(end_date) = filter.end_date {
        builder.push(" AND i.timestamp <= ");
        builder.push_bind(end_date);
    }
    if let Some(skill_id) = filter.skill_id {
        builder.push(" AND i.skill_id = ");
        builder.push_bind(skill_id);
    }

    if filter.sort_descending {
        builder.push(" ORDER BY i.timestamp DESC, i.id DESC");
    } else {
        builder.push(" ORDER BY i.timestamp ASC, i.id ASC");
    }

    if let Some(limit) = filter.limit.filter(|limit| *limit > 0) {
        builder.push(" LIMIT ");
        builder.push_bind(limit);
    }

    let rows = builder.build_query_as::<InteractionDetailsRow>().fetch_all(executor).await?;
    Ok(rows.into_iter().map(InteractionDetails::from).collect())
}

/// Records an attempt and moves the student's last-interaction marker to the
/// attempt's timestamp, both in one transaction.
///
/// The problem must exist and belong to `data.skill_id`.
pub async fn create(
    pool: &PgPool,
    data: &InteractionCreate,
    student_id: i64,
) -> Result<Interaction, RecordsError> {
    let mut tx = pool.begin().await?;

    let problem = problems::find_by_id(&mut *tx, data.problem_id)
        .await?
        .ok_or(RecordsError::ProblemNotFound { problem_id: data.problem_id })?;

    if problem.skill_id != data.skill_id {
        return Err(RecordsError::SkillMismatch {
            problem_id: data.problem_id,
            skill_id: data.skill_id,
        });
    }

    let timestamp = to_primitive_utc(data.timestamp);

    let interaction = sqlx::query_as::<_, Interaction>(&format!(
        "INSERT INTO interactions (student_id, problem_id, skill_id, is_correct, timestamp)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(student_id)
    .bind(data.problem_id)
    .bind(data.skill_id)
    .bind(data.is_correct)
    .bind(timestamp)
    .fetch_one(&mut *tx)
    .await?;

    students::touch_last_interaction(&mut *tx, student_id, Some(timestamp)).await?;

    tx.commit().await?;

    metrics::counter!("records_interactions_created_total").increment(1);
    tracing::debug!(
        interaction_id = interaction.id,
        student_id,
        problem_id = interaction.problem_id,
        is_correct = interaction.is_correct,
        "Interaction recorded"
    );

    Ok(interaction)
}

/// Import path for rows keyed by external dataset ids.
///
/// Rows whose problem or skill cannot be resolved, or whose problem belongs
/// to a different skill, yield `Ok(None)` so a batch can skip them. Store
/// errors are still returned.
pub async fn create_from_external_row(
    pool: &PgPool,
    row: &InteractionCsvRow,
    student_id: i64,
) -> Result<Option<Interaction>, RecordsError> {
    let Some(problem) = problems::find_by_original_id(pool, &row.problem_original_id).await? else {
        record_skipped_row("unknown_problem", row, student_id);
        return Ok(None);
    };

    let Some(skill) = skills::find_by_original_id(pool, &row.skill_original_id).await? else {
        record_skipped_row("unknown_skill", row, student_id);
        return Ok(None);
    };

    let data = InteractionCreate {
        problem_id: problem.id,
        skill_id: skill.id,
        is_correct: row.is_correct,
        timestamp: row.timestamp,
    };

    match create(pool, &data, student_id).await {
        Ok(interaction) => Ok(Some(interaction)),
        Err(err) if err.is_domain() => {
            record_skipped_row("rejected", row, student_id);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn record_skipped_row(reason: &'static str, row: &InteractionCsvRow, student_id: i64) {
    metrics::counter!("records_import_rows_skipped_total", "reason" => reason).increment(1);
    tracing::debug!(
        student_id,
        reason,
        problem_original_id = %row.problem_original_id,
        skill_original_id = %row.skill_original_id,
        "Skipping interaction row"
    );
}
