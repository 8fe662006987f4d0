use serde::Deserialize;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InteractionCreate {
    #[serde(alias = "problem_db_id")]
    #[validate(range(min = 1, message = "problem_id must be positive"))]
    pub problem_id: i64,
    #[serde(alias = "skill_db_id")]
    #[validate(range(min = 1, message = "skill_id must be positive"))]
    pub skill_id: i64,
    pub is_correct: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A row from an external dataset export, keyed by the dataset's own ids.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InteractionCsvRow {
    #[validate(length(min = 1, message = "problem_original_id must not be empty"))]
    pub problem_original_id: String,
    #[validate(length(min = 1, message = "skill_original_id must not be empty"))]
    pub skill_original_id: String,
    pub is_correct: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
