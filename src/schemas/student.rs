use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use validator::Validate;

use crate::core::time::format_primitive;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudentCreate {
    #[validate(length(min = 1, max = 255, message = "first_name must be 1-255 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "last_name must be 1-255 characters"))]
    pub last_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Active,
    NoActivity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentStatistics {
    pub total_interactions: i64,
    pub correct_interactions: i64,
    pub incorrect_interactions: i64,
    pub accuracy: f64,
    pub skills_practiced: i64,
    pub problems_attempted: i64,
    pub last_activity: Option<String>,
    pub activity_status: ActivityStatus,
}

impl StudentStatistics {
    pub(crate) fn from_counts(
        total: i64,
        correct: i64,
        skills_practiced: i64,
        problems_attempted: i64,
        last_activity: Option<PrimitiveDateTime>,
    ) -> Self {
        let accuracy = if total > 0 {
            round_to_hundredths(correct as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        let activity_status = if last_activity.is_some() {
            ActivityStatus::Active
        } else {
            ActivityStatus::NoActivity
        };

        Self {
            total_interactions: total,
            correct_interactions: correct,
            incorrect_interactions: total - correct,
            accuracy,
            skills_practiced,
            problems_attempted,
            last_activity: last_activity.map(format_primitive),
            activity_status,
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
