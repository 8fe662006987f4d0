use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClassCreate {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One row of the teacher dashboard: a class and its active student count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ClassDashboardEntry {
    pub id: i64,
    pub name: String,
    pub student_count: i64,
}
