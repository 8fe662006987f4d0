use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: PrimitiveDateTime,
    pub teacher_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub class_id: i64,
    pub is_deleted: bool,
    pub deleted_at: Option<PrimitiveDateTime>,
    pub last_interaction_update_timestamp: PrimitiveDateTime,
}

impl Student {
    /// Soft-deleted students stay in storage but are hidden from class listings.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub internal_idx: i32,
    pub original_skill_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Problem {
    pub id: i64,
    pub internal_idx: i32,
    pub original_problem_id: String,
    pub description_placeholder: Option<String>,
    pub skill_id: i64,
    pub difficulty_mu_q: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interaction {
    pub id: i64,
    pub student_id: i64,
    pub problem_id: i64,
    pub skill_id: i64,
    pub is_correct: bool,
    pub timestamp: PrimitiveDateTime,
}

/// An interaction together with the problem and skill it refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionDetails {
    #[serde(flatten)]
    pub interaction: Interaction,
    pub problem: Problem,
    pub skill: Skill,
}
