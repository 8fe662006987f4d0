use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SkillCreate {
    #[validate(range(min = 0, message = "internal_idx must be non-negative"))]
    pub internal_idx: i32,
    #[validate(length(min = 1, message = "original_skill_id must not be empty"))]
    pub original_skill_id: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProblemCreate {
    #[validate(range(min = 0, message = "internal_idx must be non-negative"))]
    pub internal_idx: i32,
    #[validate(length(min = 1, message = "original_problem_id must not be empty"))]
    pub original_problem_id: String,
    #[serde(default)]
    pub description_placeholder: Option<String>,
    #[validate(range(min = 0, message = "skill_internal_idx must be non-negative"))]
    pub skill_internal_idx: i32,
    #[serde(default)]
    pub difficulty_mu_q: f64,
}
