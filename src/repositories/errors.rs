use thiserror::Error;

use crate::core::security::SecurityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Conflict,
    NotFound,
    Validation,
    Store,
    Security,
}

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("class {class_id} cannot be deleted: remove its {active_students} active students first")]
    ClassHasActiveStudents { class_id: i64, active_students: i64 },
    #[error("skill with internal_idx {internal_idx} not found")]
    SkillNotFound { internal_idx: i32 },
    #[error("problem {problem_id} not found")]
    ProblemNotFound { problem_id: i64 },
    #[error("problem {problem_id} does not belong to skill {skill_id}")]
    SkillMismatch { problem_id: i64, skill_id: i64 },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Security(#[from] SecurityError),
}

impl RecordsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordsError::ClassHasActiveStudents { .. } => ErrorKind::Conflict,
            RecordsError::SkillNotFound { .. } | RecordsError::ProblemNotFound { .. } => {
                ErrorKind::NotFound
            }
            RecordsError::SkillMismatch { .. } => ErrorKind::Validation,
            RecordsError::Database(_) => ErrorKind::Store,
            RecordsError::Security(_) => ErrorKind::Security,
        }
    }

    /// True for failures caused by the caller's input rather than the store.
    pub fn is_domain(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conflict | ErrorKind::NotFound | ErrorKind::Validation)
    }
}
