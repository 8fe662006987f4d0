//! Inbound payloads and aggregate response shapes.
//!
//! Create payloads carry `validator` rules for the request layer; the
//! repositories assume they have already been checked.

pub mod catalog;
pub mod class;
pub mod interaction;
pub mod student;
pub mod teacher;

pub use catalog::{ProblemCreate, SkillCreate};
pub use class::{ClassCreate, ClassDashboardEntry};
pub use interaction::{InteractionCreate, InteractionCsvRow};
pub use student::{ActivityStatus, StudentCreate, StudentStatistics};
pub use teacher::TeacherCreate;
