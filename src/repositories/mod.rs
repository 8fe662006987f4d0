//! Records gateway: one module per table plus the aggregate queries.
//!
//! Single-statement operations accept any `sqlx::PgExecutor`, so callers can
//! pass the pool or an open transaction. Operations that write more than one
//! statement take the pool and manage their own transaction.

pub mod classes;
pub mod errors;
pub mod health;
pub mod interactions;
pub mod problems;
pub mod skills;
pub mod statistics;
pub mod students;
pub mod teachers;

pub use errors::{ErrorKind, RecordsError};
