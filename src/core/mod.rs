pub(crate) mod bootstrap;
pub mod config;
pub mod security;
pub(crate) mod state;
pub(crate) mod telemetry;
pub mod time;
