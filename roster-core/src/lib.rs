//! # roster-core
//!
//! Domain types and shared contracts for the Roster candidate importer:
//! the [`types::Record`] shape, the required-column schema, and the
//! operator config file at `~/.roster/config.yaml`.

pub mod config;
pub mod error;
pub mod schema;
pub mod types;

pub use error::{ConfigError, SchemaError};
pub use types::{CandidateName, Record};
