//! `actions` crate — the catalog of workflow action kinds.
//!
//! Every action a workflow can run is an [`ActionKind`] whose configuration
//! shape is described by an [`ActionSchema`] in the static [`SCHEMAS`] table.
//! The engine crate builds, edits and validates actions through this table.

pub mod config;
pub mod error;
pub mod kind;
pub mod schema;

pub use config::{ActionConfig, ConfigValue};
pub use error::ActionError;
pub use kind::{ActionKind, Direction};
pub use schema::{default_config_for, schema_for, ActionSchema, FieldDefault, FieldSpec, FieldType, SCHEMAS};
