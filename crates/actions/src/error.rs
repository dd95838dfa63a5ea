//! Action-level error type.

use thiserror::Error;

use crate::FieldType;

/// Errors raised while interpreting an action kind or its configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The kind string is not part of the action catalog.
    #[error("unknown action kind: '{0}'")]
    UnknownKind(String),

    /// A schema field holds a value of the wrong scalar type.
    #[error("field '{field}' must be {expected}")]
    FieldType {
        field: String,
        expected: FieldType,
    },
}
