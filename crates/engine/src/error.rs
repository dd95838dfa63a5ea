//! Engine-level error types.

use thiserror::Error;

use actions::FieldType;

/// Errors produced by workflow operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An action-list mutator got an index outside `0..len`.
    #[error("action index {index} is out of range (workflow has {len} actions)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Execution variables were not a JSON object of scalar values.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The workflow has not been saved, so the service cannot run it.
    #[error("workflow has no id; save it before executing")]
    MissingWorkflowId,

    #[error("unknown template: '{0}'")]
    UnknownTemplate(String),
}

/// One reason a workflow cannot be submitted.
///
/// [`crate::validate`] returns every violation it finds, in check order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("workflow name is required")]
    EmptyName,

    #[error("workflow description is required")]
    EmptyDescription,

    #[error("workflow must have at least one action")]
    NoActions,

    #[error("weekly schedules must specify a day of the week")]
    MissingDayOfWeek,

    #[error("day of the week is only allowed on weekly schedules")]
    UnexpectedDayOfWeek,

    #[error("schedule time '{0}' is not a valid HH:MM time")]
    InvalidTime(String),

    #[error("action {index} has unknown type '{kind}'")]
    UnknownActionKind { index: usize, kind: String },

    #[error("action {index}: field '{field}' must be {expected}")]
    InvalidFieldType {
        index: usize,
        field: String,
        expected: FieldType,
    },
}
