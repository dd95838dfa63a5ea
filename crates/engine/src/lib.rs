//! `engine` crate — workflow models, variable handling, templates, validation
//! and request building for the email-automation workflow builder.
//!
//! Everything here is synchronous and pure: the workflow service owns
//! storage and execution, this crate only prepares and checks what is sent.

pub mod models;
pub mod error;
pub mod variables;
pub mod samples;
pub mod draft;
pub mod templates;
pub mod validate;
pub mod lint;
pub mod recipients;
pub mod payload;

pub use models::{Action, DayOfWeek, EmailFilters, Frequency, Schedule, Trigger, Workflow, WorkflowStatus};
pub use error::{EngineError, ValidationError};
pub use variables::{extract_variables, render, required_variables, workflow_variables, AI_CONTENT};
pub use samples::{generate_sample_data, sample_value_for, Clock, FixedClock, SystemClock};
pub use templates::{apply_template, find_template, templates, Template};
pub use validate::validate;
pub use lint::{lint, LintWarning};
pub use recipients::{NoLists, RecipientList, VariableSource};
pub use payload::{build_execution_payload, build_save_payload, parse_variables, ExecutionRequest, WorkflowRequest};
