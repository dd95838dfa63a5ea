//! Workflow validation — run this before saving a workflow.
//!
//! Rules enforced, in this order:
//! 1. The name must be non-empty.
//! 2. The description must be non-empty.
//! 3. There must be at least one action.
//! 4. The trigger must be well-formed: weekly schedules carry a day (and
//!    only weekly ones do) and times are `HH:MM`. Email filter patterns are
//!    not compiled here: the service matches them with its own regex dialect,
//!    so [`crate::lint::lint`] only warns about patterns this crate cannot parse.
//! 5. Every action kind is in the catalog and its schema fields hold values
//!    of the declared type.
//!
//! All violations are collected; nothing short-circuits.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

use crate::models::{Frequency, Schedule, Trigger, Workflow};
use crate::ValidationError;

static TIME_OF_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

/// Check that `workflow` can be submitted.
///
/// # Errors
/// Every [`ValidationError`] found, in rule order.
#[instrument(skip_all, fields(workflow = %workflow.name))]
pub fn validate(workflow: &Workflow) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // -----------------------------------------------------------------------
    // 1–3. Required fields
    // -----------------------------------------------------------------------
    if workflow.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if workflow.description.trim().is_empty() {
        errors.push(ValidationError::EmptyDescription);
    }
    if workflow.actions.is_empty() {
        errors.push(ValidationError::NoActions);
    }

    // -----------------------------------------------------------------------
    // 4. Trigger
    // -----------------------------------------------------------------------
    match &workflow.trigger {
        Trigger::Schedule { schedule } => check_schedule(schedule, &mut errors),
        Trigger::EmailReceived { .. } | Trigger::Manual => {}
    }

    // -----------------------------------------------------------------------
    // 5. Actions
    // -----------------------------------------------------------------------
    for (index, action) in workflow.actions.iter().enumerate() {
        let Some(schema) = actions::schema_for(&action.kind) else {
            errors.push(ValidationError::UnknownActionKind {
                index,
                kind: action.kind.to_string(),
            });
            continue;
        };

        if let Err(field_errors) = schema.check(&action.config) {
            errors.extend(field_errors.into_iter().map(|e| match e {
                actions::ActionError::FieldType { field, expected } => {
                    ValidationError::InvalidFieldType { index, field, expected }
                }
                actions::ActionError::UnknownKind(kind) => {
                    ValidationError::UnknownActionKind { index, kind }
                }
            }));
        }
    }

    if errors.is_empty() {
        debug!("workflow is valid");
        Ok(())
    } else {
        debug!("workflow has {} validation errors", errors.len());
        Err(errors)
    }
}

fn check_schedule(schedule: &Schedule, errors: &mut Vec<ValidationError>) {
    match (schedule.frequency, schedule.day_of_week) {
        (Frequency::Weekly, None) => errors.push(ValidationError::MissingDayOfWeek),
        (Frequency::Weekly, Some(_)) | (_, None) => {}
        (_, Some(_)) => errors.push(ValidationError::UnexpectedDayOfWeek),
    }

    if !TIME_OF_DAY.is_match(&schedule.time) {
        errors.push(ValidationError::InvalidTime(schedule.time.clone()));
    }
}
