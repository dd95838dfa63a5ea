//! Non-blocking checks on a workflow.
//!
//! Unlike [`crate::validate`], these never prevent saving: the workflow
//! service accepts such workflows, they just tend to misbehave at run time.

use std::fmt;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use actions::ActionKind;

use crate::models::{EmailFilters, Trigger, Workflow};
use crate::recipients::VariableSource;
use crate::variables::{extract_variables, is_runtime_variable, AI_CONTENT};

const RECIPIENT_LIST_FIELD: &str = "recipientListId";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum LintWarning {
    /// An email filter uses syntax this crate's regex engine does not parse
    /// (lookaround, backreferences); the service may still accept it.
    UncheckedFilterPattern { field: String, message: String },
    /// `{{ai_content}}` is used before any action generates it.
    AiContentWithoutGenerator { index: usize },
    /// A placeholder sits in a field that is sent verbatim.
    PlaceholderInPlainField { index: usize, field: String },
    /// A bulk email has no recipient list selected.
    MissingRecipientList { index: usize },
    /// A bulk email references a variable its recipient list lacks.
    UnresolvedListVariable { index: usize, variable: String },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UncheckedFilterPattern { field, message } => write!(
                f,
                "email filter '{field}' could not be checked locally: {message}"
            ),
            Self::AiContentWithoutGenerator { index } => write!(
                f,
                "action {index} uses {{{{{AI_CONTENT}}}}} but no earlier action generates AI content"
            ),
            Self::PlaceholderInPlainField { index, field } => write!(
                f,
                "action {index}: field '{field}' does not support variables"
            ),
            Self::MissingRecipientList { index } => {
                write!(f, "action {index}: no recipient list selected")
            }
            Self::UnresolvedListVariable { index, variable } => write!(
                f,
                "action {index}: recipient list has no '{variable}' column"
            ),
        }
    }
}

/// Collect warnings for `workflow`, in action order.
pub fn lint(workflow: &Workflow, lists: &dyn VariableSource) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut ai_content_available = false;

    if let Trigger::EmailReceived { filters } = &workflow.trigger {
        check_filters(filters, &mut warnings);
    }

    for (index, action) in workflow.actions.iter().enumerate() {
        let schema = actions::schema_for(&action.kind);

        let mut uses_ai_content = false;
        for (field, text) in action.text_fields() {
            let vars = extract_variables(text);
            if vars.is_empty() {
                continue;
            }
            uses_ai_content |= vars.contains(AI_CONTENT);

            if let Some(spec) = schema.and_then(|s| s.field(field)) {
                if !spec.templated {
                    warnings.push(LintWarning::PlaceholderInPlainField {
                        index,
                        field: field.to_owned(),
                    });
                }
            }
        }

        if uses_ai_content && !ai_content_available {
            warnings.push(LintWarning::AiContentWithoutGenerator { index });
        }

        if action.kind == ActionKind::SendBulkEmail {
            check_bulk_email(index, workflow, lists, &mut warnings);
        }

        ai_content_available |= action.kind.produces_ai_content();
    }

    debug!("lint produced {} warnings", warnings.len());
    warnings
}

fn check_filters(filters: &EmailFilters, warnings: &mut Vec<LintWarning>) {
    for (field, pattern) in [
        ("fromPattern", &filters.from_pattern),
        ("subjectPattern", &filters.subject_pattern),
    ] {
        if let Err(e) = Regex::new(pattern) {
            warnings.push(LintWarning::UncheckedFilterPattern {
                field: field.to_owned(),
                message: e.to_string(),
            });
        }
    }
}

fn check_bulk_email(
    index: usize,
    workflow: &Workflow,
    lists: &dyn VariableSource,
    warnings: &mut Vec<LintWarning>,
) {
    let action = &workflow.actions[index];
    let list_id = action
        .config
        .get(RECIPIENT_LIST_FIELD)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or_default();

    if list_id.is_empty() {
        warnings.push(LintWarning::MissingRecipientList { index });
        return;
    }

    let Some(columns) = lists.list_variables(list_id) else {
        return;
    };

    let referenced = action
        .text_fields()
        .filter(|(field, _)| *field != RECIPIENT_LIST_FIELD)
        .flat_map(|(_, text)| extract_variables(text));
    let mut missing: Vec<String> = referenced
        .filter(|v| !is_runtime_variable(v) && !columns.contains(v))
        .collect();
    missing.sort();
    missing.dedup();

    warnings.extend(
        missing
            .into_iter()
            .map(|variable| LintWarning::UnresolvedListVariable { index, variable }),
    );
}
