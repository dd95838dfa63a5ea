//! Request bodies for the workflow service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::{Action, Trigger, Workflow, WorkflowStatus};
use crate::EngineError;

/// Body of a manual execution request.
///
/// `data: null` means "run without substitutions"; the service treats an
/// empty object the same way, so an empty variable map is always sent as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    pub workflow_id: String,
    pub data: Option<BTreeMap<String, String>>,
}

/// Body of a create/update workflow request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRequest {
    pub agent_id: String,
    pub name: String,
    pub description: String,
    pub trigger_config: Trigger,
    pub actions: Vec<Action>,
    pub status: WorkflowStatus,
}

/// Build the execution request for a saved workflow.
///
/// `supplied` is passed through untouched; samples are not merged in.
///
/// # Errors
/// [`EngineError::MissingWorkflowId`] if the workflow was never saved.
pub fn build_execution_payload(
    workflow: &Workflow,
    supplied: BTreeMap<String, String>,
) -> Result<ExecutionRequest, EngineError> {
    let workflow_id = workflow.id.clone().ok_or(EngineError::MissingWorkflowId)?;
    debug!("execution request for '{}' with {} variables", workflow_id, supplied.len());

    Ok(ExecutionRequest {
        workflow_id,
        data: (!supplied.is_empty()).then_some(supplied),
    })
}

/// Build the create/update body for `workflow` under `agent_id`.
pub fn build_save_payload(workflow: &Workflow, agent_id: impl Into<String>) -> WorkflowRequest {
    WorkflowRequest {
        agent_id: agent_id.into(),
        name: workflow.name.clone(),
        description: workflow.description.clone(),
        trigger_config: workflow.trigger.clone(),
        actions: workflow.actions.clone(),
        status: workflow.status,
    }
}

/// Parse user-entered execution variables.
///
/// Blank input means no variables. Otherwise the input must be a JSON object
/// whose values are strings, numbers or booleans; non-string scalars are
/// converted to their JSON text.
///
/// # Errors
/// [`EngineError::InvalidJson`] for unparsable input or a non-conforming shape.
pub fn parse_variables(raw: &str) -> Result<BTreeMap<String, String>, EngineError> {
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|e| EngineError::InvalidJson(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(EngineError::InvalidJson("expected a JSON object of variables".into()));
    };

    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            Value::Number(n) => Ok((key, n.to_string())),
            Value::Bool(b) => Ok((key, b.to_string())),
            _ => Err(EngineError::InvalidJson(format!(
                "value of '{key}' must be a string, number or boolean"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actions::ActionKind;
    use serde_json::json;

    fn saved() -> Workflow {
        Workflow::new("Reminders", "Weekly reminders", Trigger::Manual)
            .add_action(ActionKind::SendEmail)
            .with_id("wf_7")
    }

    #[test]
    fn empty_variables_become_null() {
        let request = build_execution_payload(&saved(), BTreeMap::new()).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "workflowId": "wf_7", "data": null })
        );
    }

    #[test]
    fn supplied_variables_pass_through_unchanged() {
        let vars = BTreeMap::from([("recipient".to_string(), "a@b.com".to_string())]);
        let request = build_execution_payload(&saved(), vars.clone()).unwrap();
        assert_eq!(request.data, Some(vars));
    }

    #[test]
    fn unsaved_workflow_cannot_be_executed() {
        let mut workflow = saved();
        workflow.id = None;
        assert_eq!(
            build_execution_payload(&workflow, BTreeMap::new()),
            Err(EngineError::MissingWorkflowId)
        );
    }

    #[test]
    fn save_payload_matches_the_service_shape() {
        let request = build_save_payload(&saved(), "agent_3");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "agentId": "agent_3",
                "name": "Reminders",
                "description": "Weekly reminders",
                "triggerConfig": { "type": "manual" },
                "actions": [{
                    "type": "send_email",
                    "config": { "body": "{{ai_content}}", "isHtml": false, "subject": "", "to": "" }
                }],
                "status": "active"
            })
        );
    }

    #[test]
    fn blank_input_is_no_variables() {
        assert!(parse_variables("  \n").unwrap().is_empty());
    }

    #[test]
    fn scalars_are_stringified() {
        let vars = parse_variables(r#"{"recipient": "a@b.com", "week": 3, "urgent": true}"#).unwrap();
        assert_eq!(vars["recipient"], "a@b.com");
        assert_eq!(vars["week"], "3");
        assert_eq!(vars["urgent"], "true");
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(parse_variables("{recipient:"), Err(EngineError::InvalidJson(_))));
        assert!(matches!(parse_variables("[1, 2]"), Err(EngineError::InvalidJson(_))));
        assert!(matches!(
            parse_variables(r#"{"nested": {"a": 1}}"#),
            Err(EngineError::InvalidJson(msg)) if msg.contains("nested")
        ));
    }
}
