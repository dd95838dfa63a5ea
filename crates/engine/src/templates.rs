//! Built-in workflow templates.
//!
//! The catalog is a process-wide constant. Applying a template clones its
//! action list, so editing the resulting draft never changes the catalog.

use once_cell::sync::Lazy;
use tracing::info;

use actions::{ActionKind, ConfigValue};

use crate::models::{Action, DayOfWeek, Frequency, Trigger, Workflow, WorkflowStatus};
use crate::EngineError;

/// A predefined trigger + action sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Stable slug used to look the template up.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub trigger: Trigger,
    pub actions: Vec<Action>,
}

/// Default action of `kind` with some fields overridden.
fn action(kind: ActionKind, overrides: &[(&str, ConfigValue)]) -> Action {
    let mut action = Action::new(kind);
    action
        .config
        .extend(overrides.iter().map(|(k, v)| ((*k).to_owned(), v.clone())));
    action
}

static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    vec![
        Template {
            id: "daily-ai-newsletter",
            name: "Daily AI Newsletter",
            description: "Generate a short newsletter every morning and email it out.",
            trigger: Trigger::schedule(Frequency::Daily, "08:00", None),
            actions: vec![
                action(
                    ActionKind::GenerateAiContent,
                    &[(
                        "prompt",
                        "Write a brief, upbeat newsletter for {{date}} that highlights our progress toward this goal: {{company_goal}}".into(),
                    )],
                ),
                action(
                    ActionKind::SendEmail,
                    &[("subject", "Daily Newsletter - {{date}}".into())],
                ),
            ],
        },
        Template {
            id: "smart-auto-reply",
            name: "Smart Auto-Reply",
            description: "Answer student questions with an AI-drafted reply and label the thread.",
            trigger: Trigger::email_received("", "(?i)(question|help|assignment)"),
            actions: vec![
                action(ActionKind::GenerateAiReply, &[]),
                action(ActionKind::ReplyToEmail, &[]),
                action(ActionKind::AddLabel, &[("label", "Auto-Replied".into())]),
            ],
        },
        Template {
            id: "weekly-class-update",
            name: "Weekly Class Update",
            description: "Send every student on a list a personalized weekly course summary.",
            trigger: Trigger::schedule(Frequency::Weekly, "16:00", Some(DayOfWeek::Friday)),
            actions: vec![
                action(
                    ActionKind::GenerateAiContent,
                    &[(
                        "prompt",
                        "Summarize this week in {{course_name}} for students and remind them that {{assignment_name}} is due {{due_date}}".into(),
                    )],
                ),
                action(
                    ActionKind::SendBulkEmail,
                    &[
                        ("subject", "{{course_name}}: your weekly update".into()),
                        ("body", "Hi {{first_name}},\n\n{{ai_content}}".into()),
                    ],
                ),
            ],
        },
        Template {
            id: "forward-urgent",
            name: "Forward Urgent Emails",
            description: "Label urgent messages and forward them to the front office.",
            trigger: Trigger::email_received("", "(?i)urgent"),
            actions: vec![
                action(ActionKind::AddLabel, &[("label", "Urgent".into())]),
                action(
                    ActionKind::ForwardEmail,
                    &[
                        ("to", "office@example.com".into()),
                        ("note", "Urgent message from {{sender}}: {{email_subject}}".into()),
                    ],
                ),
                action(ActionKind::MarkAsUnread, &[]),
            ],
        },
    ]
});

/// All built-in templates.
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

/// Look a template up by its slug.
pub fn find_template(id: &str) -> Result<&'static Template, EngineError> {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| EngineError::UnknownTemplate(id.to_owned()))
}

/// A fresh, unsaved, active workflow built from `template`.
pub fn apply_template(template: &Template) -> Workflow {
    info!("creating workflow from template '{}'", template.id);
    Workflow {
        id: None,
        name: template.name.to_owned(),
        description: template.description.to_owned(),
        trigger: template.trigger.clone(),
        actions: template.actions.clone(),
        status: WorkflowStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    #[test]
    fn every_template_is_valid() {
        for template in templates() {
            let workflow = apply_template(template);
            assert_eq!(validate(&workflow), Ok(()), "{}", template.id);
        }
    }

    #[test]
    fn template_ids_are_unique() {
        let mut ids: Vec<&str> = templates().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), templates().len());
    }

    #[test]
    fn applied_workflow_is_detached_from_the_catalog() {
        let template = find_template("smart-auto-reply").unwrap();
        let mut workflow = apply_template(template);
        assert_eq!(workflow.actions, template.actions);

        workflow.actions[2].config.insert("label".into(), "Edited".into());
        workflow.actions.pop();

        let pristine = find_template("smart-auto-reply").unwrap();
        assert_eq!(pristine.actions.len(), 3);
        assert_eq!(pristine.actions[2].config["label"], ConfigValue::from("Auto-Replied"));
    }

    #[test]
    fn applied_workflow_is_active_and_unsaved() {
        let workflow = apply_template(find_template("forward-urgent").unwrap());
        assert_eq!(workflow.status, WorkflowStatus::Active);
        assert!(workflow.id.is_none());
        assert_eq!(workflow.name, "Forward Urgent Emails");
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert_eq!(
            find_template("nope"),
            Err(EngineError::UnknownTemplate("nope".into()))
        );
    }
}
