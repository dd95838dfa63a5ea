//! `{{variable}}` placeholder handling.
//!
//! A placeholder is two open braces, one or more ASCII word characters
//! (`A-Z`, `a-z`, `0-9`, `_`), and two close braces. Unbalanced forms such as
//! `{name}}` or `{{name}`, and names with non-ASCII letters, are plain text.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use actions::ActionConfig;

use crate::models::Workflow;

/// Output of AI generation actions, filled in by the executor at run time.
pub const AI_CONTENT: &str = "ai_content";

/// Variables produced while a workflow runs rather than supplied by the caller.
pub const RUNTIME_VARIABLES: &[&str] = &[AI_CONTENT];

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Distinct variable names referenced in `text`.
pub fn extract_variables(text: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|cap| cap[1].to_owned())
        .collect()
}

/// Variables referenced by the string values of one action config.
pub fn extract_from_config(config: &ActionConfig) -> BTreeSet<String> {
    config
        .values()
        .filter_map(|value| value.as_str())
        .flat_map(extract_variables)
        .collect()
}

/// Every variable referenced anywhere in the workflow, runtime ones included.
pub fn workflow_variables(workflow: &Workflow) -> BTreeSet<String> {
    workflow
        .actions
        .iter()
        .flat_map(|action| extract_from_config(&action.config))
        .collect()
}

/// Variables a caller has to supply to run the workflow.
pub fn required_variables(workflow: &Workflow) -> BTreeSet<String> {
    let mut vars = workflow_variables(workflow);
    vars.retain(|name| !is_runtime_variable(name));
    vars
}

pub fn is_runtime_variable(name: &str) -> bool {
    RUNTIME_VARIABLES.contains(&name)
}

/// Substitute known placeholders; unknown ones are left in place.
pub fn render(text: &str, values: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(text, |cap: &Captures<'_>| match values.get(&cap[1]) {
            Some(value) => value.clone(),
            None => cap[0].to_owned(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actions::ActionKind;

    use crate::models::{Action, Trigger};

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extracts_distinct_names() {
        let vars = extract_variables("Hi {{name}}, {{course}} starts {{date}}. Bye {{name}}!");
        assert_eq!(vars, set(&["course", "date", "name"]));
    }

    #[test]
    fn empty_text_has_no_variables() {
        assert!(extract_variables("").is_empty());
        assert!(extract_variables("no placeholders here").is_empty());
    }

    #[test]
    fn unbalanced_braces_are_not_variables() {
        assert!(extract_variables("{name}} and {{name} and {{ name }}").is_empty());
        assert!(extract_variables("{{first-name}}").is_empty());
    }

    #[test]
    fn non_ascii_names_are_not_variables() {
        assert!(extract_variables("Hola {{año}} {{名前}}").is_empty());
        assert_eq!(extract_variables("{{año}} {{ano}}"), set(&["ano"]));
    }

    #[test]
    fn render_leaves_non_ascii_placeholders_alone() {
        let values = BTreeMap::from([("año".to_string(), "2025".to_string())]);
        assert_eq!(render("{{año}}", &values), "{{año}}");
    }

    #[test]
    fn triple_braces_still_contain_a_variable() {
        assert_eq!(extract_variables("{{{student}}}"), set(&["student"]));
    }

    #[test]
    fn extraction_is_stable_across_calls() {
        let text = "{{a}} {{b_2}} {{a}}";
        assert_eq!(extract_variables(text), extract_variables(text));
    }

    #[test]
    fn config_extraction_ignores_non_text_values() {
        let mut config = ActionConfig::new();
        config.insert("body".into(), "Dear {{student_name}}".into());
        config.insert("isHtml".into(), false.into());
        config.insert("maxLength".into(), 10i64.into());
        assert_eq!(extract_from_config(&config), set(&["student_name"]));
    }

    #[test]
    fn required_variables_drop_runtime_output() {
        let mut workflow = Workflow::new("n", "d", Trigger::Manual);
        workflow.actions.push(Action::new(ActionKind::GenerateAiReply));
        workflow.actions.push(Action::new(ActionKind::ReplyToEmail));

        assert_eq!(
            workflow_variables(&workflow),
            set(&["ai_content", "email_body", "sender"])
        );
        assert_eq!(required_variables(&workflow), set(&["email_body", "sender"]));
    }

    #[test]
    fn render_keeps_unknown_placeholders() {
        let values = BTreeMap::from([("name".to_string(), "Ada".to_string())]);
        assert_eq!(
            render("Hello {{name}}, see {{link}}", &values),
            "Hello Ada, see {{link}}"
        );
    }
}
