//! Action-list editing.
//!
//! Every operation takes the current draft by reference and returns the
//! edited copy; the input is never modified, including on error.

use tracing::debug;

use actions::{ActionConfig, ActionKind};

use crate::models::{Action, Workflow};
use crate::EngineError;

impl Workflow {
    /// Append an action of `kind` with its default configuration.
    pub fn add_action(&self, kind: ActionKind) -> Workflow {
        debug!("adding '{}' action at position {}", kind, self.actions.len());
        let mut next = self.clone();
        next.actions.push(Action::new(kind));
        next
    }

    /// Remove the action at `index`.
    ///
    /// # Errors
    /// [`EngineError::IndexOutOfRange`] unless `index < actions.len()`.
    pub fn remove_action(&self, index: usize) -> Result<Workflow, EngineError> {
        self.check_index(index)?;
        let mut next = self.clone();
        let removed = next.actions.remove(index);
        debug!("removed '{}' action at position {}", removed.kind, index);
        Ok(next)
    }

    /// Shallow-merge `patch` into the config of the action at `index`.
    ///
    /// Keys in `patch` overwrite, all other keys are kept.
    ///
    /// # Errors
    /// [`EngineError::IndexOutOfRange`] unless `index < actions.len()`.
    pub fn update_action_config(&self, index: usize, patch: ActionConfig) -> Result<Workflow, EngineError> {
        self.check_index(index)?;
        let mut next = self.clone();
        debug!("patching {} config keys on action {}", patch.len(), index);
        next.actions[index].config.extend(patch);
        Ok(next)
    }

    /// Move the action at `from` so it ends up at position `to`.
    ///
    /// # Errors
    /// [`EngineError::IndexOutOfRange`] if either index is outside the list.
    pub fn move_action(&self, from: usize, to: usize) -> Result<Workflow, EngineError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let mut next = self.clone();
        let action = next.actions.remove(from);
        next.actions.insert(to, action);
        debug!("moved action {} to position {}", from, to);
        Ok(next)
    }

    fn check_index(&self, index: usize) -> Result<(), EngineError> {
        if index < self.actions.len() {
            Ok(())
        } else {
            Err(EngineError::IndexOutOfRange {
                index,
                len: self.actions.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actions::ConfigValue;

    use crate::models::Trigger;

    fn kinds(workflow: &Workflow) -> Vec<ActionKind> {
        workflow.actions.iter().map(|a| a.kind.clone()).collect()
    }

    fn three_step() -> Workflow {
        Workflow::new("n", "d", Trigger::Manual)
            .add_action(ActionKind::GenerateAiContent)
            .add_action(ActionKind::SendEmail)
            .add_action(ActionKind::AddLabel)
    }

    #[test]
    fn add_appends_defaults_without_touching_the_input() {
        let base = Workflow::new("n", "d", Trigger::Manual);
        let next = base.add_action(ActionKind::SendEmail);

        assert!(base.actions.is_empty());
        assert_eq!(next.actions.len(), 1);
        assert_eq!(next.actions[0].config["body"], ConfigValue::from("{{ai_content}}"));
    }

    #[test]
    fn remove_keeps_relative_order() {
        let base = three_step();
        let next = base.remove_action(1).unwrap();
        assert_eq!(kinds(&next), vec![ActionKind::GenerateAiContent, ActionKind::AddLabel]);
        assert_eq!(base.actions.len(), 3);
    }

    #[test]
    fn remove_out_of_range_fails() {
        let base = three_step();
        assert_eq!(
            base.remove_action(3),
            Err(EngineError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(base, three_step());
    }

    #[test]
    fn update_merges_shallowly() {
        let base = three_step();
        let patch = ActionConfig::from([
            ("to".to_string(), ConfigValue::from("class@example.com")),
            ("cc".to_string(), ConfigValue::from("office@example.com")),
        ]);
        let next = base.update_action_config(1, patch).unwrap();
        let config = &next.actions[1].config;

        assert_eq!(config["to"], ConfigValue::from("class@example.com"));
        assert_eq!(config["cc"], ConfigValue::from("office@example.com"));
        assert_eq!(config["body"], ConfigValue::from("{{ai_content}}"));
        assert_eq!(base.actions[1].config["to"], ConfigValue::from(""));
    }

    #[test]
    fn update_out_of_range_fails() {
        let base = Workflow::new("n", "d", Trigger::Manual);
        assert!(matches!(
            base.update_action_config(0, ActionConfig::new()),
            Err(EngineError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn move_reorders() {
        let next = three_step().move_action(2, 0).unwrap();
        assert_eq!(
            kinds(&next),
            vec![ActionKind::AddLabel, ActionKind::GenerateAiContent, ActionKind::SendEmail]
        );

        let back = next.move_action(0, 2).unwrap();
        assert_eq!(back, three_step());
    }

    #[test]
    fn move_rejects_bad_target() {
        assert!(three_step().move_action(0, 5).is_err());
    }
}
