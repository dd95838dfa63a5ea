//! Kind → schema lookup table.
//!
//! Each schema lists the fields an action kind understands, their scalar
//! type, their default value, and whether the field may carry
//! `{{variable}}` placeholders. Default configurations are built from this
//! table, so there is one place to change when a kind gains a field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ActionConfig, ActionError, ActionKind, ConfigValue, Direction};

/// Scalar type a schema field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "a number"),
            Self::Boolean => write!(f, "a boolean"),
        }
    }
}

/// Compile-time default of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    Number(i64),
    Boolean(bool),
}

impl FieldDefault {
    fn to_value(self) -> ConfigValue {
        match self {
            Self::Text(s) => ConfigValue::from(s),
            Self::Number(n) => ConfigValue::from(n),
            Self::Boolean(b) => ConfigValue::from(b),
        }
    }

    fn field_type(self) -> FieldType {
        match self {
            Self::Text(_) => FieldType::Text,
            Self::Number(_) => FieldType::Number,
            Self::Boolean(_) => FieldType::Boolean,
        }
    }
}

/// One field of an action schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: FieldDefault,
    /// Whether `{{variable}}` placeholders are expected in this field.
    pub templated: bool,
}

impl FieldSpec {
    const fn text(name: &'static str, default: &'static str, templated: bool) -> Self {
        Self { name, default: FieldDefault::Text(default), templated }
    }

    const fn number(name: &'static str, default: i64) -> Self {
        Self { name, default: FieldDefault::Number(default), templated: false }
    }

    const fn boolean(name: &'static str, default: bool) -> Self {
        Self { name, default: FieldDefault::Boolean(default), templated: false }
    }

    pub fn field_type(&self) -> FieldType {
        self.default.field_type()
    }
}

/// Schema of one action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSchema {
    /// Wire identifier of the kind.
    pub kind: &'static str,
    /// Human-readable name shown in action pickers.
    pub label: &'static str,
    pub direction: Direction,
    pub fields: &'static [FieldSpec],
}

impl ActionSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// A fresh default configuration for this kind.
    pub fn default_config(&self) -> ActionConfig {
        self.fields
            .iter()
            .map(|f| (f.name.to_owned(), f.default.to_value()))
            .collect()
    }

    /// Type-check the schema fields present in `config`.
    ///
    /// Missing fields and keys outside the schema are not errors.
    pub fn check(&self, config: &ActionConfig) -> Result<(), Vec<ActionError>> {
        let errors: Vec<ActionError> = self
            .fields
            .iter()
            .filter_map(|spec| {
                let value = config.get(spec.name)?;
                (value.field_type() != spec.field_type()).then(|| ActionError::FieldType {
                    field: spec.name.to_owned(),
                    expected: spec.field_type(),
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

const GENERATE_AI_REPLY_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(
        "prompt",
        "Write a helpful, professional reply to this email from {{sender}}: {{email_body}}",
        true,
    ),
    FieldSpec::text("tone", "professional", false),
    FieldSpec::number("maxLength", 300),
];

const REPLY_TO_EMAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("body", "{{ai_content}}", true),
    FieldSpec::boolean("isHtml", false),
];

const FORWARD_EMAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("to", "", true),
    FieldSpec::text("note", "", true),
];

const ADD_LABEL_FIELDS: &[FieldSpec] = &[FieldSpec::text("label", "", false)];

const GENERATE_AI_CONTENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("prompt", "", true),
    FieldSpec::text("tone", "professional", false),
    FieldSpec::number("maxLength", 500),
];

const SEND_EMAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("to", "", true),
    FieldSpec::text("subject", "", true),
    FieldSpec::text("body", "{{ai_content}}", true),
    FieldSpec::boolean("isHtml", false),
];

const SEND_BULK_EMAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("recipientListId", "", false),
    FieldSpec::text("subject", "", true),
    FieldSpec::text("body", "{{ai_content}}", true),
    FieldSpec::boolean("isHtml", false),
];

/// The whole catalog, in [`ActionKind::ALL`] order.
pub static SCHEMAS: [ActionSchema; 9] = [
    ActionSchema {
        kind: "generate_ai_reply",
        label: "Generate AI Reply",
        direction: Direction::Inbound,
        fields: GENERATE_AI_REPLY_FIELDS,
    },
    ActionSchema {
        kind: "reply_to_email",
        label: "Reply to Email",
        direction: Direction::Inbound,
        fields: REPLY_TO_EMAIL_FIELDS,
    },
    ActionSchema {
        kind: "forward_email",
        label: "Forward Email",
        direction: Direction::Inbound,
        fields: FORWARD_EMAIL_FIELDS,
    },
    ActionSchema {
        kind: "add_label",
        label: "Add Label",
        direction: Direction::Inbound,
        fields: ADD_LABEL_FIELDS,
    },
    ActionSchema {
        kind: "mark_as_read",
        label: "Mark as Read",
        direction: Direction::Inbound,
        fields: &[],
    },
    ActionSchema {
        kind: "mark_as_unread",
        label: "Mark as Unread",
        direction: Direction::Inbound,
        fields: &[],
    },
    ActionSchema {
        kind: "generate_ai_content",
        label: "Generate AI Content",
        direction: Direction::Outbound,
        fields: GENERATE_AI_CONTENT_FIELDS,
    },
    ActionSchema {
        kind: "send_email",
        label: "Send Email",
        direction: Direction::Outbound,
        fields: SEND_EMAIL_FIELDS,
    },
    ActionSchema {
        kind: "send_bulk_email",
        label: "Send Bulk Email",
        direction: Direction::Outbound,
        fields: SEND_BULK_EMAIL_FIELDS,
    },
];

/// Schema of `kind`, or `None` for kinds outside the catalog.
pub fn schema_for(kind: &ActionKind) -> Option<&'static ActionSchema> {
    if !kind.is_known() {
        return None;
    }
    SCHEMAS.iter().find(|s| s.kind == kind.as_str())
}

/// Fresh default configuration for `kind`; empty for unknown kinds.
pub fn default_config_for(kind: &ActionKind) -> ActionConfig {
    schema_for(kind)
        .map(ActionSchema::default_config)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_known_kind_has_a_schema_in_catalog_order() {
        for (kind, schema) in ActionKind::ALL.iter().zip(SCHEMAS.iter()) {
            assert_eq!(schema_for(kind), Some(schema));
            assert_eq!(kind.direction(), Some(schema.direction));
        }
    }

    #[test]
    fn send_email_defaults_match_the_builder() {
        let config = default_config_for(&ActionKind::SendEmail);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "to": "", "subject": "", "body": "{{ai_content}}", "isHtml": false })
        );
    }

    #[test]
    fn unknown_kind_defaults_to_empty_config() {
        let kind = ActionKind::Unknown("archive_email".into());
        assert!(schema_for(&kind).is_none());
        assert!(default_config_for(&kind).is_empty());
    }

    #[test]
    fn flag_only_kinds_have_no_fields() {
        assert!(default_config_for(&ActionKind::MarkAsRead).is_empty());
        assert!(default_config_for(&ActionKind::MarkAsUnread).is_empty());
    }

    #[test]
    fn default_configs_are_not_shared() {
        let mut first = default_config_for(&ActionKind::AddLabel);
        first.insert("label".into(), "Urgent".into());
        let second = default_config_for(&ActionKind::AddLabel);
        assert_eq!(second["label"], ConfigValue::from(""));
    }

    #[test]
    fn check_reports_mistyped_fields_only() {
        let schema = schema_for(&ActionKind::SendEmail).unwrap();
        let mut config = schema.default_config();
        config.insert("isHtml".into(), "yes".into());
        config.insert("trackOpens".into(), true.into());

        let errors = schema.check(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ActionError::FieldType {
                field: "isHtml".into(),
                expected: FieldType::Boolean,
            }]
        );
    }

    #[test]
    fn defaults_satisfy_their_own_schema() {
        for schema in &SCHEMAS {
            assert!(schema.check(&schema.default_config()).is_ok(), "{}", schema.kind);
        }
    }
}
