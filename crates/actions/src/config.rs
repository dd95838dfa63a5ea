//! Scalar configuration values attached to an action.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FieldType;

/// A single config value. Configs are flat: strings, numbers or booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

/// Key/value configuration of one action. Keys outside the kind's schema are
/// kept as-is.
pub type ActionConfig = BTreeMap<String, ConfigValue>;

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The schema type this value satisfies.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Bool(_) => FieldType::Boolean,
            Self::Number(_) => FieldType::Number,
            Self::Text(_) => FieldType::Text,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_values_deserialize_to_matching_variants() {
        let config: ActionConfig = serde_json::from_value(json!({
            "to": "a@b.com",
            "isHtml": true,
            "maxLength": 300
        }))
        .unwrap();

        assert_eq!(config["to"], ConfigValue::from("a@b.com"));
        assert_eq!(config["isHtml"], ConfigValue::from(true));
        assert_eq!(config["maxLength"], ConfigValue::from(300i64));
    }

    #[test]
    fn nested_objects_are_rejected() {
        let result: Result<ActionConfig, _> =
            serde_json::from_value(json!({ "headers": { "x": "y" } }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_back_to_plain_json() {
        let mut config = ActionConfig::new();
        config.insert("label".into(), "Homework".into());
        config.insert("isHtml".into(), false.into());
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "isHtml": false, "label": "Homework" })
        );
    }
}
