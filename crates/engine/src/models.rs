//! Core domain models for email-automation workflows.
//!
//! These types are the in-memory draft a workflow builder edits. Their serde
//! shape is the JSON the workflow service accepts, so a draft can be written
//! to disk, read back, and posted without an intermediate mapping.

use serde::{Deserialize, Serialize};

use actions::{ActionConfig, ActionKind};

// ---------------------------------------------------------------------------
// Trigger
// ---------------------------------------------------------------------------

/// How a workflow is started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// Fires when an inbound email matches both filters.
    EmailReceived { filters: EmailFilters },
    /// Fires on a recurring schedule.
    Schedule { schedule: Schedule },
    /// Started on demand.
    #[default]
    Manual,
}

impl Trigger {
    pub fn email_received(from_pattern: impl Into<String>, subject_pattern: impl Into<String>) -> Self {
        Self::EmailReceived {
            filters: EmailFilters {
                from_pattern: from_pattern.into(),
                subject_pattern: subject_pattern.into(),
            },
        }
    }

    pub fn schedule(frequency: Frequency, time: impl Into<String>, day_of_week: Option<DayOfWeek>) -> Self {
        Self::Schedule {
            schedule: Schedule {
                frequency,
                time: time.into(),
                day_of_week,
            },
        }
    }

    /// Wire name of the trigger type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::EmailReceived { .. } => "email_received",
            Self::Schedule { .. } => "schedule",
            Self::Manual => "manual",
        }
    }
}

/// Regex filters for an `email_received` trigger. Empty patterns match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailFilters {
    #[serde(default)]
    pub from_pattern: String,
    #[serde(default)]
    pub subject_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub frequency: Frequency,
    /// Local time of day, `HH:MM`.
    pub time: String,
    /// Required for weekly schedules, absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A single step of the workflow. Steps run in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default)]
    pub config: ActionConfig,
}

impl Action {
    /// An action of `kind` carrying its default configuration.
    pub fn new(kind: ActionKind) -> Self {
        let config = actions::default_config_for(&kind);
        Self { kind, config }
    }

    /// String-valued config entries, in key order.
    pub fn text_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.config
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|text| (key.as_str(), text)))
    }
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Active,
    Inactive,
}

/// A complete workflow definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Identifier assigned by the workflow service once saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "triggerConfig", default)]
    pub trigger: Trigger,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub status: WorkflowStatus,
}

impl Workflow {
    /// A new, unsaved, active workflow with no actions.
    pub fn new(name: impl Into<String>, description: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            trigger,
            actions: Vec::new(),
            status: WorkflowStatus::Active,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
