//! The closed catalog of action kinds a workflow step can have.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ActionError;

/// Which side of the mailbox an action operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Reacts to a received email.
    Inbound,
    /// Produces and sends new email.
    Outbound,
}

/// Identifier of an action step.
///
/// Workflow JSON comes from outside this crate, so a kind string that is not
/// in the catalog is kept as [`ActionKind::Unknown`] instead of failing
/// deserialization. Validation reports it later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    GenerateAiReply,
    ReplyToEmail,
    ForwardEmail,
    AddLabel,
    MarkAsRead,
    MarkAsUnread,
    GenerateAiContent,
    SendEmail,
    SendBulkEmail,
    /// Kind string outside the catalog, preserved verbatim.
    Unknown(String),
}

impl ActionKind {
    /// Every kind in the catalog, inbound set first.
    pub const ALL: [ActionKind; 9] = [
        ActionKind::GenerateAiReply,
        ActionKind::ReplyToEmail,
        ActionKind::ForwardEmail,
        ActionKind::AddLabel,
        ActionKind::MarkAsRead,
        ActionKind::MarkAsUnread,
        ActionKind::GenerateAiContent,
        ActionKind::SendEmail,
        ActionKind::SendBulkEmail,
    ];

    /// Wire identifier, e.g. `send_email`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::GenerateAiReply => "generate_ai_reply",
            Self::ReplyToEmail => "reply_to_email",
            Self::ForwardEmail => "forward_email",
            Self::AddLabel => "add_label",
            Self::MarkAsRead => "mark_as_read",
            Self::MarkAsUnread => "mark_as_unread",
            Self::GenerateAiContent => "generate_ai_content",
            Self::SendEmail => "send_email",
            Self::SendBulkEmail => "send_bulk_email",
            Self::Unknown(other) => other,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// `None` for unknown kinds.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::GenerateAiReply
            | Self::ReplyToEmail
            | Self::ForwardEmail
            | Self::AddLabel
            | Self::MarkAsRead
            | Self::MarkAsUnread => Some(Direction::Inbound),
            Self::GenerateAiContent | Self::SendEmail | Self::SendBulkEmail => {
                Some(Direction::Outbound)
            }
            Self::Unknown(_) => None,
        }
    }

    /// True for the kinds whose output is exposed as `{{ai_content}}`.
    pub fn produces_ai_content(&self) -> bool {
        matches!(self, Self::GenerateAiReply | Self::GenerateAiContent)
    }

    /// Strict parse: rejects kinds outside the catalog.
    pub fn parse_known(s: &str) -> Result<Self, ActionError> {
        match Self::from(s.to_owned()) {
            Self::Unknown(other) => Err(ActionError::UnknownKind(other)),
            kind => Ok(kind),
        }
    }
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "generate_ai_reply" => Self::GenerateAiReply,
            "reply_to_email" => Self::ReplyToEmail,
            "forward_email" => Self::ForwardEmail,
            "add_label" => Self::AddLabel,
            "mark_as_read" => Self::MarkAsRead,
            "mark_as_unread" => Self::MarkAsUnread,
            "generate_ai_content" => Self::GenerateAiContent,
            "send_email" => Self::SendEmail,
            "send_bulk_email" => Self::SendBulkEmail,
            _ => Self::Unknown(s),
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Unknown(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for ActionKind {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_known(s)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
