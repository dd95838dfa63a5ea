//! Recipient lists and the variables they contribute.
//!
//! A list is uploaded as CSV to the workflow service, which keeps the rows.
//! Only the summary comes back. Column names other than `email` become
//! per-recipient variables for `send_bulk_email` actions; they are only known
//! at run time, so checks query a [`VariableSource`] instead of a fixed set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Column every recipient list must have.
pub const EMAIL_COLUMN: &str = "email";

/// Summary of an uploaded recipient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientList {
    pub id: String,
    pub name: String,
    pub total_count: u64,
    /// CSV header, when the service reported it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
}

impl RecipientList {
    /// Variables each row provides, or `None` if the header is unknown.
    pub fn variables(&self) -> Option<BTreeSet<String>> {
        if self.columns.is_empty() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.trim().to_owned())
                .filter(|c| !c.is_empty() && c != EMAIL_COLUMN)
                .collect(),
        )
    }
}

/// Runtime lookup of the variables a recipient list provides.
pub trait VariableSource {
    /// `None` when the list, or its columns, are not known.
    fn list_variables(&self, list_id: &str) -> Option<BTreeSet<String>>;
}

/// Source that knows no lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLists;

impl VariableSource for NoLists {
    fn list_variables(&self, _list_id: &str) -> Option<BTreeSet<String>> {
        None
    }
}

impl VariableSource for [RecipientList] {
    fn list_variables(&self, list_id: &str) -> Option<BTreeSet<String>> {
        self.iter().find(|l| l.id == list_id)?.variables()
    }
}

impl VariableSource for Vec<RecipientList> {
    fn list_variables(&self, list_id: &str) -> Option<BTreeSet<String>> {
        self.as_slice().list_variables(list_id)
    }
}
