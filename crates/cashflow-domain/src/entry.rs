//! Manual cash entries recorded directly against the cash position.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound for entry descriptions, matching the persisted column width.
pub const DESCRIPTION_MAX_LEN: usize = 300;

/// Indicates whether an entry moves cash in or out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    /// Cash inflow.
    Credit,
    /// Cash outflow.
    Debit,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Credit => "Credit",
            EntryKind::Debit => "Debit",
        };
        f.write_str(label)
    }
}

/// A cash movement recorded by hand, not derived from an invoice.
///
/// The amount is always positive; `kind` determines the flow direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManualCashEntry {
    pub id: Uuid,
    pub entry_date: NaiveDate,
    pub amount: f64,
    pub kind: EntryKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center_id: Option<Uuid>,
    #[serde(default)]
    pub document_references: Vec<String>,
}

impl ManualCashEntry {
    pub fn new(
        entry_date: NaiveDate,
        amount: f64,
        kind: EntryKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry_date,
            amount,
            kind,
            description: description.into(),
            project_id: None,
            cost_center_id: None,
            document_references: Vec::new(),
        }
    }
}
