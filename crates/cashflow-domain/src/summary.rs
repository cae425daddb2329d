//! Read-only projections of invoices owned by the payables and receivables
//! services. Each value is a fresh per-call snapshot and is never persisted.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an account payable, as reported by its owning service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PayableStatus {
    Pending,
    Paid,
    PartiallyPaid,
    Overdue,
    Canceled,
    InNegotiation,
}

impl fmt::Display for PayableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayableStatus::Pending => "Pending",
            PayableStatus::Paid => "Paid",
            PayableStatus::PartiallyPaid => "Partially Paid",
            PayableStatus::Overdue => "Overdue",
            PayableStatus::Canceled => "Canceled",
            PayableStatus::InNegotiation => "In Negotiation",
        };
        f.write_str(label)
    }
}

/// Lifecycle state of an account receivable, as reported by its owning service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReceivableStatus {
    Pending,
    Received,
    PartiallyReceived,
    Overdue,
    InDispute,
    WrittenOff,
    Canceled,
}

impl fmt::Display for ReceivableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReceivableStatus::Pending => "Pending",
            ReceivableStatus::Received => "Received",
            ReceivableStatus::PartiallyReceived => "Partially Received",
            ReceivableStatus::Overdue => "Overdue",
            ReceivableStatus::InDispute => "In Dispute",
            ReceivableStatus::WrittenOff => "Written Off",
            ReceivableStatus::Canceled => "Canceled",
        };
        f.write_str(label)
    }
}

/// Summary of a single account payable.
///
/// `payment_date` is only meaningful in per-transaction responses from the
/// payment-date query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayableSummary {
    pub id: Uuid,
    pub due_date: Option<NaiveDate>,
    pub amount_due: f64,
    pub amount_paid: Option<f64>,
    pub status: PayableStatus,
    pub payment_date: Option<NaiveDate>,
}

impl PayableSummary {
    /// Amount still owed after partial payments.
    pub fn outstanding(&self) -> f64 {
        self.amount_due - self.amount_paid.unwrap_or(0.0)
    }
}

/// Summary of a single account receivable.
///
/// `received_date` is only meaningful in per-transaction responses from the
/// received-date query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceivableSummary {
    pub id: Uuid,
    pub due_date: Option<NaiveDate>,
    pub amount_expected: f64,
    pub amount_received: Option<f64>,
    pub status: ReceivableStatus,
    pub received_date: Option<NaiveDate>,
}

impl ReceivableSummary {
    /// Amount still expected after partial receipts.
    pub fn outstanding(&self) -> f64 {
        self.amount_expected - self.amount_received.unwrap_or(0.0)
    }
}
