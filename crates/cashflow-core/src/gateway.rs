//! Contracts for the upstream payables and receivables services.
//!
//! The engines only ever read summaries through these traits; the records
//! themselves are owned elsewhere. Implementations live in the transport
//! layer and are expected to apply a bounded timeout per call without
//! automatic retries, since a failed call degrades to an empty source.

use thiserror::Error;
use tracing::warn;

use cashflow_domain::{DateRange, PayableSummary, ReceivableSummary};

/// Error raised by a gateway when the upstream service cannot deliver data.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
    #[error("Upstream returned malformed data: {0}")]
    Decode(String),
}

/// Read-only access to the accounts payable service.
pub trait PayableGateway: Send + Sync {
    /// Payables settled with a payment date inside the range.
    fn paid_by_payment_date(&self, range: DateRange)
        -> Result<Vec<PayableSummary>, GatewayError>;

    /// Open payables falling due inside the range.
    fn pending_by_due_date(&self, range: DateRange) -> Result<Vec<PayableSummary>, GatewayError>;
}

/// Read-only access to the accounts receivable service.
pub trait ReceivableGateway: Send + Sync {
    /// Receivables settled with a received date inside the range.
    fn received_by_received_date(
        &self,
        range: DateRange,
    ) -> Result<Vec<ReceivableSummary>, GatewayError>;

    /// Open receivables falling due inside the range.
    fn pending_by_due_date(&self, range: DateRange)
        -> Result<Vec<ReceivableSummary>, GatewayError>;
}

/// Outcome of one upstream fetch after the availability policy is applied.
///
/// Partial data beats no data for a cash overview, so a failed call becomes
/// an empty source instead of a request failure. Keeping the degraded state
/// explicit makes the policy visible to tests instead of burying it in a
/// catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFetch<T> {
    Available(Vec<T>),
    Unavailable(String),
}

impl<T> SourceFetch<T> {
    /// Wraps a gateway call result, logging and absorbing any failure.
    pub fn from_call(source: &str, result: Result<Vec<T>, GatewayError>) -> Self {
        match result {
            Ok(items) => SourceFetch::Available(items),
            Err(err) => {
                warn!("{source} fetch failed, continuing without that source: {err}");
                SourceFetch::Unavailable(err.to_string())
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, SourceFetch::Unavailable(_))
    }

    /// The fetched items, empty when the source was unavailable.
    pub fn into_items(self) -> Vec<T> {
        match self {
            SourceFetch::Available(items) => items,
            SourceFetch::Unavailable(_) => Vec::new(),
        }
    }
}
