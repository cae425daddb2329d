//! cashflow-domain
//!
//! Data model for cash flow aggregation: manual entries, upstream invoice
//! summaries, and the statement/forecast aggregates built from them.
//! No services, no I/O.

pub mod common;
pub mod entry;
pub mod flow;
pub mod summary;

pub use common::{DateRange, DateRangeError};
pub use entry::{EntryKind, ManualCashEntry, DESCRIPTION_MAX_LEN};
pub use flow::{CashFlowForecast, CashFlowItem, CashFlowStatement, FlowCategory};
pub use summary::{PayableStatus, PayableSummary, ReceivableStatus, ReceivableSummary};
