//! Persistence contract for manual cash entries.

use uuid::Uuid;

use cashflow_domain::{DateRange, EntryKind, ManualCashEntry};

use crate::CoreError;

/// Abstraction over keyed persistence backends for manual entries.
///
/// Store failures are hard errors; unlike gateway fetches they are never
/// absorbed by the engines.
pub trait ManualEntryStore: Send + Sync {
    fn insert(&self, entry: &ManualCashEntry) -> Result<(), CoreError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<ManualCashEntry>, CoreError>;
    fn exists(&self, id: Uuid) -> Result<bool, CoreError>;
    /// Removes the entry if present. Absence is not an error at this level;
    /// the service layer owns the not-found semantics.
    fn delete(&self, id: Uuid) -> Result<(), CoreError>;
    /// Entries whose date falls inside the range, ascending by entry date.
    fn find_by_date_range(&self, range: DateRange) -> Result<Vec<ManualCashEntry>, CoreError>;
    /// Sum of amounts of the given kind inside the range.
    fn sum_by_kind(&self, range: DateRange, kind: EntryKind) -> Result<f64, CoreError>;
}
