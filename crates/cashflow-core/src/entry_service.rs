//! Create/read/delete operations for manual cash entries.

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use cashflow_domain::{DateRange, EntryKind, ManualCashEntry, DESCRIPTION_MAX_LEN};

use crate::{store::ManualEntryStore, CoreError};

/// Draft of a manual entry prior to identifier assignment.
#[derive(Debug, Clone)]
pub struct NewManualEntry {
    pub entry_date: NaiveDate,
    pub amount: f64,
    pub kind: EntryKind,
    pub description: String,
    pub project_id: Option<Uuid>,
    pub cost_center_id: Option<Uuid>,
    pub document_references: Vec<String>,
}

impl NewManualEntry {
    pub fn new(
        entry_date: NaiveDate,
        amount: f64,
        kind: EntryKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
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

/// Credit and debit totals for a date range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryTotals {
    pub credits: f64,
    pub debits: f64,
}

pub struct ManualEntryService;

impl ManualEntryService {
    /// Validates and persists a new entry, assigning its identifier.
    pub fn create(
        store: &dyn ManualEntryStore,
        draft: NewManualEntry,
    ) -> Result<ManualCashEntry, CoreError> {
        validate(&draft)?;
        info!("creating manual cash entry `{}`", draft.description);
        let mut entry = ManualCashEntry::new(
            draft.entry_date,
            draft.amount,
            draft.kind,
            draft.description,
        );
        entry.project_id = draft.project_id;
        entry.cost_center_id = draft.cost_center_id;
        entry.document_references = draft.document_references;
        store.insert(&entry)?;
        info!("manual cash entry created with id {}", entry.id);
        Ok(entry)
    }

    pub fn get(store: &dyn ManualEntryStore, id: Uuid) -> Result<ManualCashEntry, CoreError> {
        debug!("fetching manual entry {id}");
        store
            .find_by_id(id)?
            .ok_or(CoreError::EntryNotFound(id))
    }

    pub fn delete(store: &dyn ManualEntryStore, id: Uuid) -> Result<(), CoreError> {
        info!("deleting manual entry {id}");
        if !store.exists(id)? {
            return Err(CoreError::EntryNotFound(id));
        }
        store.delete(id)?;
        info!("manual entry {id} deleted");
        Ok(())
    }

    /// Sums credits and debits recorded inside the range.
    pub fn range_totals(
        store: &dyn ManualEntryStore,
        range: DateRange,
    ) -> Result<EntryTotals, CoreError> {
        Ok(EntryTotals {
            credits: store.sum_by_kind(range, EntryKind::Credit)?,
            debits: store.sum_by_kind(range, EntryKind::Debit)?,
        })
    }
}

fn validate(draft: &NewManualEntry) -> Result<(), CoreError> {
    if draft.amount <= 0.0 {
        return Err(CoreError::InvalidInput(
            "entry amount must be positive".into(),
        ));
    }
    if draft.description.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "entry description must not be blank".into(),
        ));
    }
    if draft.description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(CoreError::InvalidInput(format!(
            "entry description must not exceed {DESCRIPTION_MAX_LEN} characters"
        )));
    }
    Ok(())
}
