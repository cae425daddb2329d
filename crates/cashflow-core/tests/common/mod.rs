//! Shared test doubles for the cash flow services.
#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use uuid::Uuid;

use cashflow_core::{
    gateway::{GatewayError, PayableGateway, ReceivableGateway},
    store::ManualEntryStore,
    CoreError,
};
use cashflow_domain::{
    DateRange, EntryKind, ManualCashEntry, PayableStatus, PayableSummary, ReceivableStatus,
    ReceivableSummary,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Entry store holding everything in a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryEntryStore {
    entries: Mutex<Vec<ManualCashEntry>>,
}

impl InMemoryEntryStore {
    pub fn with_entries(entries: Vec<ManualCashEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl ManualEntryStore for InMemoryEntryStore {
    fn insert(&self, entry: &ManualCashEntry) -> Result<(), CoreError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<ManualCashEntry>, CoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|entry| entry.id == id)
            .cloned())
    }

    fn exists(&self, id: Uuid) -> Result<bool, CoreError> {
        Ok(self.entries.lock().unwrap().iter().any(|entry| entry.id == id))
    }

    fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.entries.lock().unwrap().retain(|entry| entry.id != id);
        Ok(())
    }

    fn find_by_date_range(&self, range: DateRange) -> Result<Vec<ManualCashEntry>, CoreError> {
        let mut matches: Vec<_> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| range.contains(entry.entry_date))
            .cloned()
            .collect();
        matches.sort_by_key(|entry| entry.entry_date);
        Ok(matches)
    }

    fn sum_by_kind(&self, range: DateRange, kind: EntryKind) -> Result<f64, CoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.kind == kind && range.contains(entry.entry_date))
            .map(|entry| entry.amount)
            .sum())
    }
}

/// Payable gateway answering from fixed lists.
#[derive(Default)]
pub struct StubPayables {
    pub paid: Vec<PayableSummary>,
    pub pending: Vec<PayableSummary>,
}

impl PayableGateway for StubPayables {
    fn paid_by_payment_date(
        &self,
        _range: DateRange,
    ) -> Result<Vec<PayableSummary>, GatewayError> {
        Ok(self.paid.clone())
    }

    fn pending_by_due_date(&self, _range: DateRange) -> Result<Vec<PayableSummary>, GatewayError> {
        Ok(self.pending.clone())
    }
}

/// Receivable gateway answering from fixed lists.
#[derive(Default)]
pub struct StubReceivables {
    pub received: Vec<ReceivableSummary>,
    pub pending: Vec<ReceivableSummary>,
}

impl ReceivableGateway for StubReceivables {
    fn received_by_received_date(
        &self,
        _range: DateRange,
    ) -> Result<Vec<ReceivableSummary>, GatewayError> {
        Ok(self.received.clone())
    }

    fn pending_by_due_date(
        &self,
        _range: DateRange,
    ) -> Result<Vec<ReceivableSummary>, GatewayError> {
        Ok(self.pending.clone())
    }
}

/// Payable gateway whose every call fails.
pub struct FailingPayables;

impl PayableGateway for FailingPayables {
    fn paid_by_payment_date(
        &self,
        _range: DateRange,
    ) -> Result<Vec<PayableSummary>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".into()))
    }

    fn pending_by_due_date(&self, _range: DateRange) -> Result<Vec<PayableSummary>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".into()))
    }
}

/// Receivable gateway whose every call fails.
pub struct FailingReceivables;

impl ReceivableGateway for FailingReceivables {
    fn received_by_received_date(
        &self,
        _range: DateRange,
    ) -> Result<Vec<ReceivableSummary>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".into()))
    }

    fn pending_by_due_date(
        &self,
        _range: DateRange,
    ) -> Result<Vec<ReceivableSummary>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".into()))
    }
}

pub fn paid_payable(payment_date: Option<NaiveDate>, amount_paid: Option<f64>) -> PayableSummary {
    PayableSummary {
        id: Uuid::new_v4(),
        due_date: payment_date,
        amount_due: amount_paid.unwrap_or(0.0),
        amount_paid,
        status: PayableStatus::Paid,
        payment_date,
    }
}

pub fn pending_payable(due_date: Option<NaiveDate>, amount_due: f64, amount_paid: Option<f64>) -> PayableSummary {
    PayableSummary {
        id: Uuid::new_v4(),
        due_date,
        amount_due,
        amount_paid,
        status: PayableStatus::Pending,
        payment_date: None,
    }
}

pub fn received_receivable(
    received_date: Option<NaiveDate>,
    amount_received: Option<f64>,
) -> ReceivableSummary {
    ReceivableSummary {
        id: Uuid::new_v4(),
        due_date: received_date,
        amount_expected: amount_received.unwrap_or(0.0),
        amount_received,
        status: ReceivableStatus::Received,
        received_date,
    }
}

pub fn pending_receivable(
    due_date: Option<NaiveDate>,
    amount_expected: f64,
    amount_received: Option<f64>,
) -> ReceivableSummary {
    ReceivableSummary {
        id: Uuid::new_v4(),
        due_date,
        amount_expected,
        amount_received,
        status: ReceivableStatus::Pending,
        received_date: None,
    }
}
