//! High-level entry point wiring storage and gateways together.
//!
//! This is the surface a transport layer (HTTP handlers, CLI, FFI) talks
//! to, without depending on the individual services. Wall-clock operations
//! resolve "today" here; the underlying services take it explicitly so
//! tests stay deterministic.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use cashflow_domain::{CashFlowForecast, CashFlowStatement, DateRange, ManualCashEntry};

use crate::{
    balance_service::BalanceService,
    entry_service::{EntryTotals, ManualEntryService, NewManualEntry},
    forecast_service::ForecastService,
    gateway::{PayableGateway, ReceivableGateway},
    statement_service::StatementService,
    store::ManualEntryStore,
    CoreError,
};

pub struct CashFlow {
    store: Box<dyn ManualEntryStore>,
    payables: Box<dyn PayableGateway>,
    receivables: Box<dyn ReceivableGateway>,
}

impl CashFlow {
    pub fn new(
        store: Box<dyn ManualEntryStore>,
        payables: Box<dyn PayableGateway>,
        receivables: Box<dyn ReceivableGateway>,
    ) -> Self {
        Self {
            store,
            payables,
            receivables,
        }
    }

    pub fn create_manual_entry(&self, draft: NewManualEntry) -> Result<ManualCashEntry, CoreError> {
        ManualEntryService::create(self.store.as_ref(), draft)
    }

    pub fn manual_entry(&self, id: Uuid) -> Result<ManualCashEntry, CoreError> {
        ManualEntryService::get(self.store.as_ref(), id)
    }

    pub fn delete_manual_entry(&self, id: Uuid) -> Result<(), CoreError> {
        ManualEntryService::delete(self.store.as_ref(), id)
    }

    pub fn manual_entry_totals(&self, range: DateRange) -> Result<EntryTotals, CoreError> {
        ManualEntryService::range_totals(self.store.as_ref(), range)
    }

    pub fn statement(
        &self,
        period: DateRange,
        opening_balance: f64,
    ) -> Result<CashFlowStatement, CoreError> {
        StatementService::build(
            self.store.as_ref(),
            self.payables.as_ref(),
            self.receivables.as_ref(),
            period,
            opening_balance,
        )
    }

    /// Balance at the end of yesterday, anchored at a known opening balance.
    pub fn current_balance(
        &self,
        opening_date: NaiveDate,
        opening_balance: f64,
    ) -> Result<f64, CoreError> {
        BalanceService::current_as_of(
            self.store.as_ref(),
            self.payables.as_ref(),
            self.receivables.as_ref(),
            Utc::now().date_naive(),
            opening_date,
            opening_balance,
        )
    }

    /// Projection from today through `days_ahead` days out.
    pub fn forecast(
        &self,
        days_ahead: u32,
        current_balance: f64,
    ) -> Result<CashFlowForecast, CoreError> {
        ForecastService::project(
            self.payables.as_ref(),
            self.receivables.as_ref(),
            Utc::now().date_naive(),
            days_ahead,
            current_balance,
        )
    }
}
