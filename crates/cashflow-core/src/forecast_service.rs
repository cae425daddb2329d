//! Projects future balances from invoices that are still outstanding.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use tracing::info;

use cashflow_domain::{CashFlowForecast, DateRange};

use crate::{
    gateway::{PayableGateway, ReceivableGateway, SourceFetch},
    CoreError,
};

pub struct ForecastService;

impl ForecastService {
    /// Projects the daily balance from `today` through `today + days_ahead`
    /// inclusive.
    ///
    /// Only pending invoice remainders feed the projection; future-dated
    /// manual entries are deliberately not included. Upstream failure
    /// degrades that source to empty.
    pub fn project(
        payables: &dyn PayableGateway,
        receivables: &dyn ReceivableGateway,
        today: NaiveDate,
        days_ahead: u32,
        current_balance: f64,
    ) -> Result<CashFlowForecast, CoreError> {
        if days_ahead == 0 {
            return Err(CoreError::InvalidInput("days ahead must be positive".into()));
        }
        let range = DateRange::new(today, today + Duration::days(days_ahead as i64))?;
        info!("projecting cash flow for {range}");

        let pending_payables =
            SourceFetch::from_call("payables", payables.pending_by_due_date(range)).into_items();
        let pending_receivables =
            SourceFetch::from_call("receivables", receivables.pending_by_due_date(range))
                .into_items();

        // Per-day net flow, merged additively for records due the same day.
        let mut daily_net_flow: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for summary in &pending_receivables {
            let remaining = summary.outstanding();
            if remaining <= 0.0 {
                continue;
            }
            let Some(due) = summary.due_date else {
                continue;
            };
            *daily_net_flow.entry(due).or_insert(0.0) += remaining;
        }
        for summary in &pending_payables {
            let remaining = summary.outstanding();
            if remaining <= 0.0 {
                continue;
            }
            let Some(due) = summary.due_date else {
                continue;
            };
            *daily_net_flow.entry(due).or_insert(0.0) -= remaining;
        }

        let mut daily_balance = BTreeMap::new();
        let mut running_balance = current_balance;
        for day in range.days() {
            running_balance += daily_net_flow.get(&day).copied().unwrap_or(0.0);
            daily_balance.insert(day, running_balance);
        }

        info!(
            "forecast generated through {}: projected end balance {:.2}",
            range.end, running_balance
        );
        Ok(CashFlowForecast {
            start_date: today,
            starting_balance: current_balance,
            daily_balance,
        })
    }
}
