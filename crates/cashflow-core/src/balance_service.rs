//! Derives the present cash position from the statement history.

use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

use cashflow_domain::DateRange;

use crate::{
    gateway::{PayableGateway, ReceivableGateway},
    statement_service::StatementService,
    store::ManualEntryStore,
    CoreError,
};

pub struct BalanceService;

impl BalanceService {
    /// Computes the balance at the end of `today - 1 day` by replaying the
    /// statement from the opening anchor.
    ///
    /// An anchor on or after `today` has no history to replay; the opening
    /// balance is returned unchanged.
    pub fn current_as_of(
        store: &dyn ManualEntryStore,
        payables: &dyn PayableGateway,
        receivables: &dyn ReceivableGateway,
        today: NaiveDate,
        opening_date: NaiveDate,
        opening_balance: f64,
    ) -> Result<f64, CoreError> {
        let yesterday = today - Duration::days(1);
        if opening_date > yesterday {
            debug!(
                "opening anchor {opening_date} is not in the past, returning opening balance"
            );
            return Ok(opening_balance);
        }
        let period = DateRange::new(opening_date, yesterday)?;
        let statement =
            StatementService::build(store, payables, receivables, period, opening_balance)?;
        info!(
            "current balance as of {yesterday}: {:.2}",
            statement.closing_balance
        );
        Ok(statement.closing_balance)
    }
}
