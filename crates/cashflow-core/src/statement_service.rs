//! Builds historical statements from settled invoices and manual entries.

use tracing::{debug, info};

use cashflow_domain::{
    CashFlowItem, CashFlowStatement, DateRange, EntryKind, FlowCategory,
};

use crate::{
    gateway::{PayableGateway, ReceivableGateway, SourceFetch},
    store::ManualEntryStore,
    CoreError,
};

pub struct StatementService;

impl StatementService {
    /// Produces a statement of actual cash movements over the inclusive
    /// `period`.
    ///
    /// Either upstream source failing degrades to an empty item list for
    /// that source; a store failure aborts the whole statement.
    pub fn build(
        store: &dyn ManualEntryStore,
        payables: &dyn PayableGateway,
        receivables: &dyn ReceivableGateway,
        period: DateRange,
        opening_balance: f64,
    ) -> Result<CashFlowStatement, CoreError> {
        debug!("building statement for {period}");

        let paid =
            SourceFetch::from_call("payables", payables.paid_by_payment_date(period)).into_items();
        let received = SourceFetch::from_call(
            "receivables",
            receivables.received_by_received_date(period),
        )
        .into_items();
        let entries = store.find_by_date_range(period)?;

        let mut inflow_items = Vec::new();
        let mut outflow_items = Vec::new();

        // Gateways are expected to pre-filter, but that is not guaranteed;
        // records without a settlement date inside the period are dropped.
        for summary in &received {
            let Some(date) = summary.received_date.filter(|d| period.contains(*d)) else {
                continue;
            };
            inflow_items.push(CashFlowItem {
                date,
                description: format!("Receivable {}", summary.id),
                amount: summary.amount_received.unwrap_or(0.0),
                category: FlowCategory::Receivable,
                source_id: Some(summary.id),
            });
        }
        for summary in &paid {
            let Some(date) = summary.payment_date.filter(|d| period.contains(*d)) else {
                continue;
            };
            outflow_items.push(CashFlowItem {
                date,
                description: format!("Payable {}", summary.id),
                amount: summary.amount_paid.unwrap_or(0.0),
                category: FlowCategory::Payable,
                source_id: Some(summary.id),
            });
        }
        for entry in entries {
            let category = match entry.kind {
                EntryKind::Credit => FlowCategory::ManualCredit,
                EntryKind::Debit => FlowCategory::ManualDebit,
            };
            let item = CashFlowItem {
                date: entry.entry_date,
                description: entry.description,
                amount: entry.amount,
                category,
                source_id: Some(entry.id),
            };
            match category {
                FlowCategory::ManualCredit => inflow_items.push(item),
                _ => outflow_items.push(item),
            }
        }

        let statement =
            CashFlowStatement::from_items(period, opening_balance, inflow_items, outflow_items);
        info!(
            "statement ready for {period}: inflows={:.2} outflows={:.2} closing={:.2}",
            statement.total_inflows, statement.total_outflows, statement.closing_balance
        );
        Ok(statement)
    }
}
