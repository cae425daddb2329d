//! Cash flow line items and the statement/forecast aggregates built from them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::DateRange;

/// Classifies where a cash flow line item originated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowCategory {
    Receivable,
    Payable,
    ManualCredit,
    ManualDebit,
}

impl fmt::Display for FlowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowCategory::Receivable => "Receivable",
            FlowCategory::Payable => "Payable",
            FlowCategory::ManualCredit => "Manual Credit",
            FlowCategory::ManualDebit => "Manual Debit",
        };
        f.write_str(label)
    }
}

/// A normalized statement line, built for a single response and discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowItem {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: FlowCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<Uuid>,
}

/// Historical accounting of actual cash movements over an inclusive period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowStatement {
    pub period: DateRange,
    pub opening_balance: f64,
    pub total_inflows: f64,
    pub total_outflows: f64,
    pub net_cash_flow: f64,
    pub closing_balance: f64,
    pub inflow_items: Vec<CashFlowItem>,
    pub outflow_items: Vec<CashFlowItem>,
}

impl CashFlowStatement {
    /// Assembles the aggregate from categorized items, deriving every total.
    ///
    /// Items are sorted by date; the sort is stable, so insertion order is
    /// the tiebreak for equal dates.
    pub fn from_items(
        period: DateRange,
        opening_balance: f64,
        mut inflow_items: Vec<CashFlowItem>,
        mut outflow_items: Vec<CashFlowItem>,
    ) -> Self {
        inflow_items.sort_by_key(|item| item.date);
        outflow_items.sort_by_key(|item| item.date);
        let total_inflows: f64 = inflow_items.iter().map(|item| item.amount).sum();
        let total_outflows: f64 = outflow_items.iter().map(|item| item.amount).sum();
        let net_cash_flow = total_inflows - total_outflows;
        Self {
            period,
            opening_balance,
            total_inflows,
            total_outflows,
            net_cash_flow,
            closing_balance: opening_balance + net_cash_flow,
            inflow_items,
            outflow_items,
        }
    }
}

/// Forward-looking projection keyed by day.
///
/// `daily_balance` covers every day of the projected range in date order,
/// each mapped to the cumulative balance at the end of that day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowForecast {
    pub start_date: NaiveDate,
    pub starting_balance: f64,
    pub daily_balance: BTreeMap<NaiveDate, f64>,
}

impl CashFlowForecast {
    /// Projected balance at the end of the given day, when inside the range.
    pub fn balance_on(&self, date: NaiveDate) -> Option<f64> {
        self.daily_balance.get(&date).copied()
    }
}
