//! cashflow-core
//!
//! Business logic for cash flow aggregation: statement, forecast, and
//! balance services plus the collaborator contracts they depend on.
//! No transport, no terminal I/O, no direct storage implementation.

pub mod balance_service;
pub mod entry_service;
pub mod error;
pub mod forecast_service;
pub mod gateway;
pub mod public_api;
pub mod statement_service;
pub mod store;

pub use balance_service::BalanceService;
pub use entry_service::{EntryTotals, ManualEntryService, NewManualEntry};
pub use error::CoreError;
pub use forecast_service::ForecastService;
pub use gateway::{GatewayError, PayableGateway, ReceivableGateway, SourceFetch};
pub use public_api::CashFlow;
pub use statement_service::StatementService;
pub use store::ManualEntryStore;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("cashflow_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
