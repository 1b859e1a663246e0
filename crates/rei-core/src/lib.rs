pub mod config;
pub mod error;
pub mod ledger;
pub mod report;
pub mod types;

pub use config::RatioConfig;
pub use error::LedgerError;
pub use ledger::{InvestmentLedger, LineItems};
pub use types::*;

/// Standard result type for all ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
