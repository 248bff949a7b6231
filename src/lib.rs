//! # Reconciliation Core
//!
//! A ledger reconciliation library comparing voucher-wise outstanding
//! balances between a general ledger and a payment ledger.
//!
//! ## Features
//!
//! - **Voucher-wise comparison**: Independent aggregation of both ledgers
//!   per (company, account, voucher, party) key with full-tuple diffing
//! - **Account partitioning**: Receivable/payable universes with per-type
//!   outstanding-balance sign conventions
//! - **Flexible filtering**: Company, explicit account sets, voucher, and
//!   inclusive posting-date bounds
//! - **Tabular reports**: Column descriptors and row records ready for a
//!   grid UI or CSV export
//! - **Source abstraction**: Database-agnostic design with a trait-based
//!   read-only data source
//!
//! ## Quick Start
//!
//! ```rust
//! use reconciliation_core::{ComparisonFilters, LedgerComparator};
//! use reconciliation_core::utils::MemoryLedgerSource;
//!
//! // This example shows basic usage - you need to implement the
//! // LedgerSource trait for your storage backend, or use the in-memory
//! // source for fixtures.
//! // let source = MemoryLedgerSource::new();
//! // let comparator = LedgerComparator::new(source);
//! ```

pub mod comparison;
pub mod report;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use comparison::*;
pub use report::*;
pub use traits::*;
pub use types::*;
