//! Comparison module containing account resolution and the ledger comparator

pub mod accounts;
pub mod core;
pub mod filters;

pub use accounts::*;
pub use core::*;
pub use filters::*;
