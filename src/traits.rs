//! Traits for data-source abstraction and extensibility

use async_trait::async_trait;

use crate::comparison::{BalanceQuery, ComparisonFilters};
use crate::types::*;

/// Read-only data-source abstraction for the reconciliation core
///
/// This trait allows the comparator to work with any query backend
/// (PostgreSQL, MySQL, SQLite, in-memory, etc.) by implementing these
/// methods. Grouping and summation belong behind the trait so a SQL
/// implementation can push them into the engine instead of materializing
/// raw entries.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// List accounts of a company, optionally restricted to one classification
    async fn list_accounts(
        &self,
        company: &str,
        account_type: Option<AccountType>,
    ) -> ReconResult<Vec<Account>>;

    /// Look up accounts by name
    ///
    /// Names that match no account are simply not returned.
    async fn find_accounts(&self, names: &[String]) -> ReconResult<Vec<Account>>;

    /// Aggregate outstanding general ledger balances for the query
    ///
    /// Cancelled entries are excluded before aggregation. Rows are grouped
    /// by (company, account, voucher_no, party) and summed under the sign
    /// convention of the query's account classification.
    async fn general_ledger_balances(&self, query: &BalanceQuery) -> ReconResult<Vec<BalanceRow>>;

    /// Aggregate outstanding payment ledger balances for the query
    ///
    /// Delinked entries are excluded before aggregation. Rows are grouped by
    /// (company, account, voucher_no, party); the sum is the signed amount
    /// with no sign flip.
    async fn payment_ledger_balances(&self, query: &BalanceQuery) -> ReconResult<Vec<BalanceRow>>;
}

/// Trait for implementing custom filter validation rules
pub trait FilterValidator: Send + Sync {
    /// Validate a filter set before the comparison runs
    fn validate_filters(&self, filters: &ComparisonFilters) -> ReconResult<()>;
}

/// Default filter validator with basic rules
///
/// Rejects a blank company instead of letting every downstream query
/// degrade to an empty result set.
pub struct DefaultFilterValidator;

impl FilterValidator for DefaultFilterValidator {
    fn validate_filters(&self, filters: &ComparisonFilters) -> ReconResult<()> {
        if filters.company.trim().is_empty() {
            return Err(ReconciliationError::Validation(
                "Company cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// No-op filter validator
///
/// Accepts every filter set; a blank company then yields an empty report
/// rather than an error.
pub struct PermissiveFilterValidator;

impl FilterValidator for PermissiveFilterValidator {
    fn validate_filters(&self, _filters: &ComparisonFilters) -> ReconResult<()> {
        Ok(())
    }
}
