//! Filter configuration for a comparison run

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::AccountType;

/// Caller-supplied filters restricting a comparison run
///
/// `company` restricts every query. An explicit account list overrides the
/// default receivable/payable universe; each listed account is re-classified
/// by its own type. Voucher and posting-date bounds apply to both ledgers
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonFilters {
    /// Company under comparison
    pub company: String,
    /// Explicit account universe; empty means all receivable and payable
    /// accounts of the company
    pub accounts: Vec<String>,
    /// Restrict both ledgers to one voucher
    pub voucher_no: Option<String>,
    /// Inclusive lower posting-date bound
    pub period_start_date: Option<NaiveDate>,
    /// Inclusive upper posting-date bound
    pub period_end_date: Option<NaiveDate>,
}

impl ComparisonFilters {
    /// Create a filter set restricted to one company
    pub fn new(company: String) -> Self {
        Self {
            company,
            ..Default::default()
        }
    }
}

/// Builder for assembling filter sets
#[derive(Debug)]
pub struct ComparisonFiltersBuilder {
    filters: ComparisonFilters,
}

impl ComparisonFiltersBuilder {
    /// Create a new builder for the given company
    pub fn new(company: String) -> Self {
        Self {
            filters: ComparisonFilters::new(company),
        }
    }

    /// Add an account to the explicit account universe
    pub fn account(mut self, account: String) -> Self {
        self.filters.accounts.push(account);
        self
    }

    /// Restrict the comparison to one voucher
    pub fn voucher_no(mut self, voucher_no: String) -> Self {
        self.filters.voucher_no = Some(voucher_no);
        self
    }

    /// Set the inclusive lower posting-date bound
    pub fn period_start_date(mut self, date: NaiveDate) -> Self {
        self.filters.period_start_date = Some(date);
        self
    }

    /// Set the inclusive upper posting-date bound
    pub fn period_end_date(mut self, date: NaiveDate) -> Self {
        self.filters.period_end_date = Some(date);
        self
    }

    /// Build the filter set
    pub fn build(self) -> ComparisonFilters {
        self.filters
    }
}

/// One partition's aggregate query against a ledger data source
///
/// Carries the account classification so a general ledger backend can apply
/// the partition's sign convention; payment ledger backends ignore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceQuery {
    /// Company restriction
    pub company: String,
    /// Classification of every account in this partition
    pub account_type: AccountType,
    /// Accounts in scope, all of `account_type`
    pub accounts: Vec<String>,
    /// Optional voucher restriction
    pub voucher_no: Option<String>,
    /// Inclusive lower posting-date bound
    pub period_start_date: Option<NaiveDate>,
    /// Inclusive upper posting-date bound
    pub period_end_date: Option<NaiveDate>,
}

impl BalanceQuery {
    /// Build the query for one partition of the account universe
    pub fn for_partition(
        filters: &ComparisonFilters,
        account_type: AccountType,
        accounts: Vec<String>,
    ) -> Self {
        Self {
            company: filters.company.clone(),
            account_type,
            accounts,
            voucher_no: filters.voucher_no.clone(),
            period_start_date: filters.period_start_date,
            period_end_date: filters.period_end_date,
        }
    }

    /// Whether an account is in scope for this query
    pub fn includes_account(&self, account: &str) -> bool {
        self.accounts.iter().any(|a| a == account)
    }

    /// Whether a voucher passes the optional voucher restriction
    pub fn matches_voucher(&self, voucher_no: &str) -> bool {
        self.voucher_no
            .as_ref()
            .is_none_or(|v| v == voucher_no)
    }

    /// Whether a posting date falls inside the optional period bounds
    pub fn within_period(&self, posting_date: NaiveDate) -> bool {
        if let Some(start) = self.period_start_date {
            if posting_date < start {
                return false;
            }
        }
        if let Some(end) = self.period_end_date {
            if posting_date > end {
                return false;
            }
        }
        true
    }
}
