//! Core types and data structures for the reconciliation system

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account classifications that participate in reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Receivable - amounts owed to the company (Debtors, Accounts Receivable, etc.)
    Receivable,
    /// Payable - amounts the company owes (Creditors, Accounts Payable, etc.)
    Payable,
}

impl AccountType {
    /// Returns the outstanding balance of a general ledger group under this
    /// classification's sign convention.
    ///
    /// Receivable accounts carry `debit - credit` (positive = owed to us),
    /// payable accounts carry `credit - debit` (positive = owed by us).
    pub fn outstanding(&self, debit: &BigDecimal, credit: &BigDecimal) -> BigDecimal {
        match self {
            AccountType::Receivable => debit - credit,
            AccountType::Payable => credit - debit,
        }
    }
}

/// Account snapshot used to partition ledger rows into scope
///
/// Accounts are identified by name and belong to exactly one company. The
/// reconciliation core never mutates accounts; they are read-only lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account name
    pub name: String,
    /// Company the account belongs to
    pub company: String,
    /// Receivable or Payable classification
    pub account_type: AccountType,
}

impl Account {
    /// Create a new account snapshot
    pub fn new(name: String, company: String, account_type: AccountType) -> Self {
        Self {
            name,
            company,
            account_type,
        }
    }
}

/// A single general ledger entry
///
/// Source of truth for the accounting balance of a voucher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralLedgerEntry {
    /// Company the entry was posted under
    pub company: String,
    /// Account the entry was posted against
    pub account: String,
    /// Voucher the entry belongs to
    pub voucher_no: String,
    /// Counterparty on the voucher, when the row carries one
    pub party: Option<String>,
    /// Debit amount
    pub debit: BigDecimal,
    /// Credit amount
    pub credit: BigDecimal,
    /// Posting date
    pub posting_date: NaiveDate,
    /// Cancelled entries are excluded from every aggregate
    pub is_cancelled: bool,
}

impl GeneralLedgerEntry {
    /// Create a new general ledger entry
    pub fn new(
        company: String,
        account: String,
        voucher_no: String,
        party: Option<String>,
        debit: BigDecimal,
        credit: BigDecimal,
        posting_date: NaiveDate,
    ) -> Self {
        Self {
            company,
            account,
            voucher_no,
            party,
            debit,
            credit,
            posting_date,
            is_cancelled: false,
        }
    }

    /// Create a debit-side entry
    pub fn debit(
        company: String,
        account: String,
        voucher_no: String,
        party: Option<String>,
        amount: BigDecimal,
        posting_date: NaiveDate,
    ) -> Self {
        Self::new(
            company,
            account,
            voucher_no,
            party,
            amount,
            BigDecimal::from(0),
            posting_date,
        )
    }

    /// Create a credit-side entry
    pub fn credit(
        company: String,
        account: String,
        voucher_no: String,
        party: Option<String>,
        amount: BigDecimal,
        posting_date: NaiveDate,
    ) -> Self {
        Self::new(
            company,
            account,
            voucher_no,
            party,
            BigDecimal::from(0),
            amount,
            posting_date,
        )
    }

    /// Mark the entry as cancelled
    pub fn cancelled(mut self) -> Self {
        self.is_cancelled = true;
        self
    }
}

/// A single payment ledger entry
///
/// Source of truth for the payment balance of a voucher. The amount is
/// already signed consistently with the account's classification, so no
/// sign flip is applied during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLedgerEntry {
    /// Company the entry was posted under
    pub company: String,
    /// Account the entry was posted against
    pub account: String,
    /// Voucher the entry belongs to
    pub voucher_no: String,
    /// Counterparty on the voucher, when the row carries one
    pub party: Option<String>,
    /// Signed allocation amount
    pub amount: BigDecimal,
    /// Posting date
    pub posting_date: NaiveDate,
    /// Delinked entries are logically removed and excluded from every aggregate
    pub delinked: bool,
}

impl PaymentLedgerEntry {
    /// Create a new payment ledger entry
    pub fn new(
        company: String,
        account: String,
        voucher_no: String,
        party: Option<String>,
        amount: BigDecimal,
        posting_date: NaiveDate,
    ) -> Self {
        Self {
            company,
            account,
            voucher_no,
            party,
            amount,
            posting_date,
            delinked: false,
        }
    }

    /// Mark the entry as delinked
    pub fn delinked(mut self) -> Self {
        self.delinked = true;
        self
    }
}

/// Grouping key of an aggregate balance row
///
/// Unique per (company, account, voucher_no, party) within one ledger's
/// result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BalanceKey {
    pub company: String,
    pub account: String,
    pub voucher_no: String,
    pub party: Option<String>,
}

/// Aggregate balance row produced by a ledger-side group-and-sum query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// Company the group was aggregated under
    pub company: String,
    /// Account of the group
    pub account: String,
    /// Voucher of the group
    pub voucher_no: String,
    /// Counterparty of the group, when present
    pub party: Option<String>,
    /// Signed outstanding balance of the group
    pub outstanding: BigDecimal,
}

impl BalanceRow {
    /// Create a new aggregate balance row
    pub fn new(
        company: String,
        account: String,
        voucher_no: String,
        party: Option<String>,
        outstanding: BigDecimal,
    ) -> Self {
        Self {
            company,
            account,
            voucher_no,
            party,
            outstanding,
        }
    }

    /// The grouping key of this row
    pub fn key(&self) -> BalanceKey {
        BalanceKey {
            company: self.company.clone(),
            account: self.account.clone(),
            voucher_no: self.voucher_no.clone(),
            party: self.party.clone(),
        }
    }
}

/// Balances recorded for a key whose ledgers disagree
///
/// `gl_balance` defaults to zero when the key appears only in the payment
/// ledger; `pl_balance` stays unset when the key appears only in the general
/// ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancyRecord {
    /// General ledger outstanding balance
    pub gl_balance: BigDecimal,
    /// Payment ledger outstanding balance, when the key has one
    pub pl_balance: Option<BigDecimal>,
}

/// Errors that can occur in the reconciliation system
#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    #[error("Source error: {0}")]
    Source(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for reconciliation operations
pub type ReconResult<T> = Result<T, ReconciliationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outstanding_sign_convention() {
        let debit = BigDecimal::from(100);
        let credit = BigDecimal::from(30);

        assert_eq!(
            AccountType::Receivable.outstanding(&debit, &credit),
            BigDecimal::from(70)
        );
        assert_eq!(
            AccountType::Payable.outstanding(&debit, &credit),
            BigDecimal::from(-70)
        );
    }

    #[test]
    fn test_balance_row_key() {
        let row = BalanceRow::new(
            "Wind Power LLC".to_string(),
            "Debtors".to_string(),
            "SINV-0001".to_string(),
            Some("Customer A".to_string()),
            BigDecimal::from(100),
        );

        let key = row.key();
        assert_eq!(key.company, "Wind Power LLC");
        assert_eq!(key.account, "Debtors");
        assert_eq!(key.voucher_no, "SINV-0001");
        assert_eq!(key.party.as_deref(), Some("Customer A"));
    }
}
