//! In-memory ledger source implementation for testing

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::comparison::BalanceQuery;
use crate::traits::*;
use crate::types::*;

/// In-memory ledger source for testing and development
///
/// Holds fixture accounts and raw ledger entries, and answers the aggregate
/// queries a database backend would push into its engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerSource {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    general_entries: Arc<RwLock<Vec<GeneralLedgerEntry>>>,
    payment_entries: Arc<RwLock<Vec<PaymentLedgerEntry>>>,
}

impl MemoryLedgerSource {
    /// Create a new memory source instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixture account
    pub fn add_account(&self, account: Account) {
        self.accounts
            .write()
            .unwrap()
            .insert(account.name.clone(), account);
    }

    /// Add a fixture general ledger entry
    pub fn add_general_entry(&self, entry: GeneralLedgerEntry) {
        self.general_entries.write().unwrap().push(entry);
    }

    /// Add a fixture payment ledger entry
    pub fn add_payment_entry(&self, entry: PaymentLedgerEntry) {
        self.payment_entries.write().unwrap().push(entry);
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
        self.general_entries.write().unwrap().clear();
        self.payment_entries.write().unwrap().clear();
    }
}

#[async_trait]
impl LedgerSource for MemoryLedgerSource {
    async fn list_accounts(
        &self,
        company: &str,
        account_type: Option<AccountType>,
    ) -> ReconResult<Vec<Account>> {
        let accounts = self.accounts.read().unwrap();
        let filtered: Vec<Account> = accounts
            .values()
            .filter(|account| {
                account.company == company
                    && account_type.is_none_or(|t| account.account_type == t)
            })
            .cloned()
            .collect();
        Ok(filtered)
    }

    async fn find_accounts(&self, names: &[String]) -> ReconResult<Vec<Account>> {
        let accounts = self.accounts.read().unwrap();
        let found: Vec<Account> = names
            .iter()
            .filter_map(|name| accounts.get(name).cloned())
            .collect();
        Ok(found)
    }

    async fn general_ledger_balances(&self, query: &BalanceQuery) -> ReconResult<Vec<BalanceRow>> {
        let entries = self.general_entries.read().unwrap();
        let mut groups: HashMap<BalanceKey, (BigDecimal, BigDecimal)> = HashMap::new();

        for entry in entries.iter() {
            if entry.is_cancelled
                || entry.company != query.company
                || !query.includes_account(&entry.account)
                || !query.matches_voucher(&entry.voucher_no)
                || !query.within_period(entry.posting_date)
            {
                continue;
            }

            let key = BalanceKey {
                company: entry.company.clone(),
                account: entry.account.clone(),
                voucher_no: entry.voucher_no.clone(),
                party: entry.party.clone(),
            };
            let (debit, credit) = groups
                .entry(key)
                .or_insert_with(|| (BigDecimal::from(0), BigDecimal::from(0)));
            *debit += &entry.debit;
            *credit += &entry.credit;
        }

        let rows = groups
            .into_iter()
            .map(|(key, (debit, credit))| {
                let outstanding = query.account_type.outstanding(&debit, &credit);
                BalanceRow {
                    company: key.company,
                    account: key.account,
                    voucher_no: key.voucher_no,
                    party: key.party,
                    outstanding,
                }
            })
            .collect();
        Ok(rows)
    }

    async fn payment_ledger_balances(&self, query: &BalanceQuery) -> ReconResult<Vec<BalanceRow>> {
        let entries = self.payment_entries.read().unwrap();
        let mut groups: HashMap<BalanceKey, BigDecimal> = HashMap::new();

        for entry in entries.iter() {
            if entry.delinked
                || entry.company != query.company
                || !query.includes_account(&entry.account)
                || !query.matches_voucher(&entry.voucher_no)
                || !query.within_period(entry.posting_date)
            {
                continue;
            }

            let key = BalanceKey {
                company: entry.company.clone(),
                account: entry.account.clone(),
                voucher_no: entry.voucher_no.clone(),
                party: entry.party.clone(),
            };
            let outstanding = groups.entry(key).or_insert_with(|| BigDecimal::from(0));
            *outstanding += &entry.amount;
        }

        let rows = groups
            .into_iter()
            .map(|(key, outstanding)| BalanceRow {
                company: key.company,
                account: key.account,
                voucher_no: key.voucher_no,
                party: key.party,
                outstanding,
            })
            .collect();
        Ok(rows)
    }
}
