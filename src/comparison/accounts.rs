//! Account universe resolution for a comparison run

use tracing::warn;

use crate::comparison::ComparisonFilters;
use crate::traits::LedgerSource;
use crate::types::*;

/// The accounts in scope for one comparison, split by classification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountUniverse {
    /// Receivable partition
    pub receivable: Vec<String>,
    /// Payable partition
    pub payable: Vec<String>,
}

impl AccountUniverse {
    /// Non-empty partitions with their classification
    ///
    /// A partition with no accounts issues no queries.
    pub fn partitions(&self) -> Vec<(AccountType, &[String])> {
        let mut partitions = Vec::new();
        if !self.receivable.is_empty() {
            partitions.push((AccountType::Receivable, self.receivable.as_slice()));
        }
        if !self.payable.is_empty() {
            partitions.push((AccountType::Payable, self.payable.as_slice()));
        }
        partitions
    }

    /// Whether no account is in scope at all
    pub fn is_empty(&self) -> bool {
        self.receivable.is_empty() && self.payable.is_empty()
    }
}

/// Resolves which accounts a comparison run covers
pub struct AccountResolver<S: LedgerSource> {
    source: S,
}

impl<S: LedgerSource> AccountResolver<S> {
    /// Create a new resolver over the given data source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve the account universe for a filter set
    ///
    /// Without an explicit account filter, the universe is every receivable
    /// and every payable account of the company. With one, the universe is
    /// exactly the listed accounts, re-classified into partitions by each
    /// account's own type; names that match no account are skipped.
    pub async fn resolve(&self, filters: &ComparisonFilters) -> ReconResult<AccountUniverse> {
        if filters.accounts.is_empty() {
            return self.resolve_company_universe(&filters.company).await;
        }
        self.resolve_filtered_universe(&filters.accounts).await
    }

    async fn resolve_company_universe(&self, company: &str) -> ReconResult<AccountUniverse> {
        let receivable = self
            .source
            .list_accounts(company, Some(AccountType::Receivable))
            .await?
            .into_iter()
            .map(|account| account.name)
            .collect();

        let payable = self
            .source
            .list_accounts(company, Some(AccountType::Payable))
            .await?
            .into_iter()
            .map(|account| account.name)
            .collect();

        Ok(AccountUniverse {
            receivable,
            payable,
        })
    }

    async fn resolve_filtered_universe(&self, names: &[String]) -> ReconResult<AccountUniverse> {
        let accounts = self.source.find_accounts(names).await?;

        for name in names {
            if !accounts.iter().any(|account| &account.name == name) {
                warn!(account = %name, "account filter entry matched no account, skipping");
            }
        }

        let mut universe = AccountUniverse::default();
        for account in accounts {
            match account.account_type {
                AccountType::Receivable => universe.receivable.push(account.name),
                AccountType::Payable => universe.payable.push(account.name),
            }
        }

        Ok(universe)
    }
}
