//! Voucher-wise comparison of general and payment ledger balances

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::comparison::{AccountResolver, BalanceQuery, ComparisonFilters};
use crate::report::{ComparisonReport, DiscrepancyRow};
use crate::traits::*;
use crate::types::*;

/// Compares voucher-wise outstanding balances between the general ledger
/// and the payment ledger of a company
///
/// Both ledgers are aggregated independently per (company, account,
/// voucher_no, party); the report surfaces every key whose aggregate rows
/// disagree, including balance mismatches on keys present in both ledgers.
pub struct LedgerComparator<S: LedgerSource> {
    source: S,
    resolver: AccountResolver<S>,
    validator: Box<dyn FilterValidator>,
}

impl<S: LedgerSource + Clone> LedgerComparator<S> {
    /// Create a new comparator over the given data source
    pub fn new(source: S) -> Self {
        Self {
            resolver: AccountResolver::new(source.clone()),
            source,
            validator: Box::new(DefaultFilterValidator),
        }
    }

    /// Create a new comparator with a custom filter validator
    pub fn with_validator(source: S, validator: Box<dyn FilterValidator>) -> Self {
        Self {
            resolver: AccountResolver::new(source.clone()),
            source,
            validator,
        }
    }

    /// Run the comparison for a filter set
    ///
    /// Both ledger queries are read-only snapshots with no isolation taken
    /// across them; the report is best-effort, not consistency-enforcing.
    pub async fn compare(&self, filters: &ComparisonFilters) -> ReconResult<ComparisonReport> {
        self.validator.validate_filters(filters)?;

        let universe = self.resolver.resolve(filters).await?;

        let mut gl_rows = Vec::new();
        let mut pl_rows = Vec::new();
        for (account_type, accounts) in universe.partitions() {
            let query = BalanceQuery::for_partition(filters, account_type, accounts.to_vec());
            gl_rows.extend(self.source.general_ledger_balances(&query).await?);
            pl_rows.extend(self.source.payment_ledger_balances(&query).await?);
        }

        debug!(
            company = %filters.company,
            gl_groups = gl_rows.len(),
            pl_groups = pl_rows.len(),
            "collected aggregate balances"
        );

        let diff = diff_balances(gl_rows, pl_rows);

        let rows = diff
            .into_iter()
            .map(|(key, record)| DiscrepancyRow {
                voucher_no: key.voucher_no,
                party: key.party,
                gl_balance: record.gl_balance,
                pl_balance: record.pl_balance,
            })
            .collect();

        Ok(ComparisonReport::new(rows))
    }
}

/// Symmetric difference of the two aggregate sets, compared over the full
/// row tuple
///
/// A key present on both sides with different balances lands in both
/// differences, so its record carries both balances. A key only in the
/// general ledger keeps `pl_balance` unset; a key only in the payment
/// ledger gets `gl_balance` defaulted to zero.
fn diff_balances(
    gl_rows: Vec<BalanceRow>,
    pl_rows: Vec<BalanceRow>,
) -> HashMap<BalanceKey, DiscrepancyRecord> {
    let gl_balances: HashMap<BalanceKey, BigDecimal> = gl_rows
        .into_iter()
        .map(|row| (row.key(), row.outstanding))
        .collect();
    let pl_balances: HashMap<BalanceKey, BigDecimal> = pl_rows
        .into_iter()
        .map(|row| (row.key(), row.outstanding))
        .collect();

    let mut diff = HashMap::new();

    for (key, outstanding) in &gl_balances {
        if pl_balances.get(key) != Some(outstanding) {
            diff.insert(
                key.clone(),
                DiscrepancyRecord {
                    gl_balance: outstanding.clone(),
                    pl_balance: None,
                },
            );
        }
    }

    for (key, outstanding) in pl_balances {
        if gl_balances.get(&key) != Some(&outstanding) {
            diff.entry(key)
                .or_insert_with(|| DiscrepancyRecord {
                    gl_balance: BigDecimal::from(0),
                    pl_balance: None,
                })
                .pl_balance = Some(outstanding);
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_source::MemoryLedgerSource;
    use chrono::NaiveDate;

    fn row(account: &str, voucher: &str, party: &str, outstanding: i64) -> BalanceRow {
        BalanceRow::new(
            "Wind Power LLC".to_string(),
            account.to_string(),
            voucher.to_string(),
            Some(party.to_string()),
            BigDecimal::from(outstanding),
        )
    }

    #[test]
    fn test_diff_agreeing_rows_produce_no_record() {
        let gl = vec![row("Debtors", "SINV-0001", "Customer A", 100)];
        let pl = vec![row("Debtors", "SINV-0001", "Customer A", 100)];

        assert!(diff_balances(gl, pl).is_empty());
    }

    #[test]
    fn test_diff_balance_mismatch_carries_both_balances() {
        let gl = vec![row("Debtors", "SINV-0001", "Customer A", 100)];
        let pl = vec![row("Debtors", "SINV-0001", "Customer A", 60)];

        let diff = diff_balances(gl, pl);
        assert_eq!(diff.len(), 1);

        let record = diff.values().next().unwrap();
        assert_eq!(record.gl_balance, BigDecimal::from(100));
        assert_eq!(record.pl_balance, Some(BigDecimal::from(60)));
    }

    #[test]
    fn test_diff_payment_only_key_defaults_gl_balance() {
        let diff = diff_balances(vec![], vec![row("Creditors", "PINV-0002", "Supplier B", 50)]);

        let record = diff.values().next().unwrap();
        assert_eq!(record.gl_balance, BigDecimal::from(0));
        assert_eq!(record.pl_balance, Some(BigDecimal::from(50)));
    }

    #[test]
    fn test_diff_general_only_key_leaves_pl_unset() {
        let diff = diff_balances(vec![row("Debtors", "SINV-0003", "Customer C", 75)], vec![]);

        let record = diff.values().next().unwrap();
        assert_eq!(record.gl_balance, BigDecimal::from(75));
        assert_eq!(record.pl_balance, None);
    }

    #[tokio::test]
    async fn test_compare_rejects_blank_company() {
        let source = MemoryLedgerSource::new();
        let comparator = LedgerComparator::new(source);

        let result = comparator
            .compare(&ComparisonFilters::new("  ".to_string()))
            .await;

        assert!(matches!(
            result,
            Err(ReconciliationError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_compare_with_no_accounts_is_empty() {
        let source = MemoryLedgerSource::new();
        let comparator = LedgerComparator::new(source);

        let report = comparator
            .compare(&ComparisonFilters::new("Wind Power LLC".to_string()))
            .await
            .unwrap();

        assert!(report.is_reconciled());
    }

    #[tokio::test]
    async fn test_compare_surfaces_missing_payment_entry() {
        let source = MemoryLedgerSource::new();
        source.add_account(Account::new(
            "Debtors".to_string(),
            "Wind Power LLC".to_string(),
            AccountType::Receivable,
        ));
        source.add_general_entry(GeneralLedgerEntry::debit(
            "Wind Power LLC".to_string(),
            "Debtors".to_string(),
            "SINV-0001".to_string(),
            Some("Customer A".to_string()),
            BigDecimal::from(100),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        ));

        let comparator = LedgerComparator::new(source);
        let report = comparator
            .compare(&ComparisonFilters::new("Wind Power LLC".to_string()))
            .await
            .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.rows[0].voucher_no, "SINV-0001");
        assert_eq!(report.rows[0].gl_balance, BigDecimal::from(100));
        assert_eq!(report.rows[0].pl_balance, None);
    }
}
