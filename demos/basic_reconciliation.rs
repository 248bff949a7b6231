//! Basic reconciliation usage example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use reconciliation_core::utils::MemoryLedgerSource;
use reconciliation_core::{
    Account, AccountType, ComparisonFiltersBuilder, GeneralLedgerEntry, LedgerComparator,
    PaymentLedgerEntry,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Reconciliation Core - Basic Comparison Example\n");

    // Create an in-memory ledger source and a comparator over it
    let source = MemoryLedgerSource::new();

    // 1. Set up the account universe
    println!("📊 Setting up Accounts...");
    source.add_account(Account::new(
        "Debtors".to_string(),
        "Wind Power LLC".to_string(),
        AccountType::Receivable,
    ));
    source.add_account(Account::new(
        "Creditors".to_string(),
        "Wind Power LLC".to_string(),
        AccountType::Payable,
    ));
    println!("  ✓ Created accounts: Debtors (Receivable), Creditors (Payable)\n");

    // 2. Post ledger entries
    println!("💰 Posting Ledger Entries...\n");

    // A sales invoice fully mirrored in the payment ledger - reconciles
    source.add_general_entry(GeneralLedgerEntry::debit(
        "Wind Power LLC".to_string(),
        "Debtors".to_string(),
        "SINV-0001".to_string(),
        Some("Customer A".to_string()),
        BigDecimal::from(1000),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    ));
    source.add_payment_entry(PaymentLedgerEntry::new(
        "Wind Power LLC".to_string(),
        "Debtors".to_string(),
        "SINV-0001".to_string(),
        Some("Customer A".to_string()),
        BigDecimal::from(1000),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    ));
    println!("  ✓ SINV-0001: ₹1,000 in both ledgers");

    // A sales invoice the payment ledger missed - surfaces in the report
    source.add_general_entry(GeneralLedgerEntry::debit(
        "Wind Power LLC".to_string(),
        "Debtors".to_string(),
        "SINV-0002".to_string(),
        Some("Customer B".to_string()),
        BigDecimal::from(750),
        NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
    ));
    println!("  ✓ SINV-0002: ₹750 only in the general ledger");

    // A purchase invoice whose payment ledger balance drifted - surfaces too
    source.add_general_entry(GeneralLedgerEntry::credit(
        "Wind Power LLC".to_string(),
        "Creditors".to_string(),
        "PINV-0001".to_string(),
        Some("Supplier C".to_string()),
        BigDecimal::from(500),
        NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
    ));
    source.add_payment_entry(PaymentLedgerEntry::new(
        "Wind Power LLC".to_string(),
        "Creditors".to_string(),
        "PINV-0001".to_string(),
        Some("Supplier C".to_string()),
        BigDecimal::from(450),
        NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
    ));
    println!("  ✓ PINV-0001: ₹500 general ledger vs ₹450 payment ledger\n");

    // 3. Run the comparison
    println!("🔍 Comparing Ledgers...\n");
    let comparator = LedgerComparator::new(source);
    let filters = ComparisonFiltersBuilder::new("Wind Power LLC".to_string())
        .period_start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .period_end_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        .build();

    let report = comparator.compare(&filters).await?;

    if report.is_reconciled() {
        println!("  ✓ Ledgers agree on every voucher");
    } else {
        println!("  ⚠ Found {} voucher(s) with discrepancies:\n", report.len());
        for row in &report.rows {
            let party = row.party.as_deref().unwrap_or("-");
            match &row.pl_balance {
                Some(pl_balance) => println!(
                    "    {} ({}): GL balance {} vs payment ledger balance {}",
                    row.voucher_no, party, row.gl_balance, pl_balance
                ),
                None => println!(
                    "    {} ({}): GL balance {} with no payment ledger entry",
                    row.voucher_no, party, row.gl_balance
                ),
            }
        }
    }

    Ok(())
}
