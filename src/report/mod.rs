//! Tabular shaping of comparison results
//!
//! The comparator produces column descriptors and row records; rendering
//! (grid UI, CSV export, etc.) belongs to the caller.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Data type of a report column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Free-form text
    Text,
    /// Monetary amount in the company's default currency
    Currency,
}

/// Column descriptor for the tabular output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Field name matching the row record field
    pub fieldname: String,
    /// Display label
    pub label: String,
    /// Data type of the column
    pub column_type: ColumnType,
    /// Display width hint
    pub width: u32,
}

impl Column {
    /// Create a new column descriptor
    pub fn new(fieldname: &str, label: &str, column_type: ColumnType, width: u32) -> Self {
        Self {
            fieldname: fieldname.to_string(),
            label: label.to_string(),
            column_type,
            width,
        }
    }
}

/// One output row of the comparison report
///
/// `pl_balance` is omitted from serialized output when absent; a voucher
/// found only in the general ledger has no payment-ledger balance to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancyRow {
    /// Voucher the discrepancy was found on
    pub voucher_no: String,
    /// Counterparty of the voucher, when present
    pub party: Option<String>,
    /// General ledger outstanding balance (zero when the voucher appears
    /// only in the payment ledger)
    pub gl_balance: BigDecimal,
    /// Payment ledger outstanding balance, when the voucher has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_balance: Option<BigDecimal>,
}

/// Complete tabular result of one comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Ordered column descriptors
    pub columns: Vec<Column>,
    /// Ordered row records matching the columns
    pub rows: Vec<DiscrepancyRow>,
}

impl ComparisonReport {
    /// Create a report over the standard comparison columns
    pub fn new(rows: Vec<DiscrepancyRow>) -> Self {
        Self {
            columns: Self::columns(),
            rows,
        }
    }

    /// The standard column set of the comparison report
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("voucher_no", "Voucher No", ColumnType::Text, 100),
            Column::new("party", "Party", ColumnType::Text, 100),
            Column::new("gl_balance", "GL Balance", ColumnType::Currency, 100),
            Column::new(
                "pl_balance",
                "Payment Ledger Balance",
                ColumnType::Currency,
                100,
            ),
        ]
    }

    /// Whether the two ledgers agreed on every voucher in scope
    pub fn is_reconciled(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of discrepancy rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report carries no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
