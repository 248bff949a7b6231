//! Validation utilities

use chrono::NaiveDate;

use crate::comparison::ComparisonFilters;
use crate::traits::*;
use crate::types::*;

/// Validate that a company is present
pub fn validate_company(company: &str) -> ReconResult<()> {
    if company.trim().is_empty() {
        return Err(ReconciliationError::Validation(
            "Company cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a posting-date range is ordered
pub fn validate_date_range(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> ReconResult<()> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            return Err(ReconciliationError::Validation(format!(
                "Period start date {} is after period end date {}",
                start, end
            )));
        }
    }

    Ok(())
}

/// Validate that a voucher number is usable as a filter
pub fn validate_voucher_no(voucher_no: &str) -> ReconResult<()> {
    if voucher_no.trim().is_empty() {
        return Err(ReconciliationError::Validation(
            "Voucher number cannot be empty".to_string(),
        ));
    }

    if voucher_no.len() > 140 {
        return Err(ReconciliationError::Validation(
            "Voucher number cannot exceed 140 characters".to_string(),
        ));
    }

    Ok(())
}

/// Enhanced filter validator with detailed checks
pub struct EnhancedFilterValidator;

impl FilterValidator for EnhancedFilterValidator {
    fn validate_filters(&self, filters: &ComparisonFilters) -> ReconResult<()> {
        validate_company(&filters.company)?;
        validate_date_range(filters.period_start_date, filters.period_end_date)?;

        if let Some(ref voucher_no) = filters.voucher_no {
            validate_voucher_no(voucher_no)?;
        }

        for account in &filters.accounts {
            if account.trim().is_empty() {
                return Err(ReconciliationError::Validation(
                    "Account filter entries cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
