//! Field validators shared by entity constructors and setters
//!
//! Every mutator in the crate funnels through these checks, so an invalid
//! value never reaches stored state. All failures are
//! [`DomainError::Validation`] with a message naming the offending field.

use crate::errors::{DomainError, DomainResult};
use chrono::NaiveDate;

/// Validate a non-empty string field, returning the trimmed value
pub fn non_empty_string(value: &str, field: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a finite, non-negative number
pub fn non_negative_number(value: f64, field: &str) -> DomainResult<f64> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be a number")));
    }
    if value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(value)
}

/// Validate a finite, strictly positive number
pub fn positive_number(value: f64, field: &str) -> DomainResult<f64> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be a number")));
    }
    if value <= 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be positive"
        )));
    }
    Ok(value)
}

/// Validate a commission rate: positive and at most 1.0
pub fn commission_rate(value: f64) -> DomainResult<f64> {
    let rate = positive_number(value, "commission rate")?;
    if rate > 1.0 {
        return Err(DomainError::validation(
            "commission rate must not exceed 100%",
        ));
    }
    Ok(rate)
}

/// Validate a technology stack: every entry non-empty, returned trimmed
pub fn tech_stack(value: &[String]) -> DomainResult<Vec<String>> {
    value
        .iter()
        .map(|tech| non_empty_string(tech, "technology"))
        .collect()
}

/// Parse an ISO `YYYY-MM-DD` deadline into a calendar date
pub fn deadline(value: &str) -> DomainResult<NaiveDate> {
    let trimmed = non_empty_string(value, "deadline")?;
    NaiveDate::parse_from_str(&trimmed, "%Y-%m-%d").map_err(|e| {
        DomainError::validation(format!("deadline must be in YYYY-MM-DD format: {e}"))
    })
}
