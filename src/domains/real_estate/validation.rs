//! Required-field validation for listings.
//!
//! A required field must not hold its zero value: text must be non-blank and
//! numbers must be strictly positive. Prices and bath counts must also be
//! finite.

use std::fmt;

use super::model::RealEstateDetails;

/// A single rule broken by a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: &'static str,

    /// What is wrong with it.
    pub kind: ViolationKind,
}

/// Kinds of field violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The field is missing, blank or zero.
    Required,

    /// The field is not a finite number.
    NotFinite,
}

/// All violations found in one listing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    /// Violations in field order; never empty.
    pub violations: Vec<FieldViolation>,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Required => write!(f, "field '{}' is required", self.field),
            ViolationKind::NotFinite => {
                write!(f, "field '{}' must be a finite number", self.field)
            }
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Whether `field` is among the violations.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Check every required field of a listing.
///
/// # Returns
///
/// * `Ok(())` - All fields are present
/// * `Err(ValidationError)` - One entry per offending field
pub fn validate_details(details: &RealEstateDetails) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    check_number("market_price", details.market_price, &mut violations);
    check_text("address", &details.address, &mut violations);
    check_text("city", &details.city, &mut violations);
    check_text("state", &details.state, &mut violations);
    check_text("zip_code", &details.zip_code, &mut violations);
    check_count("beds", i64::from(details.beds), &mut violations);
    check_number("baths", details.baths, &mut violations);
    check_count("sqft", i64::from(details.sqft), &mut violations);
    check_count("year_built", i64::from(details.year_built), &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

fn check_text(field: &'static str, value: &str, violations: &mut Vec<FieldViolation>) {
    if value.trim().is_empty() {
        violations.push(FieldViolation {
            field,
            kind: ViolationKind::Required,
        });
    }
}

fn check_count(field: &'static str, value: i64, violations: &mut Vec<FieldViolation>) {
    if value <= 0 {
        violations.push(FieldViolation {
            field,
            kind: ViolationKind::Required,
        });
    }
}

fn check_number(field: &'static str, value: f64, violations: &mut Vec<FieldViolation>) {
    let kind = if !value.is_finite() {
        ViolationKind::NotFinite
    } else if value <= 0.0 {
        ViolationKind::Required
    } else {
        return;
    };
    violations.push(FieldViolation { field, kind });
}
