//! Input validation helpers shared by handlers.
//!
//! Validation in this service is deliberately thin: presence checks live
//! in the handlers (missing fields are request-shape concerns), while the
//! three semantic rules -- email syntax, price positivity, and campaign
//! date ordering -- live here so they are applied identically everywhere.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Same permissive pattern the lead-capture forms use: one `@`, no
/// whitespace, at least one dot in the domain part.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Whether `email` is syntactically plausible.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A price (ad slot base price, campaign budget) must be strictly positive.
pub fn validate_positive_price(field: &str, value: f64) -> Result<(), CoreError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be greater than 0"
        )))
    }
}

/// A campaign must start before it ends. Enforced at creation only; the
/// update path intentionally skips this check (see DESIGN.md).
pub fn validate_date_order(start: Timestamp, end: Timestamp) -> Result<(), CoreError> {
    if start < end {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "startDate must be before endDate".into(),
        ))
    }
}
