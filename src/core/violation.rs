//! Field-level violations and the failure that aggregates them
//!
//! A [`ValidationFailure`] may originate from the external shape validator
//! or from the guard itself; the guard appends its own violations to an
//! upstream failure so the caller always sees a single ordered list.

use serde::Serialize;
use std::fmt;

/// Validation kind for the no-empty check
pub const STRICT_NO_EMPTY: &str = "strict_no_empty";

/// Validation kind for the strict-fields check
pub const STRICT_FIELDS: &str = "strict_fields";

/// A single offending field
///
/// `validation` names the check that produced the violation: one of the
/// strict kinds above, or a per-field rule key when the violation comes
/// from the shape validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub message: String,
    pub field: String,
    pub validation: String,
}

/// Ordered sequence of violations carried by a rejected request
///
/// Ordering is part of the contract: upstream shape violations come before
/// the guard's own, and strict-fields violations keep submission order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Append violations after the existing ones
    pub fn append(&mut self, mut extra: Vec<FieldViolation>) {
        self.violations.append(&mut extra);
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self
            .violations
            .iter()
            .map(|v| {
                if v.field.is_empty() {
                    v.message.clone()
                } else {
                    format!("{}: {}", v.field, v.message)
                }
            })
            .collect();
        write!(f, "Validation failed: {}", msgs.join(", "))
    }
}

impl std::error::Error for ValidationFailure {}
