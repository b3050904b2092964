//! The strict guard
//!
//! Per request the guard runs a linear pipeline: delegate to the external
//! shape validator, run the no-empty and strict-fields checks against the
//! submitted field set, merge all violations, and either reject or let the
//! request through. Stateless across invocations.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use super::descriptor::ValidatorDescriptor;
use super::error::{ConfigError, GuardError};
use super::fields::{allowed_top_level, wrong_fields};
use super::violation::{FieldViolation, ValidationFailure, STRICT_FIELDS, STRICT_NO_EMPTY};

/// Combined top-level body+query data of the current request
///
/// Values are only carried for the shape delegate; the guard itself reads
/// key presence and submission order.
pub type SubmittedPayload = IndexMap<String, Value>;

/// External per-field rule engine the guard delegates to
///
/// Failure carries violations in the same shape the guard produces, so the
/// two sources merge into a single ordered list.
#[async_trait]
pub trait ShapeValidator: Send + Sync {
    async fn run(
        &self,
        payload: &SubmittedPayload,
        rules: &IndexMap<String, String>,
    ) -> Result<(), ValidationFailure>;
}

/// Accept-everything delegate for pipelines without a rule engine
pub struct NoShapeValidation;

#[async_trait]
impl ShapeValidator for NoShapeValidation {
    async fn run(
        &self,
        _payload: &SubmittedPayload,
        _rules: &IndexMap<String, String>,
    ) -> Result<(), ValidationFailure> {
        Ok(())
    }
}

const NO_EMPTY_FALLBACK: &str = "strict_no_empty validation failed on request";
const STRICT_FIELDS_FALLBACK: &str = "strict validation failed on field";

/// Request-validation guard comparing submitted fields against a descriptor
pub struct StrictGuard;

impl StrictGuard {
    /// Evaluate one request against its validator descriptor
    ///
    /// Returns `Ok(())` when the request may proceed. A missing descriptor
    /// is a configuration error, never a validation failure.
    pub async fn evaluate(
        payload: &SubmittedPayload,
        descriptor: Option<&ValidatorDescriptor>,
        delegate: &dyn ShapeValidator,
    ) -> Result<(), GuardError> {
        let Some(descriptor) = descriptor else {
            return Err(GuardError::Config(ConfigError::MissingValidator));
        };

        // The shape result must be known before any merge decision.
        let shape_failure = delegate.run(payload, &descriptor.rules).await.err();

        let mut local: Vec<FieldViolation> = Vec::new();

        // No-empty only applies when shape validation passed: an empty
        // payload that already failed upstream gets no extra complaint.
        if descriptor.no_empty && shape_failure.is_none() && payload.is_empty() {
            local.push(FieldViolation {
                message: descriptor.compute_message(STRICT_NO_EMPTY, NO_EMPTY_FALLBACK, &[]),
                field: String::new(),
                validation: STRICT_NO_EMPTY.to_string(),
            });
        }

        if descriptor.strict {
            let allowed = allowed_top_level(&descriptor.rules);
            let wrong = wrong_fields(payload.keys().map(String::as_str), &allowed);
            if !wrong.is_empty() {
                debug!(fields = ?wrong, "strict check rejected undeclared fields");

                // The template sees the full offending list even when only
                // the first violation survives truncation below.
                let message =
                    descriptor.compute_message(STRICT_FIELDS, STRICT_FIELDS_FALLBACK, &wrong);
                let mut violations: Vec<FieldViolation> = wrong
                    .iter()
                    .map(|field| FieldViolation {
                        message: message.clone(),
                        field: field.clone(),
                        validation: STRICT_FIELDS.to_string(),
                    })
                    .collect();
                if !descriptor.validate_all {
                    violations.truncate(1);
                }
                local.extend(violations);
            }
        }

        match shape_failure {
            Some(mut failure) => {
                // Upstream violations first, then the guard's own.
                failure.append(local);
                Err(GuardError::Validation(failure))
            }
            None if !local.is_empty() => {
                Err(GuardError::Validation(ValidationFailure::new(local)))
            }
            None => Ok(()),
        }
    }
}
