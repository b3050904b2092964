//! Core module containing the guard, its data model and error types

pub mod descriptor;
pub mod error;
pub mod fields;
pub mod guard;
pub mod registry;
pub mod violation;

pub use descriptor::{MessageTemplate, ValidatorDescriptor};
pub use error::{ConfigError, ErrorResponse, GuardError, GuardResult};
pub use guard::{NoShapeValidation, ShapeValidator, StrictGuard, SubmittedPayload};
pub use registry::{DescriptorRegistry, DescriptorResolver};
pub use violation::{FieldViolation, ValidationFailure};
