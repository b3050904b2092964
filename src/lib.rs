//! # Strict-RS
//!
//! A strict request-validation guard for axum pipelines.
//!
//! The guard sits in front of a handler and rejects requests whose submitted
//! top-level field set diverges from the field set a declared validator
//! expects. Per-field value checks (type, format, range) stay with an
//! external [`ShapeValidator`](crate::core::guard::ShapeValidator); this
//! crate owns the field-set reconciliation, the merge of local and upstream
//! violations, and the decision to short-circuit the request.
//!
//! ## Features
//!
//! - **Strict-fields check**: submissions may only contain fields declared
//!   in the validator's rules; dot-notation rule keys count through their
//!   top-level segment (`address.street` allows `address`)
//! - **No-empty check**: optionally reject submissions with no fields at all
//! - **Violation merging**: upstream shape-validation failures and local
//!   strict violations surface as one ordered error response
//! - **Message templates**: literal or computed messages per validation kind
//! - **Declarative validators**: load named descriptors from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strict::prelude::*;
//!
//! let registry = ValidatorsConfig::from_yaml_str(
//!     r#"
//!     validators:
//!       store_user:
//!         strict: true
//!         no_empty: true
//!         rules:
//!           name: required
//!           address.street: required
//!     "#,
//! )?
//! .into_registry();
//!
//! let state = GuardState::new(Arc::new(registry), Arc::new(NoShapeValidation));
//!
//! let app = Router::new()
//!     .route("/users", post(create_user))
//!     .route_layer(middleware::from_fn_with_state(
//!         RouteGuard::new(state, "store_user"),
//!         guard_request,
//!     ));
//! ```

pub mod config;
pub mod core;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        descriptor::{MessageTemplate, ValidatorDescriptor},
        error::{ConfigError, ErrorResponse, GuardError, GuardResult},
        guard::{NoShapeValidation, ShapeValidator, StrictGuard, SubmittedPayload},
        registry::{DescriptorRegistry, DescriptorResolver},
        violation::{FieldViolation, ValidationFailure, STRICT_FIELDS, STRICT_NO_EMPTY},
    };

    // === Config ===
    pub use crate::config::ValidatorsConfig;

    // === Server ===
    pub use crate::server::{
        extract::submitted_payload,
        middleware::{guard_request, GuardState, RouteGuard},
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        middleware,
        routing::{delete, get, post, put},
        Router,
    };
}
