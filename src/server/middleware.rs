//! Guard middleware for axum routers
//!
//! Wire the guard in front of a route with `middleware::from_fn_with_state`:
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/users", post(create_user))
//!     .route_layer(middleware::from_fn_with_state(
//!         RouteGuard::new(state, "store_user"),
//!         guard_request,
//!     ))
//! ```

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::warn;

use crate::core::error::{ConfigError, GuardError};
use crate::core::guard::{ShapeValidator, StrictGuard};
use crate::core::registry::DescriptorResolver;
use crate::server::extract::submitted_payload;

/// Collaborators shared by every guarded route
#[derive(Clone)]
pub struct GuardState {
    pub resolver: Arc<dyn DescriptorResolver>,
    pub shape: Arc<dyn ShapeValidator>,
}

impl GuardState {
    pub fn new(resolver: Arc<dyn DescriptorResolver>, shape: Arc<dyn ShapeValidator>) -> Self {
        Self { resolver, shape }
    }
}

/// Per-route guard configuration: shared state plus the validator name the
/// route declares
#[derive(Clone)]
pub struct RouteGuard {
    pub state: GuardState,
    pub validator: Option<String>,
}

impl RouteGuard {
    pub fn new(state: GuardState, validator: impl Into<String>) -> Self {
        Self {
            state,
            validator: Some(validator.into()),
        }
    }

    /// A guarded route with no validator declared; every request fails with
    /// a configuration error
    pub fn unwired(state: GuardState) -> Self {
        Self {
            state,
            validator: None,
        }
    }
}

/// Middleware entry point: evaluate the guard, then either call the
/// continuation or render the failure
pub async fn guard_request(
    State(guard): State<RouteGuard>,
    request: Request,
    next: Next,
) -> Response {
    // Configuration errors surface before any payload inspection.
    let Some(name) = guard.validator.as_deref() else {
        warn!("guarded route has no validator declared");
        return GuardError::Config(ConfigError::MissingValidator).into_response();
    };
    let Some(descriptor) = guard.state.resolver.resolve(name) else {
        warn!(validator = name, "no descriptor registered under this name");
        return GuardError::Config(ConfigError::UnknownValidator {
            name: name.to_string(),
        })
        .into_response();
    };

    let (payload, request) = match submitted_payload(request).await {
        Ok(extracted) => extracted,
        Err(status) => return status.into_response(),
    };

    match StrictGuard::evaluate(&payload, Some(&descriptor), guard.state.shape.as_ref()).await {
        Ok(()) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}
