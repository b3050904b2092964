//! Demo API with strict-validated routes
//!
//! Run with `cargo run --example strict_api`, then:
//!
//! ```sh
//! curl -X POST localhost:3000/users \
//!   -H 'content-type: application/json' \
//!   -d '{"name": "Ada", "address": {"street": "Main"}, "age": 42}'
//! ```
//!
//! The `age` field is not declared in the ruleset, so the request is
//! rejected with a strict_fields violation.

use axum::{middleware, routing::post, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use strict::prelude::{
    DescriptorRegistry, GuardState, IndexMap, MessageTemplate, NoShapeValidation, RouteGuard,
    ValidatorDescriptor,
};
use strict::server::guard_request;

async fn create_user(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "created": body }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,strict=debug".into()),
        )
        .init();

    let rules: IndexMap<String, String> = IndexMap::from([
        ("name".to_string(), "required|string".to_string()),
        ("address.street".to_string(), "required|string".to_string()),
    ]);
    let registry = DescriptorRegistry::new().register(
        "store_user",
        ValidatorDescriptor {
            rules,
            strict: true,
            no_empty: true,
            validate_all: true,
            messages: HashMap::from([(
                "strict_fields".to_string(),
                MessageTemplate::computed(|fields, _| {
                    format!("undeclared fields: {}", fields.join(", "))
                }),
            )]),
        },
    );

    let state = GuardState::new(Arc::new(registry), Arc::new(NoShapeValidation));

    let app = Router::new()
        .route("/users", post(create_user))
        .route_layer(middleware::from_fn_with_state(
            RouteGuard::new(state, "store_user"),
            guard_request,
        ))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
