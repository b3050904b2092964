//! End-to-end coverage of the guard middleware in an axum router

use axum::http::StatusCode;
use axum::{middleware, routing::post, Json, Router};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use strict::prelude::{
    async_trait, guard_request, DescriptorRegistry, FieldViolation, GuardState, IndexMap,
    NoShapeValidation, RouteGuard, ShapeValidator, SubmittedPayload, ValidationFailure,
    ValidatorsConfig,
};

fn registry() -> DescriptorRegistry {
    ValidatorsConfig::from_yaml_str(
        r#"
validators:
  store_user:
    strict: true
    no_empty: true
    rules:
      name: required
      address.street: required
"#,
    )
    .expect("valid validators file")
    .into_registry()
}

async fn create_user(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "created": body }))
}

fn app_with_shape(validator: Option<&str>, shape: Arc<dyn ShapeValidator>) -> Router {
    let state = GuardState::new(Arc::new(registry()), shape);
    let guard = match validator {
        Some(name) => RouteGuard::new(state, name),
        None => RouteGuard::unwired(state),
    };
    Router::new()
        .route("/users", post(create_user))
        .route_layer(middleware::from_fn_with_state(guard, guard_request))
}

fn app(validator: Option<&str>) -> Router {
    app_with_shape(validator, Arc::new(NoShapeValidation))
}

/// Shape delegate rejecting the `email` field unconditionally
struct RejectEmail;

#[async_trait]
impl ShapeValidator for RejectEmail {
    async fn run(
        &self,
        _payload: &SubmittedPayload,
        _rules: &IndexMap<String, String>,
    ) -> Result<(), ValidationFailure> {
        Err(ValidationFailure::new(vec![FieldViolation {
            message: "email must be a valid address".to_string(),
            field: "email".to_string(),
            validation: "email".to_string(),
        }]))
    }
}

#[tokio::test]
async fn declared_fields_pass_through_to_handler() {
    let server = TestServer::new(app(Some("store_user")));
    let response = server
        .post("/users")
        .json(&json!({"name": "Ada", "address": {"street": "Main"}}))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["created"]["name"], "Ada");
}

#[tokio::test]
async fn undeclared_field_is_rejected_with_violations() {
    let server = TestServer::new(app(Some("store_user")));
    let response = server
        .post("/users")
        .json(&json!({"name": "Ada", "address": {"street": "Main"}, "age": 42}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_FAILED");
    let violations = body["details"]["violations"]
        .as_array()
        .expect("violations array");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["field"], "age");
    assert_eq!(violations[0]["validation"], "strict_fields");
}

#[tokio::test]
async fn undeclared_query_parameter_is_rejected() {
    let server = TestServer::new(app(Some("store_user")));
    let response = server
        .post("/users?debug=1")
        .json(&json!({"name": "Ada"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["details"]["violations"][0]["field"], "debug");
}

#[tokio::test]
async fn empty_payload_is_rejected_by_no_empty() {
    let server = TestServer::new(app(Some("store_user")));
    let response = server.post("/users").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["details"]["violations"][0]["validation"],
        "strict_no_empty"
    );
}

#[tokio::test]
async fn shape_and_strict_violations_merge_in_order() {
    let server = TestServer::new(app_with_shape(Some("store_user"), Arc::new(RejectEmail)));
    let response = server
        .post("/users")
        .json(&json!({"name": "Ada", "extra": true}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let violations = body["details"]["violations"]
        .as_array()
        .expect("violations array");
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0]["field"], "email");
    assert_eq!(violations[1]["field"], "extra");
}

#[tokio::test]
async fn unwired_route_is_a_configuration_error() {
    let server = TestServer::new(app(None));
    let response = server.post("/users").json(&json!({"name": "Ada"})).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "MISSING_VALIDATOR");
}

#[tokio::test]
async fn unknown_validator_name_is_a_configuration_error() {
    let server = TestServer::new(app(Some("nonexistent")));
    let response = server.post("/users").json(&json!({"name": "Ada"})).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "UNKNOWN_VALIDATOR");
}
