//! Combined body+query field-set extraction
//!
//! The guard evaluates the request's combined top-level data: JSON body
//! fields first in submission order, then query parameters not already
//! present (body takes precedence). The body is buffered and restored so
//! downstream extractors can still consume it.

use axum::body::{to_bytes, Body};
use axum::extract::{Query, Request};
use axum::http::{StatusCode, Uri};
use indexmap::IndexMap;
use serde_json::Value;

use crate::core::guard::SubmittedPayload;

/// Largest body the guard will buffer before handing off
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Extract the combined top-level field set and rebuild the request
///
/// Non-object bodies (empty, invalid JSON, arrays, scalars) contribute no
/// fields; a JSON extractor downstream still rejects malformed bodies on
/// its own terms.
pub async fn submitted_payload(
    request: Request,
) -> Result<(SubmittedPayload, Request), StatusCode> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    let mut payload = body_fields(&bytes);
    merge_query_fields(&mut payload, &parts.uri);

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok((payload, request))
}

fn body_fields(bytes: &[u8]) -> SubmittedPayload {
    if bytes.is_empty() {
        return SubmittedPayload::new();
    }
    serde_json::from_slice::<SubmittedPayload>(bytes).unwrap_or_default()
}

fn merge_query_fields(payload: &mut SubmittedPayload, uri: &Uri) {
    if let Ok(Query(query)) = Query::<IndexMap<String, String>>::try_from_uri(uri) {
        for (key, value) in query {
            if !payload.contains_key(&key) {
                payload.insert(key, Value::String(value));
            }
        }
    }
}
