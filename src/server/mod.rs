//! Pipeline glue: payload field-set extraction and guard middleware

pub mod extract;
pub mod middleware;

pub use extract::submitted_payload;
pub use middleware::{guard_request, GuardState, RouteGuard};
