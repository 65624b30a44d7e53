//! HTTP route modules.
//!
//! Each module owns its request/response types and exposes a `routes()`
//! builder merged into the application router.

pub mod notes;
pub mod users;
