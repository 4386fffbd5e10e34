//! HTTP API application wiring (Axum router + ledger injection).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and field coercion
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use minibank_ledger::Ledger;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around the given ledger.
///
/// Each call gets whatever ledger it is handed, so tests can run against
/// isolated instances.
pub fn build_app(ledger: Arc<Ledger>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log))
                .layer(Extension(ledger)),
        )
}
