use axum::{
    routing::{get, post},
    Router,
};

pub mod accounts;
pub mod system;

/// Router for the ledger endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .route("/create_account", post(accounts::create_account))
        .route("/deposit", post(accounts::deposit))
        .route("/withdraw", post(accounts::withdraw))
        .route("/transfer", post(accounts::transfer))
        .route("/balance/:account_id", get(accounts::get_balance))
}
