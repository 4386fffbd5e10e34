use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use minibank_core::{AccountId, LedgerError};
use minibank_ledger::Ledger;

use crate::app::{dto, errors};

pub async fn create_account(
    Extension(ledger): Extension<Arc<Ledger>>,
    body: Result<Json<dto::CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match decode(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let account_id = match body
        .initial_deposit()
        .and_then(|amount| ledger.create_account(amount))
    {
        Ok(id) => id,
        Err(e) => return errors::ledger_error_to_response(e),
    };

    tracing::info!(%account_id, accounts = ledger.len(), "account created");

    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Account created successfully",
            "account_id": account_id.to_string(),
        })),
    )
        .into_response()
}

pub async fn deposit(
    Extension(ledger): Extension<Arc<Ledger>>,
    body: Result<Json<dto::DepositRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match decode(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let result = body.into_parts().and_then(|(raw_id, amount)| {
        let account_id: AccountId = raw_id.parse()?;
        ledger.deposit(&account_id, amount)
    });

    match result {
        Ok(balance) => (
            StatusCode::OK,
            Json(json!({ "message": "Deposit successful", "balance": balance })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn withdraw(
    Extension(ledger): Extension<Arc<Ledger>>,
    body: Result<Json<dto::WithdrawRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match decode(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let result = body.into_parts().and_then(|(raw_id, amount)| {
        let account_id: AccountId = raw_id.parse()?;
        ledger.withdraw(&account_id, amount)
    });

    match result {
        Ok(balance) => (
            StatusCode::OK,
            Json(json!({ "message": "Withdrawal successful", "balance": balance })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn transfer(
    Extension(ledger): Extension<Arc<Ledger>>,
    body: Result<Json<dto::TransferRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match decode(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let result = body.into_parts().and_then(|(raw_from, raw_to, amount)| {
        let (Ok(from), Ok(to)) = (raw_from.parse::<AccountId>(), raw_to.parse::<AccountId>()) else {
            return Err(LedgerError::accounts_not_found());
        };
        ledger.transfer(&from, &to, amount)
    });

    match result {
        Ok(receipt) => (
            StatusCode::OK,
            Json(json!({
                "message": "Transfer finished successfully",
                "from_balance": receipt.from_balance,
                "to_balance": receipt.to_balance,
            })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn get_balance(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(account_id): Path<String>,
) -> axum::response::Response {
    let result = account_id
        .parse::<AccountId>()
        .and_then(|id| ledger.balance(&id));

    match result {
        Ok(balance) => (
            StatusCode::OK,
            Json(json!({ "account_id": account_id, "balance": balance })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

/// Any body that fails to decode (bad JSON, wrong field types, missing
/// content type) is reported as plain invalid input.
fn decode<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, axum::response::Response> {
    body.map(|Json(b)| b).map_err(|rejection| {
        tracing::debug!("undecodable request body: {rejection}");
        errors::ledger_error_to_response(LedgerError::malformed())
    })
}
