use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use minibank_core::LedgerError;

pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    let status = match &err {
        LedgerError::InvalidInput(_) | LedgerError::InsufficientBalance => StatusCode::BAD_REQUEST,
        LedgerError::AccountNotFound(_) => StatusCode::NOT_FOUND,
    };
    tracing::info!(code = err.code(), "request rejected: {err}");
    json_error(status, err.code(), err.to_string())
}

/// `{"error": <message>, "code": <code>}`
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_variant_to_its_status() {
        let cases = vec![
            (LedgerError::malformed(), StatusCode::BAD_REQUEST),
            (LedgerError::InsufficientBalance, StatusCode::BAD_REQUEST),
            (LedgerError::account_not_found(), StatusCode::NOT_FOUND),
            (LedgerError::accounts_not_found(), StatusCode::NOT_FOUND),
        ];

        for (err, expected) in cases {
            assert_eq!(ledger_error_to_response(err).status(), expected);
        }
    }
}
