use serde::{Deserialize, Deserializer};
use serde_json::Value;

use minibank_core::{LedgerError, LedgerResult};
use minibank_ledger::parse_amount;

// -------------------------
// Request DTOs
// -------------------------
//
// Amount fields are kept raw so that an explicit `null` stays distinguishable
// from an absent field, and so strings holding numbers can be coerced.

#[derive(Debug, Default, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default, deserialize_with = "present")]
    pub initial_deposit: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub deposit: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub amount: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub amount: Option<Value>,
}

/// Any value that made it onto the wire, `null` included, is `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl CreateAccountRequest {
    /// Absent means zero; anything present must coerce to a number.
    pub fn initial_deposit(&self) -> LedgerResult<f64> {
        match &self.initial_deposit {
            None => Ok(0.0),
            Some(raw) => parse_amount(raw),
        }
    }
}

impl DepositRequest {
    pub fn into_parts(self) -> LedgerResult<(String, f64)> {
        Ok((required(self.account_id)?, required_amount(self.deposit.as_ref())?))
    }
}

impl WithdrawRequest {
    pub fn into_parts(self) -> LedgerResult<(String, f64)> {
        Ok((required(self.account_id)?, required_amount(self.amount.as_ref())?))
    }
}

impl TransferRequest {
    pub fn into_parts(self) -> LedgerResult<(String, String, f64)> {
        Ok((
            required(self.from_account_id)?,
            required(self.to_account_id)?,
            required_amount(self.amount.as_ref())?,
        ))
    }
}

fn required(field: Option<String>) -> LedgerResult<String> {
    field.ok_or_else(LedgerError::malformed)
}

fn required_amount(field: Option<&Value>) -> LedgerResult<f64> {
    field.ok_or_else(LedgerError::malformed).and_then(parse_amount)
}
