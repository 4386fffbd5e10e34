//! Amount coercion for values arriving from the wire.
//!
//! Clients may send either a JSON number or a string holding a decimal number.
//! Anything else (null, booleans, containers, garbage, NaN/inf) is rejected.

use serde_json::Value;

use minibank_core::{LedgerError, LedgerResult};

/// Coerce a raw JSON value into a finite `f64`.
///
/// Range checks (positive / non-negative) belong to the ledger operation, not here.
pub fn parse_amount(raw: &Value) -> LedgerResult<f64> {
    let value = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(LedgerError::malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let cases = vec![
            (json!(100), 100.0),
            (json!(12.5), 12.5),
            (json!(-3), -3.0),
            (json!("42"), 42.0),
            (json!(" 7.25 "), 7.25),
            (json!("1e3"), 1000.0),
        ];

        for (raw, expected) in cases {
            assert_eq!(parse_amount(&raw).unwrap(), expected, "input: {raw}");
        }
    }

    #[test]
    fn rejects_non_numeric_values() {
        let cases = vec![
            json!(null),
            json!(true),
            json!("abc"),
            json!(""),
            json!("NaN"),
            json!("inf"),
            json!([1]),
            json!({"amount": 1}),
        ];

        for raw in cases {
            let err = parse_amount(&raw).unwrap_err();
            assert_eq!(err, LedgerError::malformed(), "input: {raw}");
        }
    }
}
