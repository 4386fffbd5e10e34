//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is recoverable: callers surface it to the client and keep going.
/// The `Display` text is the message sent back over the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A field was missing, malformed or out of range.
    #[error("{0}")]
    InvalidInput(String),

    /// One of the referenced accounts does not exist.
    #[error("{0}")]
    AccountNotFound(String),

    /// The debited account does not hold enough funds.
    #[error("Insufficient balance")]
    InsufficientBalance,
}

impl LedgerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Generic malformed-request error.
    pub fn malformed() -> Self {
        Self::invalid_input("Invalid input")
    }

    pub fn account_not_found() -> Self {
        Self::AccountNotFound("Account not found".to_string())
    }

    /// Used by operations touching two accounts.
    pub fn accounts_not_found() -> Self {
        Self::AccountNotFound("One or both accounts not found".to_string())
    }

    /// Stable machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::AccountNotFound(_) => "account_not_found",
            Self::InsufficientBalance => "insufficient_balance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_client_message() {
        assert_eq!(LedgerError::malformed().to_string(), "Invalid input");
        assert_eq!(LedgerError::account_not_found().to_string(), "Account not found");
        assert_eq!(
            LedgerError::accounts_not_found().to_string(),
            "One or both accounts not found"
        );
        assert_eq!(LedgerError::InsufficientBalance.to_string(), "Insufficient balance");
    }

    #[test]
    fn codes_are_distinct_per_variant() {
        assert_eq!(LedgerError::malformed().code(), "invalid_input");
        assert_eq!(LedgerError::account_not_found().code(), "account_not_found");
        assert_eq!(LedgerError::accounts_not_found().code(), "account_not_found");
        assert_eq!(LedgerError::InsufficientBalance.code(), "insufficient_balance");
    }
}
