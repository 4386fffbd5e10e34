//! Strongly-typed account identifier.

use core::str::FromStr;
use serde::Serialize;
use uuid::Uuid;

use crate::error::LedgerError;

/// Identifier of an account (random UUIDv4, immutable once issued).
///
/// The only accepted spelling is the lowercase hyphenated form it is issued in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Ids are matched by their exact issued text: uppercase, simple, braced or
/// `urn:uuid:` spellings of an issued id name no account.
impl FromStr for AccountId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Uuid::from_str(s) {
            Ok(uuid) if uuid.hyphenated().to_string() == s => Ok(Self(uuid)),
            _ => Err(LedgerError::account_not_found()),
        }
    }
}
