//! `minibank-ledger` — the in-memory account ledger.
//!
//! Owns the account mapping and enforces the balance invariants on every
//! mutation. Nothing here knows about HTTP.

pub mod account;
pub mod amount;
pub mod ledger;

pub use account::Account;
pub use amount::parse_amount;
pub use ledger::{Ledger, TransferReceipt};

pub use minibank_core::{AccountId, LedgerError, LedgerResult};
