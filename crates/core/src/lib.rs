//! `minibank-core` — identifiers and the error taxonomy shared by every crate.
//!
//! This crate has no knowledge of HTTP or storage.

pub mod error;
pub mod id;

pub use error::{LedgerError, LedgerResult};
pub use id::AccountId;
