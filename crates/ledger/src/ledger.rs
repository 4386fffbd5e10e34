use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use minibank_core::{AccountId, LedgerError, LedgerResult};

use crate::account::Account;

/// Resulting balances of a completed transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferReceipt {
    pub from_balance: f64,
    pub to_balance: f64,
}

/// In-memory ledger: account id → account.
///
/// Every mutating operation holds the write lock from the first check to the
/// last write, so concurrent callers observe each operation as a single step.
/// State is only touched after all checks pass; a poisoned lock is therefore
/// still consistent and is recovered instead of propagated.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an account holding `initial_deposit` and return its fresh id.
    ///
    /// Nothing is inserted (and no id is issued) when validation fails.
    pub fn create_account(&self, initial_deposit: f64) -> LedgerResult<AccountId> {
        if !initial_deposit.is_finite() || initial_deposit < 0.0 {
            return Err(LedgerError::invalid_input(
                "Initial deposit must be a non-negative number",
            ));
        }

        let mut accounts = self.write();
        let mut id = AccountId::new();
        while accounts.contains_key(&id) {
            id = AccountId::new();
        }
        accounts.insert(id, Account::open(initial_deposit));
        Ok(id)
    }

    /// Credit `amount` and return the new balance.
    pub fn deposit(&self, account_id: &AccountId, amount: f64) -> LedgerResult<f64> {
        let mut accounts = self.write();
        let account = accounts
            .get_mut(account_id)
            .ok_or_else(LedgerError::account_not_found)?;
        ensure_positive(amount, "Deposit amount must be positive")?;

        account.credit(amount)?;
        Ok(account.balance())
    }

    /// Debit `amount` and return the new balance.
    pub fn withdraw(&self, account_id: &AccountId, amount: f64) -> LedgerResult<f64> {
        let mut accounts = self.write();
        let account = accounts
            .get_mut(account_id)
            .ok_or_else(LedgerError::account_not_found)?;
        ensure_positive(amount, "Withdrawal amount must be a positive number")?;

        account.debit(amount)?;
        Ok(account.balance())
    }

    /// Move `amount` from one account to another, all-or-nothing.
    ///
    /// A self-transfer is accepted when the balance covers it and is a no-op.
    pub fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: f64,
    ) -> LedgerResult<TransferReceipt> {
        let mut accounts = self.write();
        let (available, target) = match (accounts.get(from), accounts.get(to)) {
            (Some(source), Some(target)) => (source.balance(), target.clone()),
            _ => return Err(LedgerError::accounts_not_found()),
        };
        ensure_positive(amount, "Transfer amount must be positive")?;
        if available < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        // A self-transfer nets to zero; otherwise the credit must stay finite.
        if from != to {
            target.credited(amount)?;
        }

        // All checks passed under the lock; neither step below can fail.
        if let Some(source) = accounts.get_mut(from) {
            source.debit(amount)?;
        }
        if let Some(target) = accounts.get_mut(to) {
            target.credit(amount)?;
        }

        let balance_of = |id: &AccountId| accounts.get(id).map(Account::balance).unwrap_or_default();
        Ok(TransferReceipt {
            from_balance: balance_of(from),
            to_balance: balance_of(to),
        })
    }

    pub fn balance(&self, account_id: &AccountId) -> LedgerResult<f64> {
        self.read()
            .get(account_id)
            .map(Account::balance)
            .ok_or_else(LedgerError::account_not_found)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<AccountId, Account>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AccountId, Account>> {
        self.accounts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn ensure_positive(amount: f64, msg: &'static str) -> LedgerResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::invalid_input(msg))
    }
}
