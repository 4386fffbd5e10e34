use minibank_core::{LedgerError, LedgerResult};

/// A balance record.
///
/// The balance stays finite and never goes below zero: `credit` and `debit`
/// refuse before touching state.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: f64,
}

impl Account {
    pub(crate) fn open(initial_deposit: f64) -> Self {
        Self {
            balance: initial_deposit,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Balance after crediting `amount`, or an error if it would not be finite.
    pub(crate) fn credited(&self, amount: f64) -> LedgerResult<f64> {
        let next = self.balance + amount;
        if next.is_finite() {
            Ok(next)
        } else {
            Err(LedgerError::invalid_input("Resulting balance is out of range"))
        }
    }

    pub(crate) fn credit(&mut self, amount: f64) -> LedgerResult<()> {
        self.balance = self.credited(amount)?;
        Ok(())
    }

    pub(crate) fn debit(&mut self, amount: f64) -> LedgerResult<()> {
        if self.balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }
}
