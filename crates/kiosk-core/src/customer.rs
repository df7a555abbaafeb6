//! # Customer
//!
//! A customer with a name and a wallet balance.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;

/// A customer holding a wallet balance.
///
/// The balance never goes negative: a deduction either covers the full
/// amount or fails and leaves the balance untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Display name.
    pub name: String,

    /// Wallet balance.
    balance: Money,
}

impl Customer {
    /// Creates a customer with an opening balance.
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Customer {
            name: name.into(),
            balance,
        }
    }

    /// Current wallet balance.
    #[inline]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Deducts an amount from the wallet.
    ///
    /// Fails with [`CheckoutError::InsufficientFunds`] if the balance cannot
    /// cover the amount; the balance is unchanged in that case.
    pub fn deduct(&mut self, amount: Money) -> CheckoutResult<()> {
        if self.balance < amount {
            return Err(CheckoutError::InsufficientFunds {
                required: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduct_within_balance() {
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));
        customer.deduct(Money::from_cents(41_500)).unwrap();
        assert_eq!(customer.balance(), Money::from_cents(58_500));
    }

    #[test]
    fn test_deduct_beyond_balance_fails_and_preserves_balance() {
        let mut customer = Customer::new("Reham", Money::from_cents(1_000));
        let err = customer.deduct(Money::from_cents(41_500)).unwrap_err();

        assert_eq!(
            err,
            CheckoutError::InsufficientFunds {
                required: Money::from_cents(41_500),
                balance: Money::from_cents(1_000),
            }
        );
        assert_eq!(customer.balance(), Money::from_cents(1_000));
    }

    #[test]
    fn test_deduct_exact_balance_empties_wallet() {
        let mut customer = Customer::new("Reham", Money::from_cents(500));
        customer.deduct(Money::from_cents(500)).unwrap();
        assert!(customer.balance().is_zero());
    }
}
