use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    account::{write_base_details, Account, AccountInfo},
    error::AccountError,
    format::Percentage,
};

/// Floor a savings balance may not drop below after a withdrawal.
pub const MINIMUM_BALANCE: Decimal = dec!(100);

/// An interest-bearing account. The rate is displayed but never accrued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    info: AccountInfo,
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(number: &str, holder: &str, initial_balance: Decimal, interest_rate: Decimal) -> Self {
        Self {
            info: AccountInfo::new(number, holder, initial_balance),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }
}

impl Account for SavingsAccount {
    fn info(&self) -> &AccountInfo {
        &self.info
    }

    fn deposit(&mut self, amount: Decimal) {
        self.info.credit(amount);
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let available = self.info.balance();
        if available - amount >= MINIMUM_BALANCE {
            self.info.debit(amount);
            Ok(())
        } else {
            tracing::info!(account = %self.info.number(), %amount, %available, "Withdrawal rejected: minimum balance");
            Err(AccountError::MinimumBalance {
                requested: amount,
                available,
                minimum: MINIMUM_BALANCE,
            })
        }
    }

    fn account_type(&self) -> &'static str {
        "Savings Account"
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_base_details(self, f)?;
        writeln!(f, "   Interest Rate: {}", Percentage(self.interest_rate))
    }
}
