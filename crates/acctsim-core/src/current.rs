use std::fmt;

use rust_decimal::Decimal;

use crate::{
    account::{write_base_details, Account, AccountInfo},
    error::AccountError,
    format::Money,
};

/// A transactional account that may go negative down to its overdraft limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAccount {
    info: AccountInfo,
    overdraft_limit: Decimal,
}

impl CurrentAccount {
    pub fn new(number: &str, holder: &str, initial_balance: Decimal, overdraft_limit: Decimal) -> Self {
        Self {
            info: AccountInfo::new(number, holder, initial_balance),
            overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }
}

impl Account for CurrentAccount {
    fn info(&self) -> &AccountInfo {
        &self.info
    }

    fn deposit(&mut self, amount: Decimal) {
        self.info.credit(amount);
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let available = self.info.balance();
        if available - amount >= -self.overdraft_limit {
            self.info.debit(amount);
            Ok(())
        } else {
            tracing::info!(account = %self.info.number(), %amount, %available, "Withdrawal rejected: overdraft limit");
            Err(AccountError::OverdraftExceeded {
                requested: amount,
                available,
                overdraft_limit: self.overdraft_limit,
            })
        }
    }

    fn account_type(&self) -> &'static str {
        "Current Account"
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_base_details(self, f)?;
        writeln!(f, "   Overdraft Limit: {}", Money(self.overdraft_limit))
    }
}
