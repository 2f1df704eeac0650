use std::{fmt, sync::Arc};

use rust_decimal::Decimal;

use crate::{error::AccountError, format::Money};

/// Identity and balance shared by every account variant.
///
/// The balance can only be moved by the account types in this crate, through
/// their `deposit` and `withdraw` implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    number: Arc<str>,
    holder: Arc<str>,
    balance: Decimal,
}

impl AccountInfo {
    pub fn new(number: &str, holder: &str, initial_balance: Decimal) -> Self {
        Self {
            number: Arc::from(number),
            holder: Arc::from(holder),
            balance: initial_balance,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub(crate) fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
        tracing::debug!(account = %self.number, %amount, balance = %self.balance, "Deposit applied");
    }

    pub(crate) fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
        tracing::debug!(account = %self.number, %amount, balance = %self.balance, "Withdrawal applied");
    }
}

/// Operations every account supports.
///
/// `withdraw`, `account_type` and `write_details` are resolved per concrete
/// type, so calls through `&dyn Account` pick up the variant's rules.
pub trait Account: fmt::Debug {
    fn info(&self) -> &AccountInfo;

    fn deposit(&mut self, amount: Decimal);

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError>;

    fn account_type(&self) -> &'static str {
        "Generic Account"
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_base_details(self, f)
    }

    fn number(&self) -> &str {
        self.info().number()
    }

    fn holder(&self) -> &str {
        self.info().holder()
    }

    fn balance(&self) -> Decimal {
        self.info().balance()
    }
}

/// Writes the three-line block common to all variants.
pub fn write_base_details<A: Account + ?Sized>(account: &A, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Account Details for {} (ID: {}):", account.account_type(), account.number())?;
    writeln!(f, "   Holder: {}", account.holder())?;
    writeln!(f, "   Balance: {}", Money(account.balance()))
}

/// The base variant: withdrawals are limited to the current balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericAccount {
    info: AccountInfo,
}

impl GenericAccount {
    pub fn new(number: &str, holder: &str, initial_balance: Decimal) -> Self {
        Self {
            info: AccountInfo::new(number, holder, initial_balance),
        }
    }
}

impl Account for GenericAccount {
    fn info(&self) -> &AccountInfo {
        &self.info
    }

    fn deposit(&mut self, amount: Decimal) {
        self.info.credit(amount);
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let available = self.info.balance();
        if amount <= available {
            self.info.debit(amount);
            Ok(())
        } else {
            tracing::info!(account = %self.info.number(), %amount, %available, "Withdrawal rejected: insufficient funds");
            Err(AccountError::InsufficientFunds { requested: amount, available })
        }
    }
}
