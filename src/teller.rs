use std::io::{self, Write};

use rust_decimal::Decimal;

use acctsim_core::{Account, BalanceSummary, CurrentAccount, SavingsAccount};

use crate::{
    display::AccountDetails,
    transfer::{self, TransferOutcome},
};

/// Console front for the account operations.
///
/// Every rejected operation prints its message as one line on the wrapped
/// writer and leaves the balances as they were.
pub struct Teller<W: Write> {
    out: W,
}

impl<W: Write> Teller<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn announce(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    pub fn show<A: Account + ?Sized>(&mut self, account: &A) -> io::Result<()> {
        write!(self.out, "{}", AccountDetails(account))
    }

    pub fn show_summary(&mut self, summary: &BalanceSummary) -> io::Result<()> {
        write!(self.out, "{}", summary)
    }

    pub fn deposit<A: Account + ?Sized>(&mut self, account: &mut A, amount: Decimal) -> io::Result<()> {
        account.deposit(amount);
        Ok(())
    }

    /// Returns whether the withdrawal was applied.
    pub fn withdraw<A: Account + ?Sized>(&mut self, account: &mut A, amount: Decimal) -> io::Result<bool> {
        match account.withdraw(amount) {
            Ok(()) => Ok(true),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(false)
            }
        }
    }

    /// Runs [`transfer::transfer`] and hands back the updated destination.
    pub fn transfer<'a>(
        &mut self,
        destination: &'a mut CurrentAccount,
        source: &mut SavingsAccount,
    ) -> io::Result<&'a CurrentAccount> {
        match transfer::transfer(destination, source) {
            Ok(TransferOutcome::Completed) => {}
            Ok(TransferOutcome::SourceWithdrawalRejected(e)) | Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn output(teller: Teller<Vec<u8>>) -> String {
        String::from_utf8(teller.into_inner()).unwrap()
    }

    #[test]
    fn test_rejected_withdrawal_prints_message() {
        let mut teller = Teller::new(Vec::new());
        let mut savings = SavingsAccount::new("S1", "A", dec!(150), dec!(0.01));

        assert!(!teller.withdraw(&mut savings, dec!(60)).unwrap());
        assert!(teller.withdraw(&mut savings, dec!(50)).unwrap());
        assert_eq!(savings.balance(), dec!(100));
        assert_eq!(output(teller), "Withdrawal not allowed. Minimum balance should be maintained.\n");
    }

    #[test]
    fn test_withdraw_through_base_handle() {
        let mut teller = Teller::new(Vec::new());
        let mut current = CurrentAccount::new("C1", "B", dec!(0), dec!(100));
        let handle: &mut dyn Account = &mut current;

        assert!(!teller.withdraw(handle, dec!(101)).unwrap());
        assert_eq!(current.balance(), Decimal::ZERO);
        assert_eq!(output(teller), "Withdrawal not allowed. Overdraft limit exceeded.\n");
    }

    #[test]
    fn test_deposit_prints_nothing() {
        let mut teller = Teller::new(Vec::new());
        let mut current = CurrentAccount::new("C1", "B", dec!(0), dec!(100));
        teller.deposit(&mut current, dec!(-5)).unwrap();
        assert_eq!(current.balance(), dec!(-5));
        assert_eq!(output(teller), "");
    }

    #[test]
    fn test_failed_transfer_prints_message() {
        let mut teller = Teller::new(Vec::new());
        let mut current = CurrentAccount::new("C1", "B", dec!(10), dec!(100));
        let mut savings = SavingsAccount::new("S1", "A", dec!(200), dec!(0.01));

        let updated = teller.transfer(&mut current, &mut savings).unwrap();
        assert_eq!(updated.balance(), dec!(10));
        assert_eq!(savings.balance(), dec!(200));
        assert_eq!(output(teller), "Transfer failed. Insufficient funds in the source account.\n");
    }

    #[test]
    fn test_transfer_with_source_rejection_prints_withdrawal_message() {
        let mut teller = Teller::new(Vec::new());
        let mut current = CurrentAccount::new("C1", "B", dec!(10), dec!(100));
        let mut savings = SavingsAccount::new("S1", "A", dec!(300), dec!(0.01));

        let updated = teller.transfer(&mut current, &mut savings).unwrap();
        assert_eq!(updated.balance(), dec!(310));
        assert_eq!(savings.balance(), dec!(300));
        assert_eq!(output(teller), "Withdrawal not allowed. Minimum balance should be maintained.\n");
    }
}
