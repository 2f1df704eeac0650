use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use acctsim_core::{Account, AccountError, CurrentAccount, SavingsAccount};

/// Fixed amount moved by [`transfer`].
pub const TRANSFER_AMOUNT: Decimal = dec!(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Source debited and destination credited.
    Completed,
    /// The source had at least the amount, but its own withdrawal rule refused
    /// the debit. The destination was credited anyway.
    SourceWithdrawalRejected(AccountError),
}

/// Moves [`TRANSFER_AMOUNT`] from a savings account into a current account.
///
/// The destination is updated in place.
pub fn transfer(destination: &mut CurrentAccount, source: &mut SavingsAccount) -> Result<TransferOutcome, AccountError> {
    transfer_amount(destination, source, TRANSFER_AMOUNT)
}

/// Moves `amount` from `source` into `destination`.
///
/// The only precondition checked here is that the source balance covers the
/// amount. Past that check the source withdrawal runs under the source's own
/// rule and the destination deposit happens whatever that rule decides.
pub fn transfer_amount<D, S>(destination: &mut D, source: &mut S, amount: Decimal) -> Result<TransferOutcome, AccountError>
where
    D: Account + ?Sized,
    S: Account + ?Sized,
{
    let available = source.balance();
    if available < amount {
        tracing::info!(source = %source.number(), destination = %destination.number(), %amount, %available, "Transfer rejected");
        return Err(AccountError::TransferFailed { requested: amount, available });
    }

    let withdrawal = source.withdraw(amount);
    destination.deposit(amount);

    match withdrawal {
        Ok(()) => {
            tracing::debug!(source = %source.number(), destination = %destination.number(), %amount, "Transfer completed");
            Ok(TransferOutcome::Completed)
        }
        Err(e) => {
            tracing::warn!(
                source = %source.number(),
                destination = %destination.number(),
                %amount,
                error = %e,
                "Destination credited but source withdrawal was rejected"
            );
            Ok(TransferOutcome::SourceWithdrawalRejected(e))
        }
    }
}
