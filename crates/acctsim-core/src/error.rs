use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an operation leaves every balance untouched.
///
/// The `Display` text of each variant is the line printed to the console
/// when the operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Insufficient funds!")]
    InsufficientFunds { requested: Decimal, available: Decimal },
    #[error("Withdrawal not allowed. Minimum balance should be maintained.")]
    MinimumBalance { requested: Decimal, available: Decimal, minimum: Decimal },
    #[error("Withdrawal not allowed. Overdraft limit exceeded.")]
    OverdraftExceeded { requested: Decimal, available: Decimal, overdraft_limit: Decimal },
    #[error("Transfer failed. Insufficient funds in the source account.")]
    TransferFailed { requested: Decimal, available: Decimal },
}

impl AccountError {
    /// The amount the rejected operation asked for.
    pub fn requested(&self) -> Decimal {
        match self {
            AccountError::InsufficientFunds { requested, .. }
            | AccountError::MinimumBalance { requested, .. }
            | AccountError::OverdraftExceeded { requested, .. }
            | AccountError::TransferFailed { requested, .. } => *requested,
        }
    }
}
