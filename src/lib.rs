pub mod config;
pub mod display;
pub mod scenario;
pub mod teller;
pub mod transfer;

// Re-export the account model so callers only need this crate
pub use acctsim_core::{
    Account, AccountError, BalanceSummary, CurrentAccount, GenericAccount, SavingsAccount, MINIMUM_BALANCE,
};
