//! Core account types for acctsim.
//!
//! This crate provides the `Account` trait, the generic, savings and current
//! account variants, and the formatting helpers they share.

pub mod account;
pub mod current;
pub mod error;
pub mod format;
pub mod savings;
pub mod summary;

// Re-export key types at crate root for convenience
pub use account::{write_base_details, Account, AccountInfo, GenericAccount};
pub use current::CurrentAccount;
pub use error::AccountError;
pub use format::{Money, Percentage};
pub use savings::{SavingsAccount, MINIMUM_BALANCE};
pub use summary::{BalanceSummary, SummaryRow};
