use std::fmt::{self, Display};

use acctsim_core::Account;

/// Full detail block of an account, usable anywhere a `Display` value is.
///
/// ```
/// use acctsim::{display::AccountDetails, GenericAccount};
/// use rust_decimal_macros::dec;
///
/// let account = GenericAccount::new("G1", "Alice", dec!(10));
/// let text = format!("{}--", AccountDetails(&account));
/// assert!(text.ends_with("Balance: $10.00\n--"));
/// ```
pub struct AccountDetails<'a, A: Account + ?Sized>(pub &'a A);

impl<A: Account + ?Sized> Display for AccountDetails<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_details(f)
    }
}

pub fn format_details<A: Account + ?Sized>(account: &A) -> String {
    AccountDetails(account).to_string()
}
