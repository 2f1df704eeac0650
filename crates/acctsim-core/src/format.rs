use std::fmt::{self, Display};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Writes `value` with exactly two fractional digits, ties rounded to even.
fn write_fixed(f: &mut fmt::Formatter<'_>, value: Decimal) -> fmt::Result {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    write!(f, "{}", rounded)
}

/// A currency amount rendered as `$1234.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        write_fixed(f, self.0)
    }
}

/// A fractional rate rendered as a percentage, `0.02` as `2.00%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentage(pub Decimal);

impl Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.0 * dec!(100))?;
        f.write_str("%")
    }
}
