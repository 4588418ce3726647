//! Monetary amounts as exported by the bank.
//!
//! Wraps `rust_decimal` so comma-decimal numerals such as `12,34` are read
//! exactly, and renders them with the two decimals QIF expects.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// A signed monetary amount.
///
/// # Examples
///
/// ```
/// use csv2qif::Amount;
///
/// let amount = Amount::parse_comma_decimal("12,34").unwrap();
/// assert_eq!(amount.to_string(), "12.34");
/// assert_eq!((-amount).to_string(), "-12.34");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Decimal places in the rendered amount.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Creates an `Amount`, folding negative zero into zero.
    pub fn new(value: Decimal) -> Self {
        let mut value = value;
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Amount(value)
    }

    /// Parses a numeral that uses a comma as decimal separator.
    ///
    /// Only the first comma is turned into a period, so `1,234,56` is
    /// rejected rather than silently misread. Besides a leading sign only
    /// digits and that one period are accepted; `rust_decimal` on its own
    /// would also take `1_000` and `1e3`.
    pub fn parse_comma_decimal(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        let numeral = s.replacen(',', ".", 1);
        check_plain_numeral(&numeral)?;
        numeral.parse()
    }

    /// Returns the negated absolute value.
    pub fn negative_abs(self) -> Self {
        Amount::new(-self.0.abs())
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Accepts `[+-]digits[.digits]` with at least one digit.
fn check_plain_numeral(s: &str) -> std::result::Result<(), rust_decimal::Error> {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let mut digits = 0;
    let mut points = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => {
                return Err(rust_decimal::Error::ErrorString(format!(
                    "invalid character {:?} in amount",
                    c
                )))
            }
        }
    }
    if digits == 0 || points > 1 {
        return Err(rust_decimal::Error::ErrorString(format!(
            "{:?} is not a plain decimal number",
            s
        )));
    }
    Ok(())
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Amount::new(Decimal::from_str(s)?))
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Amount::new(-self.0)
    }
}

/// Renders two decimals, rounding half away from zero (`1.005` -> `1.01`);
/// zero is always `0.00`, never `-0.00`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::DISPLAY_SCALE);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        write!(f, "{}", rounded)
    }
}
