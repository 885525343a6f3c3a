//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places every monetary value is displayed with.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Represents a monetary amount with currency.
///
/// `Display` renders the currency symbol followed by the amount fixed to
/// two decimal places, e.g. `$176.00` or `$-4.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
}

impl Currency {
    /// Symbol placed before displayed amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), to_fixed(self.amount))
    }
}

/// Rounds an amount half away from zero to two places and pins the scale,
/// so `176` displays as `176.00`.
#[must_use]
pub fn to_fixed(amount: Decimal) -> Decimal {
    let mut fixed =
        amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    if fixed.is_zero() {
        fixed = Decimal::ZERO;
    }
    fixed.rescale(DISPLAY_DECIMALS);
    fixed
}

/// Formats a count field with no decimal places.
#[must_use]
pub fn format_count(count: i64) -> String {
    count.to_string()
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
