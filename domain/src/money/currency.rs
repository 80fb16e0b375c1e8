//! Currencies known to the fixed exchange table

use crate::core::error::DomainError;

/// A currency present in the exchange table (Value Object)
///
/// Rates are expressed as units of the currency per 1 USD. Codes are
/// matched exactly, so `"usd"` is not a known currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCurrency {
    Usd,
    Gbp,
    Eur,
    Can,
}

impl KnownCurrency {
    /// Get the currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownCurrency::Usd => "USD",
            KnownCurrency::Gbp => "GBP",
            KnownCurrency::Eur => "EUR",
            KnownCurrency::Can => "CAN",
        }
    }

    /// Units of this currency per 1 USD
    pub fn rate_per_usd(&self) -> f64 {
        match self {
            KnownCurrency::Usd => 1.0,
            KnownCurrency::Gbp => 0.5,
            KnownCurrency::Eur => 1.5,
            KnownCurrency::Can => 1.25,
        }
    }

    /// Every currency in the table
    pub fn all() -> [KnownCurrency; 4] {
        [
            KnownCurrency::Usd,
            KnownCurrency::Gbp,
            KnownCurrency::Eur,
            KnownCurrency::Can,
        ]
    }

    /// Look up a code, returning None for anything outside the table
    pub fn lookup(code: &str) -> Option<Self> {
        code.parse().ok()
    }
}

impl std::fmt::Display for KnownCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for KnownCurrency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(KnownCurrency::Usd),
            "GBP" => Ok(KnownCurrency::Gbp),
            "EUR" => Ok(KnownCurrency::Eur),
            "CAN" => Ok(KnownCurrency::Can),
            other => Err(DomainError::UnknownCurrency(other.to_string())),
        }
    }
}
