//! Money value object

use super::currency::KnownCurrency;
use crate::core::error::DomainError;
use tracing::trace;

/// An amount of money in a currency (Value Object)
///
/// Immutable: every operation returns a new value. The currency code is
/// free text; only codes in [`KnownCurrency`] take part in conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: i64,
    currency: String,
}

impl Money {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Convert into `target` using the fixed exchange table.
    ///
    /// Goes through USD and truncates toward zero. When either code is
    /// missing from the table the value comes back unchanged.
    pub fn convert(&self, target: &str) -> Money {
        let (Some(from), Some(to)) = (
            KnownCurrency::lookup(&self.currency),
            KnownCurrency::lookup(target),
        ) else {
            trace!(
                from = %self.currency,
                to = target,
                "Currency outside exchange table, leaving money unchanged"
            );
            return self.clone();
        };

        let usd = self.amount as f64 / from.rate_per_usd();
        Money::new((usd * to.rate_per_usd()) as i64, target)
    }

    /// Sum with `other`, expressed in `other`'s currency
    pub fn add(&self, other: &Money) -> Money {
        let converted = self.convert(&other.currency);
        Money::new(converted.amount + other.amount, other.currency.clone())
    }

    /// Difference `self - other`, expressed in `other`'s currency
    pub fn subtract(&self, other: &Money) -> Money {
        let converted = self.convert(&other.currency);
        Money::new(converted.amount - other.amount, other.currency.clone())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl std::str::FromStr for Money {
    type Err = DomainError;

    /// Parse `"<amount> <currency>"`, e.g. `"100 USD"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(amount), Some(currency), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DomainError::InvalidMoney(format!(
                "expected '<amount> <currency>', got '{}'",
                s
            )));
        };

        let amount: i64 = amount
            .parse()
            .map_err(|_| DomainError::InvalidMoney(format!("invalid amount '{}'", amount)))?;

        Ok(Money::new(amount, currency))
    }
}
