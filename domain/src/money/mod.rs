//! Money and the fixed currency exchange table.
//!
//! - [`value_objects::Money`] — immutable amount plus currency code
//! - [`currency::KnownCurrency`] — the codes the exchange table knows

pub mod currency;
pub mod value_objects;
