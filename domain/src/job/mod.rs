//! Employment records.
//!
//! - [`compensation::Compensation`] — hourly rate or yearly salary
//! - [`entities::Job`] — a titled job whose pay can be raised in place

pub mod compensation;
pub mod entities;
