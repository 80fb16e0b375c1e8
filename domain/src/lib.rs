//! Domain layer for household
//!
//! Plain value and record types with no I/O:
//!
//! - **Money**: immutable amount in a currency, converted through a fixed
//!   USD exchange table
//! - **Job**: hourly or salaried pay that can be raised in place
//! - **Person**: name and age, plus a job and a spouse that are only kept
//!   when the person is old enough
//! - **Family**: founders plus children, with total household income
//!
//! # Example
//!
//! ```
//! use household_domain::{Compensation, Family, Job, Money, Person};
//!
//! let ten_usd = Money::new(10, "USD");
//! assert_eq!(ten_usd.convert("GBP"), Money::new(5, "GBP"));
//!
//! let ted = Person::new("Ted", "Neward", 45).into_shared();
//! ted.borrow_mut()
//!     .set_job(Some(Job::new("Guest Lecturer", Compensation::Salaried(1000)).into_shared()));
//! let charlotte = Person::new("Charlotte", "Neward", 45).into_shared();
//!
//! let mut family = Family::new(ted, charlotte);
//! assert!(family.have_child(Person::new("Mike", "Neward", 15).into_shared()));
//! assert_eq!(family.household_income(), 1000);
//! ```

pub mod core;
pub mod family;
pub mod job;
pub mod money;
pub mod person;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use family::entities::{Family, MIN_PARENT_AGE, WORK_YEAR_HOURS};
pub use job::{
    compensation::Compensation,
    entities::{Job, SharedJob},
};
pub use money::{currency::KnownCurrency, value_objects::Money};
pub use person::entities::{MIN_MARRIAGE_AGE, MIN_WORKING_AGE, Person, SharedPerson};
