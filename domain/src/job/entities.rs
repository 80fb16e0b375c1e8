//! Job entity

use super::compensation::Compensation;
use std::cell::RefCell;
use std::rc::Rc;

/// A job shared between its holders; raises are visible to all of them
pub type SharedJob = Rc<RefCell<Job>>;

/// An employment record (Entity)
///
/// The title is fixed. Compensation changes in place through raises.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    title: String,
    compensation: Compensation,
}

impl Job {
    pub fn new(title: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            title: title.into(),
            compensation,
        }
    }

    /// Wrap this job in a shared handle so it can be assigned to a person
    pub fn into_shared(self) -> SharedJob {
        Rc::new(RefCell::new(self))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn compensation(&self) -> Compensation {
        self.compensation
    }

    /// Income for the given number of hours.
    ///
    /// Salaried jobs ignore `hours`. Hourly pay is truncated toward zero.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.compensation {
            Compensation::Salaried(yearly) => i64::try_from(yearly).unwrap_or(i64::MAX),
            Compensation::Hourly(rate) => (rate * hours as f64) as i64,
        }
    }

    /// Add a fixed amount to the pay.
    ///
    /// Salaried amounts are truncated to whole units and never drop below
    /// zero. Hourly rates are not clamped.
    pub fn raise_by_amount(&mut self, amount: f64) {
        self.compensation = match self.compensation {
            Compensation::Salaried(yearly) => {
                let raised = i64::try_from(yearly)
                    .unwrap_or(i64::MAX)
                    .saturating_add(amount as i64);
                Compensation::Salaried(raised.max(0) as u64)
            }
            Compensation::Hourly(rate) => Compensation::Hourly(rate + amount),
        };
    }

    /// Scale the pay by `1 + percent` (`0.1` is a ten percent raise).
    ///
    /// Same clamping rules as [`Job::raise_by_amount`].
    pub fn raise_by_percent(&mut self, percent: f64) {
        self.compensation = match self.compensation {
            Compensation::Salaried(yearly) => {
                let raised = (yearly as f64 * (1.0 + percent)) as i64;
                Compensation::Salaried(raised.max(0) as u64)
            }
            Compensation::Hourly(rate) => Compensation::Hourly(rate * (1.0 + percent)),
        };
    }
}
