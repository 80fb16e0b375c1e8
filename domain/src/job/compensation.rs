//! Compensation value object

use crate::core::error::DomainError;

/// How a job pays
///
/// - `Hourly(rate)`: paid per hour worked
/// - `Salaried(yearly)`: a fixed yearly amount, never negative
///
/// Parsing only accepts finite rates and salaries that fit in `i64`.
///
/// # Example
///
/// ```
/// use household_domain::Compensation;
///
/// let pay: Compensation = "hourly:15.5".parse().unwrap();
/// assert_eq!(pay, Compensation::Hourly(15.5));
///
/// let salary: Compensation = "salary:50000".parse().unwrap();
/// assert!(salary.is_salaried());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Compensation {
    Hourly(f64),
    Salaried(u64),
}

impl Compensation {
    pub fn is_hourly(&self) -> bool {
        matches!(self, Compensation::Hourly(_))
    }

    pub fn is_salaried(&self) -> bool {
        matches!(self, Compensation::Salaried(_))
    }
}

impl std::fmt::Display for Compensation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compensation::Hourly(rate) => write!(f, "hourly {}", rate),
            Compensation::Salaried(yearly) => write!(f, "salaried {}", yearly),
        }
    }
}

impl std::str::FromStr for Compensation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let (kind, value) = lowered.split_once(':').ok_or_else(|| {
            DomainError::InvalidCompensation(format!(
                "{}. Valid: hourly:RATE, salary:AMOUNT",
                s
            ))
        })?;

        match kind {
            "hourly" => match value.parse::<f64>() {
                Ok(rate) if rate.is_finite() => Ok(Compensation::Hourly(rate)),
                _ => Err(DomainError::InvalidCompensation(format!(
                    "invalid rate '{}'",
                    value
                ))),
            },
            "salary" | "salaried" => match value.parse::<u64>() {
                Ok(yearly) if yearly <= i64::MAX as u64 => Ok(Compensation::Salaried(yearly)),
                _ => Err(DomainError::InvalidCompensation(format!(
                    "invalid yearly amount '{}'",
                    value
                ))),
            },
            other => Err(DomainError::InvalidCompensation(format!(
                "unknown kind '{}'. Valid: hourly, salary",
                other
            ))),
        }
    }
}
