//! Builds a family from a roster

use crate::config::{FileConfig, FilePersonConfig};
use anyhow::{Context, Result, bail};
use household_domain::{Family, SharedPerson};
use tracing::{info, warn};

/// A family built from a roster, plus the children it turned away
pub struct Household {
    pub family: Family,
    pub rejected: Vec<SharedPerson>,
}

impl Household {
    /// Found the family from the two founders, then add children in order.
    ///
    /// Validation issues abort the build; a refused child does not.
    pub fn from_config(config: &FileConfig) -> Result<Self> {
        let issues = config.validate();
        if !issues.is_empty() {
            let listing = issues
                .iter()
                .map(|i| format!("  - {}", i))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("Roster has {} issue(s):\n{}", issues.len(), listing);
        }

        let [first, second] = config.founders.as_slice() else {
            bail!("Roster must list exactly two founders");
        };

        let mut family = Family::new(person(first)?, person(second)?);
        let mut rejected = Vec::new();

        for entry in &config.children {
            let child = person(entry)?;
            if family.have_child(child.clone()) {
                info!(child = %entry.first_name, "Child added");
            } else {
                warn!(child = %entry.first_name, "Family cannot have a child yet");
                rejected.push(child);
            }
        }

        Ok(Self { family, rejected })
    }

    pub fn income(&self) -> i64 {
        self.family.household_income()
    }
}

fn person(entry: &FilePersonConfig) -> Result<SharedPerson> {
    entry
        .to_person()
        .with_context(|| format!("Invalid roster entry for {}", entry.first_name))
}
