//! Raw TOML roster data types
//!
//! These structs mirror the roster file. Compensation stays a string here
//! and is parsed into the domain type when the family is built.

use household_domain::{Compensation, DomainError, Job, Person, SharedPerson};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// The two founding members
    pub founders: Vec<FilePersonConfig>,
    /// Children, added in order after the family is founded
    pub children: Vec<FilePersonConfig>,
}

impl FileConfig {
    /// Validate the roster, returning every issue found.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.founders.len() != 2 {
            issues.push(ConfigIssue::new(
                "founders",
                format!("expected exactly 2 founders, found {}", self.founders.len()),
            ));
        }

        let people = self
            .founders
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("founders[{}]", i), p))
            .chain(
                self.children
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (format!("children[{}]", i), p)),
            );

        for (field, person) in people {
            issues.extend(person.validate(&field));
        }

        issues
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Print every member before the income total
    pub show_members: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { show_members: true }
    }
}

/// One person in the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePersonConfig {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<FileJobConfig>,
}

impl FilePersonConfig {
    fn validate(&self, field: &str) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.first_name.trim().is_empty() {
            issues.push(ConfigIssue::new(
                format!("{}.first_name", field),
                "name is empty",
            ));
        }
        if self.last_name.trim().is_empty() {
            issues.push(ConfigIssue::new(
                format!("{}.last_name", field),
                "name is empty",
            ));
        }
        if let Some(job) = &self.job {
            if let Err(e) = job.parse_compensation() {
                issues.push(ConfigIssue::new(
                    format!("{}.job.compensation", field),
                    e.to_string(),
                ));
            }
        }

        issues
    }

    /// Build the domain person, assigning the job through the age filter
    pub fn to_person(&self) -> Result<SharedPerson, DomainError> {
        let mut person = Person::new(&self.first_name, &self.last_name, self.age);
        if let Some(job) = &self.job {
            person.set_job(Some(job.to_job()?.into_shared()));
        }
        Ok(person.into_shared())
    }
}

/// A job entry: `{ title = "...", compensation = "salary:50000" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileJobConfig {
    pub title: String,
    pub compensation: String,
}

impl FileJobConfig {
    pub fn parse_compensation(&self) -> Result<Compensation, DomainError> {
        self.compensation.parse()
    }

    pub fn to_job(&self) -> Result<Job, DomainError> {
        Ok(Job::new(&self.title, self.parse_compensation()?))
    }
}

/// A problem found while validating the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn founder(first: &str, age: u32) -> FilePersonConfig {
        FilePersonConfig {
            first_name: first.to_string(),
            last_name: "Neward".to_string(),
            age,
            job: None,
        }
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.founders.is_empty());
        assert!(config.children.is_empty());
        assert!(config.output.show_members);
    }

    #[test]
    fn test_validate_founder_count() {
        let config = FileConfig {
            founders: vec![founder("Ted", 45)],
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "founders");
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut bad_job = founder("Ted", 45);
        bad_job.job = Some(FileJobConfig {
            title: "Lecturer".to_string(),
            compensation: "weekly:10".to_string(),
        });
        let config = FileConfig {
            founders: vec![bad_job, founder(" ", 45)],
            children: vec![founder("", 3)],
            ..Default::default()
        };

        let fields: Vec<String> = config.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "founders[0].job.compensation",
                "founders[1].first_name",
                "children[0].first_name",
            ]
        );
    }

    #[test]
    fn test_to_person_applies_age_filter() {
        let mut teen = founder("Mike", 15);
        teen.job = Some(FileJobConfig {
            title: "Burger Flipper".to_string(),
            compensation: "hourly:15.5".to_string(),
        });
        let person = teen.to_person().unwrap();
        assert!(person.borrow().job().is_none());

        let mut adult = founder("Ted", 45);
        adult.job = teen.job.clone();
        let person = adult.to_person().unwrap();
        assert_eq!(
            person.borrow().job().unwrap().borrow().title(),
            "Burger Flipper"
        );
    }
}
