//! Person entity

use crate::job::entities::SharedJob;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

/// A person referenced from families and from a spouse
pub type SharedPerson = Rc<RefCell<Person>>;

/// Minimum age for holding a job
pub const MIN_WORKING_AGE: u32 = 16;

/// Minimum age for having a spouse
pub const MIN_MARRIAGE_AGE: u32 = 18;

/// Placeholder shown for an absent job or spouse
const NONE: &str = "none";

/// An individual (Entity)
///
/// Name and age are fixed at construction. The job and spouse slots are
/// filtered on every write: an assignment the person is too young for
/// leaves the slot empty.
///
/// The spouse is held as a weak back-reference, so two people married to
/// each other do not keep each other alive.
#[derive(Debug)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: u32,
    job: Option<SharedJob>,
    spouse: Option<Weak<RefCell<Person>>>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    /// Wrap this person in a shared handle
    pub fn into_shared(self) -> SharedPerson {
        Rc::new(RefCell::new(self))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn job(&self) -> Option<SharedJob> {
        self.job.clone()
    }

    pub fn has_job(&self) -> bool {
        self.job.is_some()
    }

    /// The current spouse, if one is set and still alive
    pub fn spouse(&self) -> Option<SharedPerson> {
        self.spouse.as_ref().and_then(Weak::upgrade)
    }

    /// Assign or clear the job.
    ///
    /// Anyone under [`MIN_WORKING_AGE`] ends up with no job.
    pub fn set_job(&mut self, job: Option<SharedJob>) {
        self.job = job;
        if self.age < MIN_WORKING_AGE && self.job.is_some() {
            debug!(
                person = %self.full_name(),
                age = self.age,
                "Too young to hold a job, clearing assignment"
            );
            self.job = None;
        }
    }

    /// Assign or clear the spouse.
    ///
    /// Anyone under [`MIN_MARRIAGE_AGE`] ends up with no spouse. Only this
    /// side of the relationship is touched.
    pub fn set_spouse(&mut self, spouse: Option<&SharedPerson>) {
        self.spouse = spouse.map(Rc::downgrade);
        if self.age < MIN_MARRIAGE_AGE && self.spouse.is_some() {
            debug!(
                person = %self.full_name(),
                age = self.age,
                "Too young to have a spouse, clearing assignment"
            );
            self.spouse = None;
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let job = match &self.job {
            Some(job) => job.borrow().title().to_string(),
            None => NONE.to_string(),
        };
        let spouse = match self.spouse() {
            Some(spouse) => spouse.borrow().full_name(),
            None => NONE.to_string(),
        };

        write!(
            f,
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            self.first_name, self.last_name, self.age, job, spouse
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::compensation::Compensation;
    use crate::job::entities::Job;

    fn lecturer() -> SharedJob {
        Job::new("Guest Lecturer", Compensation::Salaried(1000)).into_shared()
    }

    #[test]
    fn test_person_creation() {
        let ted = Person::new("Ted", "Neward", 45);
        assert_eq!(ted.first_name(), "Ted");
        assert_eq!(ted.last_name(), "Neward");
        assert_eq!(ted.full_name(), "Ted Neward");
        assert_eq!(ted.age(), 45);
        assert!(ted.job().is_none());
        assert!(ted.spouse().is_none());
    }

    #[test]
    fn test_job_rejected_under_sixteen() {
        let mut mike = Person::new("Mike", "Neward", 15);
        mike.set_job(Some(lecturer()));
        assert!(mike.job().is_none());

        let mut matt = Person::new("Matt", "Neward", 16);
        matt.set_job(Some(lecturer()));
        assert_eq!(matt.job().unwrap().borrow().title(), "Guest Lecturer");
    }

    #[test]
    fn test_spouse_rejected_under_eighteen() {
        let partner = Person::new("Charlotte", "Neward", 45).into_shared();

        let mut young = Person::new("Mike", "Neward", 17);
        young.set_spouse(Some(&partner));
        assert!(young.spouse().is_none());

        let mut adult = Person::new("Matt", "Neward", 18);
        adult.set_spouse(Some(&partner));
        assert!(Rc::ptr_eq(&adult.spouse().unwrap(), &partner));
    }

    #[test]
    fn test_every_assignment_is_rechecked() {
        let mut mike = Person::new("Mike", "Neward", 15);
        for _ in 0..3 {
            mike.set_job(Some(lecturer()));
            assert!(mike.job().is_none());
        }

        let mut ted = Person::new("Ted", "Neward", 45);
        ted.set_job(Some(lecturer()));
        assert!(ted.has_job());
        ted.set_job(None);
        assert!(!ted.has_job());
        ted.set_job(Some(lecturer()));
        assert!(ted.has_job());
    }

    #[test]
    fn test_every_spouse_assignment_is_rechecked() {
        let partner = Person::new("Charlotte", "Neward", 45).into_shared();

        let mut mike = Person::new("Mike", "Neward", 17);
        for _ in 0..3 {
            mike.set_spouse(Some(&partner));
            assert!(mike.spouse().is_none());
        }

        let mut matt = Person::new("Matt", "Neward", 18);
        matt.set_spouse(Some(&partner));
        assert!(Rc::ptr_eq(&matt.spouse().unwrap(), &partner));
        matt.set_spouse(None);
        assert!(matt.spouse().is_none());
        matt.set_spouse(Some(&partner));
        assert!(Rc::ptr_eq(&matt.spouse().unwrap(), &partner));
    }

    #[test]
    fn test_spouse_is_weak() {
        let mut ted = Person::new("Ted", "Neward", 45);
        {
            let charlotte = Person::new("Charlotte", "Neward", 45).into_shared();
            ted.set_spouse(Some(&charlotte));
            assert!(ted.spouse().is_some());
        }
        assert!(ted.spouse().is_none());
    }

    #[test]
    fn test_display_without_job_or_spouse() {
        let ted = Person::new("Ted", "Neward", 45);
        assert_eq!(
            ted.to_string(),
            "[Person: firstName:Ted lastName:Neward age:45 job:none spouse:none]"
        );
    }

    #[test]
    fn test_display_with_job_and_spouse() {
        let charlotte = Person::new("Charlotte", "Neward", 45).into_shared();
        let mut ted = Person::new("Ted", "Neward", 45);
        ted.set_job(Some(lecturer()));
        ted.set_spouse(Some(&charlotte));
        assert_eq!(
            ted.to_string(),
            "[Person: firstName:Ted lastName:Neward age:45 job:Guest Lecturer spouse:Charlotte Neward]"
        );
    }
}
