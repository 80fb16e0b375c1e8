//! Family aggregate

use crate::person::entities::SharedPerson;
use tracing::debug;

/// Hours assumed for a working year when totalling household income
pub const WORK_YEAR_HOURS: i64 = 2000;

/// Minimum age of at least one member before a child can be added
pub const MIN_PARENT_AGE: u32 = 21;

/// Founders at or above this age are married to each other
const MIN_SPOUSE_AGE: u32 = crate::person::entities::MIN_MARRIAGE_AGE;

/// A household (Aggregate)
///
/// Starts with two founders and only grows. Members are shared handles,
/// so a person can be inspected or given a job after joining.
#[derive(Debug)]
pub struct Family {
    members: Vec<SharedPerson>,
}

impl Family {
    /// Found a family. Two adult founders become each other's spouse.
    pub fn new(spouse1: SharedPerson, spouse2: SharedPerson) -> Self {
        let both_adults =
            spouse1.borrow().age() >= MIN_SPOUSE_AGE && spouse2.borrow().age() >= MIN_SPOUSE_AGE;

        if both_adults {
            spouse1.borrow_mut().set_spouse(Some(&spouse2));
            spouse2.borrow_mut().set_spouse(Some(&spouse1));
        } else {
            debug!("Founder under {}, skipping marriage", MIN_SPOUSE_AGE);
        }

        Self {
            members: vec![spouse1, spouse2],
        }
    }

    pub fn members(&self) -> &[SharedPerson] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add a child. Requires some member aged [`MIN_PARENT_AGE`] or over.
    pub fn have_child(&mut self, child: SharedPerson) -> bool {
        let has_parent = self
            .members
            .iter()
            .any(|member| member.borrow().age() >= MIN_PARENT_AGE);

        if !has_parent {
            debug!(
                child = %child.borrow().full_name(),
                "No member aged {} or over, child not added",
                MIN_PARENT_AGE
            );
            return false;
        }

        self.members.push(child);
        true
    }

    /// Total income over a working year for every member with a job
    pub fn household_income(&self) -> i64 {
        self.members
            .iter()
            .filter_map(|member| member.borrow().job())
            .map(|job| job.borrow().calculate_income(WORK_YEAR_HOURS))
            .fold(0i64, i64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::compensation::Compensation;
    use crate::job::entities::Job;
    use crate::person::entities::Person;
    use std::rc::Rc;

    fn person(first: &str, age: u32) -> SharedPerson {
        Person::new(first, "Neward", age).into_shared()
    }

    #[test]
    fn test_family_marries_adult_founders() {
        let ted = person("Ted", 45);
        let charlotte = person("Charlotte", 45);
        let family = Family::new(Rc::clone(&ted), Rc::clone(&charlotte));

        assert_eq!(family.len(), 2);
        assert!(Rc::ptr_eq(&family.members()[0], &ted));
        assert!(Rc::ptr_eq(&family.members()[1], &charlotte));
        assert!(Rc::ptr_eq(&ted.borrow().spouse().unwrap(), &charlotte));
        assert!(Rc::ptr_eq(&charlotte.borrow().spouse().unwrap(), &ted));
    }

    #[test]
    fn test_family_with_minor_founder_is_not_married() {
        let adult = person("Sam", 20);
        let minor = person("Alex", 16);
        let family = Family::new(Rc::clone(&adult), Rc::clone(&minor));

        assert_eq!(family.len(), 2);
        assert!(adult.borrow().spouse().is_none());
        assert!(minor.borrow().spouse().is_none());
    }

    #[test]
    fn test_have_child_requires_member_over_twenty_one() {
        let mut young = Family::new(person("Sam", 20), person("Alex", 19));
        let baby = person("Baby", 0);
        assert!(!young.have_child(baby));
        assert_eq!(young.len(), 2);

        let mut established = Family::new(person("Ted", 45), person("Charlotte", 45));
        assert!(established.have_child(person("Mike", 15)));
        assert!(established.have_child(person("Matt", 16)));
        assert_eq!(established.len(), 4);
        assert_eq!(established.members()[2].borrow().first_name(), "Mike");
    }

    #[test]
    fn test_have_child_with_one_founder_of_age() {
        let mut family = Family::new(person("Sam", 21), person("Alex", 16));
        assert!(family.have_child(person("Baby", 0)));
        assert_eq!(family.len(), 3);
    }

    #[test]
    fn test_household_income_counts_only_employed() {
        let ted = person("Ted", 45);
        ted.borrow_mut()
            .set_job(Some(Job::new("Engineer", Compensation::Salaried(50000)).into_shared()));
        let family = Family::new(ted, person("Charlotte", 45));

        assert_eq!(family.household_income(), 50000);
    }

    #[test]
    fn test_household_income_mixed_compensation() {
        let ted = person("Ted", 45);
        ted.borrow_mut()
            .set_job(Some(Job::new("Guest Lecturer", Compensation::Salaried(1000)).into_shared()));
        let charlotte = person("Charlotte", 45);
        let mut family = Family::new(ted, Rc::clone(&charlotte));

        let mike = person("Mike", 16);
        mike.borrow_mut()
            .set_job(Some(Job::new("Burger Flipper", Compensation::Hourly(15.5)).into_shared()));
        assert!(family.have_child(mike));

        assert_eq!(family.household_income(), 1000 + 31000);

        // Jobs joined after the family was founded are counted too
        charlotte
            .borrow_mut()
            .set_job(Some(Job::new("Writer", Compensation::Salaried(20000)).into_shared()));
        assert_eq!(family.household_income(), 52000);
    }

    #[test]
    fn test_household_income_saturates() {
        let ted = person("Ted", 45);
        ted.borrow_mut().set_job(Some(
            Job::new("Investor", Compensation::Salaried(i64::MAX as u64)).into_shared(),
        ));
        let charlotte = person("Charlotte", 45);
        charlotte
            .borrow_mut()
            .set_job(Some(Job::new("Writer", Compensation::Salaried(1)).into_shared()));
        let family = Family::new(ted, charlotte);

        assert_eq!(family.household_income(), i64::MAX);
    }

    #[test]
    fn test_household_income_reflects_raises() {
        let job = Job::new("Engineer", Compensation::Salaried(1000)).into_shared();
        let ted = person("Ted", 45);
        ted.borrow_mut().set_job(Some(Rc::clone(&job)));
        let family = Family::new(ted, person("Charlotte", 45));

        job.borrow_mut().raise_by_percent(0.5);
        assert_eq!(family.household_income(), 1500);
    }
}
