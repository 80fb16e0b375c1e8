//! Console output for household commands

use crate::household::Household;
use colored::Colorize;
use household_domain::{Compensation, Money};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `10 USD -> 5 GBP`
    pub fn conversion(from: &Money, to: &Money) -> String {
        format!("{} -> {}", from, to.to_string().green().bold())
    }

    /// `10 USD + 5 GBP = 10 GBP`
    pub fn arithmetic(left: &Money, op: char, right: &Money, result: &Money) -> String {
        format!(
            "{} {} {} = {}",
            left,
            op,
            right,
            result.to_string().green().bold()
        )
    }

    pub fn income(compensation: Compensation, hours: i64, income: i64) -> String {
        format!(
            "{} ({} for {} hours): {}",
            "Income".cyan().bold(),
            compensation,
            hours,
            income.to_string().green().bold()
        )
    }

    /// Members, refused children and the income total
    pub fn household(household: &Household, show_members: bool) -> String {
        let mut output = String::new();

        if show_members {
            output.push_str(&format!("{}\n", "Members:".cyan().bold()));
            for member in household.family.members() {
                output.push_str(&format!("  {}\n", member.borrow()));
            }
        }

        if !household.rejected.is_empty() {
            output.push_str(&format!("{}\n", "Not added:".yellow().bold()));
            for child in &household.rejected {
                output.push_str(&format!("  {}\n", child.borrow().full_name()));
            }
        }

        output.push_str(&format!(
            "{} {}",
            "Household income:".cyan().bold(),
            household.income().to_string().green().bold()
        ));

        output
    }

    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n  {}\n{}", line, title.bold(), line)
    }
}
