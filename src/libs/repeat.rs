//! Recurrence engine: computes the next due date of a repeating task.
//!
//! A repeat rule is a short whitespace separated string:
//!
//! - `d <N>`: every `N` days, `1 <= N <= 400`
//! - `y`: every year on the anchor's month and day
//!
//! Rules are parsed once into [`Rule`]; unknown rule kinds are rejected at
//! parse time rather than inside the advance loop.
//!
//! ## Advancing
//!
//! Occurrences form the progression `anchor + k * step` for `k >= 1`. The
//! next date is the first member of that progression on or after `today`.
//! The anchor itself never counts, so a task anchored in the future still
//! moves forward by one step.
//!
//! Yearly steps are measured from the anchor, not chained from the previous
//! occurrence. `chrono` clamps a February 29 anchor to February 28 in common
//! years, and the series returns to February 29 in every leap year. Adding one
//! year at a time would instead stay on February 28 after the first clamp;
//! this engine deliberately does not do that.
//!
//! Day counts go through `u32::from_str`, so a leading `+` (`d +7`) is
//! accepted.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use scheduler::libs::repeat::next_date;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let next = next_date(today, "20240301", "d 7").unwrap();
//! assert_eq!(next, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
//! ```

use super::date::{is_representable, parse_date};
use super::error::{TaskError, TaskResult};
use chrono::{Days, Months, NaiveDate};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Upper bound for the day interval of a `d` rule.
pub const MAX_DAY_INTERVAL: u32 = 400;

/// A parsed repeat rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Every `n` days.
    Daily(u32),
    /// Every year on the same month and day.
    Yearly,
}

impl Rule {
    /// Parses a repeat rule string.
    pub fn parse(rule: &str) -> TaskResult<Rule> {
        let mut tokens = rule.split_whitespace();
        let kind = tokens.next().ok_or(TaskError::NoRuleSpecified)?;

        match kind {
            "d" => {
                let count = tokens.next().ok_or_else(|| TaskError::InvalidDayCount(rule.to_string()))?;
                if tokens.next().is_some() {
                    return Err(TaskError::InvalidDayCount(rule.to_string()));
                }
                let days: u32 = count.parse().map_err(|_| TaskError::InvalidDayCount(rule.to_string()))?;
                if !(1..=MAX_DAY_INTERVAL).contains(&days) {
                    return Err(TaskError::InvalidDayCount(rule.to_string()));
                }
                Ok(Rule::Daily(days))
            }
            "y" => match tokens.next() {
                Some(_) => Err(TaskError::InvalidYearRule(rule.to_string())),
                None => Ok(Rule::Yearly),
            },
            _ => Err(TaskError::UnsupportedRule(rule.to_string())),
        }
    }

    /// The `k`-th occurrence after `anchor`, `None` if chrono overflows.
    fn nth(&self, anchor: NaiveDate, k: u32) -> Option<NaiveDate> {
        match *self {
            Rule::Daily(days) => anchor.checked_add_days(Days::new(u64::from(days) * u64::from(k))),
            Rule::Yearly => anchor.checked_add_months(Months::new(k.checked_mul(12)?)),
        }
    }

    /// First occurrence after `anchor` that is on or after `today`.
    pub fn next_after(&self, anchor: NaiveDate, today: NaiveDate) -> TaskResult<NaiveDate> {
        let mut k = 1;
        loop {
            let next = self
                .nth(anchor, k)
                .filter(|date| is_representable(*date))
                .ok_or(TaskError::DateOutOfRange)?;
            if next >= today {
                return Ok(next);
            }
            k += 1;
        }
    }
}

impl FromStr for Rule {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse(s)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Daily(days) => write!(f, "d {}", days),
            Rule::Yearly => write!(f, "y"),
        }
    }
}

/// Computes the next occurrence of `rule` anchored at `anchor`.
///
/// Fails with [`TaskError::NoRuleSpecified`] for an empty rule, regardless
/// of the other arguments, then with [`TaskError::InvalidAnchorDate`] if
/// the anchor is not a valid date, then with the rule's own parse error.
pub fn next_date(today: NaiveDate, anchor: &str, rule: &str) -> TaskResult<NaiveDate> {
    if rule.trim().is_empty() {
        return Err(TaskError::NoRuleSpecified);
    }
    let anchor = parse_date(anchor).map_err(|_| TaskError::InvalidAnchorDate(anchor.to_string()))?;
    let rule = Rule::parse(rule)?;

    rule.next_after(anchor, today)
}
