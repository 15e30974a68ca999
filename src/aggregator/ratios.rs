//! Single-figure ratios over a batch: female share and name initials.

use super::percentage::Percentage;
use crate::parser::UserRecord;
use crate::utils::error::StatsError;
use log::debug;
use std::fmt;

/// Gender values the statistics understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Exact, case-sensitive match against a record's gender
    pub fn matches(&self, user: &UserRecord) -> bool {
        user.gender() == Some(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which part of a name to bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    First,
    Last,
}

impl NameField {
    fn of<'a>(&self, user: &'a UserRecord) -> Option<&'a str> {
        match self {
            NameField::First => user.first_name(),
            NameField::Last => user.last_name(),
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::First => f.write_str("first"),
            NameField::Last => f.write_str("last"),
        }
    }
}

/// Bucket a name's initial falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialBucket {
    /// Code point at or below 'm' after lower-casing
    AtoM,

    /// Code point outside 'a'..='z' and above 'm'
    OtherAlphabet,

    /// 'n'..='z', or no initial at all
    Neither,
}

/// Classify a name by its lower-cased first character
///
/// **Public** - the literal rule, kept as is: anything whose code point
/// is at or below 'm' is A–M, including digits and punctuation.
pub fn classify_initial(name: &str) -> InitialBucket {
    let initial = match name.chars().next() {
        Some(c) => c.to_lowercase().next().unwrap_or(c),
        None => return InitialBucket::Neither,
    };

    if initial <= 'm' {
        InitialBucket::AtoM
    } else if !('a'..='z').contains(&initial) {
        InitialBucket::OtherAlphabet
    } else {
        InitialBucket::Neither
    }
}

/// Result of name-initial bucketing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameInitials {
    /// A–M names out of all names with a Latin (or sub-'m') initial
    pub am_percentage: Percentage,

    /// Names excluded from the denominator as other-alphabet
    pub other_count: usize,
}

/// Percentage of users whose gender is "female", out of all users
///
/// **Public** - statistic 1 of the report
///
/// # Errors
/// * `StatsError::EmptyBatch` - no users
pub fn gender_ratio(users: &[UserRecord]) -> Result<Percentage, StatsError> {
    let female = users.iter().filter(|u| Gender::Female.matches(u)).count();
    debug!("{} of {} users are female", female, users.len());

    Percentage::of(female, users.len()).ok_or(StatsError::EmptyBatch {
        statistic: "gender ratio",
    })
}

/// Share of first or last names starting with A–M
///
/// **Public** - statistics 2 and 3 of the report
///
/// Other-alphabet names are removed from the denominator; N–Z names and
/// missing names stay in it.
///
/// # Errors
/// * `StatsError::EmptyBatch` - no users
/// * `StatsError::NoLatinNames` - every name was other-alphabet
pub fn name_initials(users: &[UserRecord], field: NameField) -> Result<NameInitials, StatsError> {
    if users.is_empty() {
        return Err(StatsError::EmptyBatch {
            statistic: "name initials",
        });
    }

    let mut am_count = 0;
    let mut other_count = 0;

    for user in users {
        match field.of(user).map(classify_initial) {
            Some(InitialBucket::AtoM) => am_count += 1,
            Some(InitialBucket::OtherAlphabet) => other_count += 1,
            Some(InitialBucket::Neither) | None => {}
        }
    }

    debug!(
        "{} names: {} A-M, {} other alphabet, {} total",
        field,
        am_count,
        other_count,
        users.len()
    );

    let am_percentage = Percentage::of(am_count, users.len() - other_count)
        .ok_or(StatsError::NoLatinNames { field })?;

    Ok(NameInitials {
        am_percentage,
        other_count,
    })
}
