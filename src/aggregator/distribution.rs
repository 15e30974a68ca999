//! Bucketed distributions: users per state and per age range.
//!
//! Buckets are kept in an `IndexMap` scoped to one call, so the output
//! follows the order in which each bucket was first seen in the batch.

use super::percentage::{Percentage, Share};
use super::ratios::Gender;
use crate::parser::UserRecord;
use crate::utils::config::{MAX_STATES, UNKNOWN_STATE};
use crate::utils::error::StatsError;
use indexmap::IndexMap;
use log::debug;
use std::cmp::Ordering;
use std::fmt;

/// Age buckets with inclusive upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeRange {
    UpTo20,
    From21To40,
    From41To60,
    From61To80,
    From81To100,
    Over100,
}

impl AgeRange {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=20 => AgeRange::UpTo20,
            21..=40 => AgeRange::From21To40,
            41..=60 => AgeRange::From41To60,
            61..=80 => AgeRange::From61To80,
            81..=100 => AgeRange::From81To100,
            _ => AgeRange::Over100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::UpTo20 => "0-20",
            AgeRange::From21To40 => "21-40",
            AgeRange::From41To60 => "41-60",
            AgeRange::From61To80 => "61-80",
            AgeRange::From81To100 => "81-100",
            AgeRange::Over100 => "100+",
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Share of users per state, at most `MAX_STATES` entries
///
/// **Public** - statistics 4, 5 and 6 of the report
///
/// # Arguments
/// * `users` - Batch to group
/// * `gender` - When set, only matching users are counted and the
///   denominator is the number of matching users
///
/// # Returns
/// Shares ordered by [`sort_by_second_character`], truncated to ten. A
/// filter that matches nobody yields an empty list.
///
/// # Errors
/// * `StatsError::EmptyBatch` - no users
pub fn state_distribution(
    users: &[UserRecord],
    gender: Option<Gender>,
) -> Result<Vec<Share>, StatsError> {
    if users.is_empty() {
        return Err(StatsError::EmptyBatch {
            statistic: "state distribution",
        });
    }

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    let mut considered = 0;

    for user in users {
        if let Some(gender) = gender {
            if !gender.matches(user) {
                continue;
            }
        }
        *counts.entry(user.state().unwrap_or(UNKNOWN_STATE)).or_insert(0) += 1;
        considered += 1;
    }

    debug!(
        "Grouped {} users ({}) into {} states",
        considered,
        gender.map_or("any gender", |g| g.as_str()),
        counts.len()
    );

    let mut shares: Vec<Share> = counts
        .into_iter()
        .filter_map(|(state, count)| {
            Percentage::of(count, considered).map(|pct| Share::new(state, count, pct))
        })
        .collect();

    sort_by_second_character(&mut shares);
    shares.truncate(MAX_STATES);

    Ok(shares)
}

/// Order shares by the second character of their formatted entry.
///
/// **Public** - documented quirk
///
/// This compares `" <label>: <pct>%"` strings at index 1, i.e. the first
/// character of the label, *as numbers*. Only a pair of numeric
/// characters compares; every other pair is a tie. Ties never move an
/// entry past its neighbour, so a digit-led entry only moves left while
/// the entries it passes are digit-led and larger. It does not sort by
/// percentage.
///
/// The comparator is not a total order, so this runs its own stable
/// binary insertion sort instead of `slice::sort_by`.
pub fn sort_by_second_character(shares: &mut [Share]) {
    let mut keys: Vec<Option<u32>> = shares.iter().map(second_character_number).collect();

    for i in 1..shares.len() {
        let mut left = 0;
        let mut right = i;
        while left < right {
            let mid = (left + right) / 2;
            if compare_keys(keys[i], keys[mid]) == Ordering::Less {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        shares[left..=i].rotate_right(1);
        keys[left..=i].rotate_right(1);
    }
}

fn compare_keys(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

// A lone whitespace character reads as 0, a digit as itself, anything else as no number
fn second_character_number(share: &Share) -> Option<u32> {
    share.formatted().chars().nth(1).and_then(|c| {
        if c.is_whitespace() {
            Some(0)
        } else {
            c.to_digit(10)
        }
    })
}

/// Share of users per age range, in first-seen order
///
/// **Public** - statistic 7 of the report
///
/// Users without an age are not bucketed but still count towards the
/// denominator, which is always the full batch size.
///
/// # Errors
/// * `StatsError::EmptyBatch` - no users
pub fn age_distribution(users: &[UserRecord]) -> Result<Vec<Share>, StatsError> {
    if users.is_empty() {
        return Err(StatsError::EmptyBatch {
            statistic: "age distribution",
        });
    }

    let mut counts: IndexMap<AgeRange, usize> = IndexMap::new();

    for age in users.iter().filter_map(UserRecord::age) {
        *counts.entry(AgeRange::from_age(age)).or_insert(0) += 1;
    }

    debug!("Bucketed {} users into {} age ranges", users.len(), counts.len());

    Ok(counts
        .into_iter()
        .filter_map(|(range, count)| {
            Percentage::of(count, users.len()).map(|pct| Share::new(range.label(), count, pct))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_state(gender: &str, state: &str) -> UserRecord {
        UserRecord::new(gender, "Adam", "Smith", state, 30)
    }

    fn aged(age: u32) -> UserRecord {
        UserRecord::new("male", "Adam", "Smith", "CA", age)
    }

    fn formatted(shares: &[Share]) -> Vec<String> {
        shares.iter().map(Share::formatted).collect()
    }

    #[test]
    fn test_state_distribution_unfiltered() {
        let users = vec![
            in_state("male", "CA"),
            in_state("female", "CA"),
            in_state("male", "NY"),
        ];

        let shares = state_distribution(&users, None).unwrap();

        assert_eq!(formatted(&shares), vec![" CA: 66.7%", " NY: 33.3%"]);
        assert_eq!(shares[0].count, 2);
    }

    #[test]
    fn test_state_distribution_gender_filter() {
        let users = vec![
            in_state("male", "CA"),
            in_state("female", "Oregon"),
            in_state("female", "CA"),
            in_state("female", "CA"),
            in_state("male", "NY"),
        ];

        let female = state_distribution(&users, Some(Gender::Female)).unwrap();
        let male = state_distribution(&users, Some(Gender::Male)).unwrap();

        assert_eq!(formatted(&female), vec![" Oregon: 33.3%", " CA: 66.7%"]);
        assert_eq!(formatted(&male), vec![" CA: 50.0%", " NY: 50.0%"]);
    }

    #[test]
    fn test_state_distribution_filter_matches_nobody() {
        let users = vec![in_state("male", "CA")];
        let shares = state_distribution(&users, Some(Gender::Female)).unwrap();
        assert!(shares.is_empty());
    }

    #[test]
    fn test_state_distribution_truncates_to_ten() {
        let users: Vec<UserRecord> = (0..15)
            .map(|i| in_state("male", &format!("State {}", i)))
            .collect();

        let shares = state_distribution(&users, None).unwrap();

        assert_eq!(shares.len(), MAX_STATES);
        assert_eq!(shares[0].label, "State 0");
        assert_eq!(shares[9].label, "State 9");
    }

    #[test]
    fn test_state_distribution_keeps_first_seen_order() {
        let users = vec![
            in_state("male", "Roscommon"),
            in_state("male", "Queensland"),
            in_state("male", "Queensland"),
            in_state("male", "قم"),
            in_state("male", "Alagoas"),
        ];

        let shares = state_distribution(&users, None).unwrap();
        let labels: Vec<&str> = shares.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(labels, vec!["Roscommon", "Queensland", "قم", "Alagoas"]);
    }

    #[test]
    fn test_state_distribution_missing_state() {
        let users = vec![in_state("male", "CA"), UserRecord::default()];
        let shares = state_distribution(&users, None).unwrap();
        assert_eq!(formatted(&shares), vec![" CA: 50.0%", " unknown: 50.0%"]);
    }

    #[test]
    fn test_state_distribution_empty() {
        assert!(matches!(
            state_distribution(&[], None),
            Err(StatsError::EmptyBatch { .. })
        ));
    }

    #[test]
    fn test_sort_never_moves_past_non_numeric_neighbour() {
        let pct = Percentage::of(1, 4).unwrap();
        let mut shares = vec![
            Share::new("9th District", 1, pct),
            Share::new("Bavaria", 1, pct),
            Share::new("2nd District", 1, pct),
            Share::new("Alsace", 1, pct),
        ];

        sort_by_second_character(&mut shares);
        let labels: Vec<&str> = shares.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(labels, vec!["9th District", "Bavaria", "2nd District", "Alsace"]);
    }

    #[test]
    fn test_sort_orders_adjacent_digit_led_labels() {
        let pct = Percentage::of(1, 4).unwrap();
        let mut shares = vec![
            Share::new("9a", 1, pct),
            Share::new("2b", 1, pct),
            Share::new("X", 1, pct),
            Share::new("1c", 1, pct),
        ];

        sort_by_second_character(&mut shares);
        let labels: Vec<&str> = shares.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(labels, vec!["1c", "2b", "9a", "X"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_digits() {
        let mut shares = vec![
            Share::new("3 West", 1, Percentage::of(1, 4).unwrap()),
            Share::new("3 East", 2, Percentage::of(2, 4).unwrap()),
            Share::new("1 North", 1, Percentage::of(1, 4).unwrap()),
        ];

        sort_by_second_character(&mut shares);
        let labels: Vec<&str> = shares.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(labels, vec!["1 North", "3 West", "3 East"]);
    }

    #[test]
    fn test_age_range_boundaries() {
        assert_eq!(AgeRange::from_age(0), AgeRange::UpTo20);
        assert_eq!(AgeRange::from_age(20), AgeRange::UpTo20);
        assert_eq!(AgeRange::from_age(21), AgeRange::From21To40);
        assert_eq!(AgeRange::from_age(60), AgeRange::From41To60);
        assert_eq!(AgeRange::from_age(80), AgeRange::From61To80);
        assert_eq!(AgeRange::from_age(100), AgeRange::From81To100);
        assert_eq!(AgeRange::from_age(101), AgeRange::Over100);
    }

    #[test]
    fn test_age_distribution_first_seen_order() {
        let users = vec![aged(5), aged(25), aged(150)];

        let shares = age_distribution(&users).unwrap();

        assert_eq!(
            formatted(&shares),
            vec![" 0-20: 33.3%", " 21-40: 33.3%", " 100+: 33.3%"]
        );
    }

    #[test]
    fn test_age_distribution_insertion_not_numeric_order() {
        let users = vec![aged(45), aged(70), aged(30), aged(50)];

        let shares = age_distribution(&users).unwrap();
        let labels: Vec<&str> = shares.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(labels, vec!["41-60", "61-80", "21-40"]);
        assert_eq!(shares[0].percentage.to_string(), "50.0");
    }

    #[test]
    fn test_age_distribution_missing_age_in_denominator() {
        let users = vec![aged(30), UserRecord::default()];
        let shares = age_distribution(&users).unwrap();
        assert_eq!(formatted(&shares), vec![" 21-40: 50.0%"]);
    }

    #[test]
    fn test_age_distribution_empty() {
        assert!(age_distribution(&[]).is_err());
    }
}
