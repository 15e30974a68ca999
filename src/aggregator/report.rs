//! The full statistics report for one batch.
//!
//! Runs every aggregation once and phrases the results as the seven
//! numbered sentences the endpoint returns. Any failing statistic fails
//! the whole report.

use super::distribution::{age_distribution, state_distribution};
use super::percentage::{join_shares, Percentage, Share};
use super::ratios::{gender_ratio, name_initials, Gender, NameField, NameInitials};
use crate::parser::UserRecord;
use crate::utils::error::StatsError;
use indexmap::IndexMap;
use log::debug;

/// All statistics for one batch of users
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    /// Number of users the report was computed over
    pub user_count: usize,

    pub female_percentage: Percentage,
    pub first_names: NameInitials,
    pub last_names: NameInitials,
    pub states: Vec<Share>,
    pub female_states: Vec<Share>,
    pub male_states: Vec<Share>,
    pub age_ranges: Vec<Share>,
}

impl StatisticsReport {
    /// Compute every statistic over `users`
    ///
    /// **Public** - main entry point of the statistics engine
    ///
    /// # Errors
    /// The first `StatsError` raised by any statistic.
    pub fn compute(users: &[UserRecord]) -> Result<Self, StatsError> {
        debug!("Computing statistics report over {} users", users.len());

        Ok(Self {
            user_count: users.len(),
            female_percentage: gender_ratio(users)?,
            first_names: name_initials(users, NameField::First)?,
            last_names: name_initials(users, NameField::Last)?,
            states: state_distribution(users, None)?,
            female_states: state_distribution(users, Some(Gender::Female))?,
            male_states: state_distribution(users, Some(Gender::Male))?,
            age_ranges: age_distribution(users)?,
        })
    }

    /// The seven report sentences, in order
    pub fn sentences(&self) -> [String; 7] {
        [
            format!("Percentage female versus male: {}%.", self.female_percentage),
            format!(
                "Percentage of first names that start with A-M versus N-Z: {}%, {} others.",
                self.first_names.am_percentage, self.first_names.other_count
            ),
            format!(
                "Percentage of last names that start with A-M versus N-Z: {}%, {} others.",
                self.last_names.am_percentage, self.last_names.other_count
            ),
            format!(
                "Percentage of people in each state, up to the top 10 most populous states:{}",
                join_shares(&self.states)
            ),
            format!(
                "Percentage of females in each state, up to the top 10 most populous states:{}",
                join_shares(&self.female_states)
            ),
            format!(
                "Percentage of males in each state, up to the top 10 most populous states:{}",
                join_shares(&self.male_states)
            ),
            format!(
                "Percentage of people in the following age ranges:{}",
                join_shares(&self.age_ranges)
            ),
        ]
    }

    /// Sentences keyed "1".."7", in numeric order
    ///
    /// **Public** - the logical response body every renderer encodes
    pub fn numbered(&self) -> IndexMap<String, String> {
        self.sentences()
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| ((index + 1).to_string(), sentence))
            .collect()
    }
}
