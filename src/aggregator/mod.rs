//! The statistics engine.
//!
//! Pure functions over a batch of user records:
//! - Female share of the batch
//! - Name initials split into A–M / other alphabet
//! - Users per state, optionally filtered by gender
//! - Users per age range

pub mod distribution;
pub mod percentage;
pub mod ratios;
pub mod report;

// Re-export main types and functions
pub use distribution::{age_distribution, sort_by_second_character, state_distribution, AgeRange};
pub use percentage::{join_shares, Percentage, Share};
pub use ratios::{classify_initial, gender_ratio, name_initials, Gender, InitialBucket, NameField, NameInitials};
pub use report::StatisticsReport;
