//! Input schema for user profile records.
//!
//! Mirrors the subset of the randomuser.me record shape that the
//! statistics read. Every field is optional so that partially filled
//! records decode instead of failing the whole batch; unknown fields
//! are ignored.

use serde::{Deserialize, Serialize};

/// One user profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Expected "male" or "female"; anything else counts as neither
    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub name: Option<Name>,

    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default)]
    pub dob: Option<Dob>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub first: Option<String>,

    #[serde(default)]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// State or region, used as a grouping key
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dob {
    #[serde(default)]
    pub age: Option<u32>,
}

impl UserRecord {
    /// Build a fully populated record
    ///
    /// **Public** - convenient for tests and fixtures
    pub fn new(gender: &str, first: &str, last: &str, state: &str, age: u32) -> Self {
        Self {
            gender: Some(gender.to_string()),
            name: Some(Name {
                first: Some(first.to_string()),
                last: Some(last.to_string()),
            }),
            location: Some(Location {
                state: Some(state.to_string()),
            }),
            dob: Some(Dob { age: Some(age) }),
        }
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.first.as_deref())
    }

    pub fn last_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.last.as_deref())
    }

    pub fn state(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.state.as_deref())
    }

    pub fn age(&self) -> Option<u32> {
        self.dob.as_ref().and_then(|d| d.age)
    }
}
