//! Payload parsing and input schema definitions.
//!
//! This module handles:
//! - Defining the user record schema
//! - Decoding `{"results": [...]}` payloads
//! - Rejecting payloads without a `results` array

pub mod payload;
pub mod schema;

// Re-export main types
pub use payload::{parse_users, parse_users_value};
pub use schema::{Dob, Location, Name, UserRecord};
