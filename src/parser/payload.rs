//! Decode request payloads into user records.
//!
//! Payload shape: `{"results": [UserRecord, ...], ...}`. Sibling keys
//! such as randomuser.me's `info` block are ignored.

use super::schema::UserRecord;
use crate::utils::error::ParseError;
use log::debug;
use serde_json::Value;

/// Parse a users payload from raw bytes
///
/// **Public** - main entry point for the HTTP boundary and the CLI
///
/// # Errors
/// * `ParseError::JsonError` - body is not JSON, or a record has a field of the wrong type
/// * `ParseError::InvalidFormat` - body is not an object, or `results` is not an array
/// * `ParseError::MissingResults` - no `results` field
pub fn parse_users(bytes: &[u8]) -> Result<Vec<UserRecord>, ParseError> {
    let payload: Value = serde_json::from_slice(bytes)?;
    parse_users_value(payload)
}

/// Parse a users payload from an already decoded JSON value
///
/// **Public** - useful when the caller holds a `serde_json::Value`
pub fn parse_users_value(payload: Value) -> Result<Vec<UserRecord>, ParseError> {
    let mut object = match payload {
        Value::Object(object) => object,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )))
        }
    };

    let results = object.remove("results").ok_or(ParseError::MissingResults)?;

    if !results.is_array() {
        return Err(ParseError::InvalidFormat(format!(
            "`results` must be an array, found {}",
            json_kind(&results)
        )));
    }

    let users: Vec<UserRecord> = serde_json::from_value(results)?;
    debug!("Decoded {} user records", users.len());

    Ok(users)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
