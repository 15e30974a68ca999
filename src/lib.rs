//! Profile Stats
//!
//! Descriptive statistics over batches of user profile records
//! (randomuser.me shaped): gender ratio, name initials, users per state
//! and users per age range.
//!
//! The statistics engine in [`aggregator`] is pure and knows nothing
//! about HTTP or encodings. [`server`] exposes it as
//! `POST /users/statistics` with JSON, plain-text or XML responses chosen
//! from the `Accept` header.
//!
//! ## Getting Started
//!
//! ```bash
//! profile-stats serve --port 3000
//! curl -X POST -H 'Accept: text/plain' -H 'Content-Type: application/json' \
//!     --data @users.json http://localhost:3000/users/statistics
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod server;
pub mod utils;
