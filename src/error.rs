// Engine errors — everything that can go wrong before scoring starts.
//
// The scoring engine itself is infallible arithmetic over a validated
// Profile. All failure happens at the boundary: an extractor record that is
// degraded, missing counts, or carrying values the engine can't reason about.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("extractor returned a degraded record for '{username}': {reason}")]
    Degraded { username: String, reason: String },

    #[error("profile has an empty username")]
    EmptyUsername,

    #[error("profile is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value for '{field}': {value} (counts must be finite and non-negative)")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("invalid post timestamp '{value}'")]
    InvalidTimestamp { value: String },

    #[error("too many post dates: {0} (at most 12 recent posts are analyzed)")]
    TooManyPostDates(usize),

    #[error("profile metric '{0}' is not a finite number")]
    NonFiniteMetric(&'static str),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
