use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("invalid character {ch:?} in username {username:?}")]
    InvalidUsername { username: String, ch: char },

    #[error("timespan start {start} is after end {end}")]
    InvertedTimespan {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
