//! Core records consumed by the pipeline.
//!
//! - `Post`: a single short post with its author and timestamp
//! - `Timespan`: an inclusive interval of instants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::identity::Username;

/// An immutable post. Ids are expected to be distinct within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: Username,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: u64,
        author: Username,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author,
            text: text.into(),
            timestamp,
        }
    }
}

/// A closed interval of time. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Timespan {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(GraphError::InvertedTimespan { start, end });
        }
        Ok(Self { start, end })
    }

    /// The minimal interval containing every post's timestamp, or `None` for
    /// an empty collection.
    pub fn spanning(posts: &[Post]) -> Option<Self> {
        let start = posts.iter().map(|p| p.timestamp).min()?;
        let end = posts.iter().map(|p| p.timestamp).max()?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
