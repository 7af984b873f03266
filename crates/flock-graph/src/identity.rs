//! Username identity for the follows graph.
//!
//! Usernames are case-insensitive: `MITOCW` and `mitocw` are the same person.
//! A [`Username`] carries both the canonical lower-cased form, which drives
//! equality, hashing and ordering, and the casing it was first observed with,
//! which is what gets displayed. Two case variants can therefore never become
//! two distinct graph nodes.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Whether `ch` may appear in a username: ASCII letters, digits, `-` or `_`.
pub fn is_username_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

/// A validated, case-insensitive username.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username {
    /// Lower-cased form used for identity
    canonical: String,
    /// Casing as first observed
    display: String,
}

impl Username {
    /// Parse a username, rejecting empty strings and characters outside the
    /// username alphabet.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let display = raw.into();
        if display.is_empty() {
            return Err(GraphError::EmptyUsername);
        }
        if let Some(ch) = display.chars().find(|c| !is_username_char(*c)) {
            return Err(GraphError::InvalidUsername {
                username: display,
                ch,
            });
        }

        Ok(Self {
            canonical: display.to_ascii_lowercase(),
            display,
        })
    }

    /// Build from a run the mention scanner already validated.
    pub(crate) fn from_scanned(run: &str) -> Self {
        debug_assert!(!run.is_empty() && run.chars().all(is_username_char));
        let canonical = run.to_ascii_lowercase();
        Self {
            display: canonical.clone(),
            canonical,
        }
    }

    /// The lower-cased identity.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The casing this username was first observed with.
    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl PartialEq for Username {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Username {}

impl Hash for Username {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for Username {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Username {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.display)
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username({:?})", self.display)
    }
}

impl FromStr for Username {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Username {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Username {
    type Error = GraphError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.display
    }
}
