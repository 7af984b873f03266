//! Extractors that scan post text for relationship signals.

pub mod mentions;

pub use mentions::{extract_mentioned_users, extract_mentions, mentions_in_post, MentionSet};
