//! `@username` mention extraction.
//!
//! An `@` starts a mention only when the character before it is not a
//! username character (or there is none) and the character after it is one.
//! The mention is the maximal run of username characters that follows. This
//! keeps email addresses like `bitdiddle@mit.edu` from mentioning `mit`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

use crate::identity::Username;
use crate::schema::Post;

/// Distinct mentioned usernames, lower-cased.
pub type MentionSet = BTreeSet<Username>;

// The leading group consumes the boundary character. A match always ends on a
// username character, so that boundary is never one a later mention needs.
static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9_-])@([A-Za-z0-9_-]+)").expect("mention pattern is valid")
});

/// Usernames mentioned in `text`.
pub fn extract_mentions(text: &str) -> MentionSet {
    MENTION_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|run| Username::from_scanned(run.as_str()))
        .collect()
}

/// Usernames mentioned in the body of `post`.
pub fn mentions_in_post(post: &Post) -> MentionSet {
    extract_mentions(&post.text)
}

/// Union of the mentions across every post.
#[instrument(skip_all, fields(posts = posts.len()))]
pub fn extract_mentioned_users(posts: &[Post]) -> MentionSet {
    let mentioned: MentionSet = posts.iter().flat_map(mentions_in_post).collect();
    debug!("Found {} distinct mentioned users", mentioned.len());
    mentioned
}
