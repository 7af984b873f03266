//! Post filters. Each returns the matching posts in input order.

use std::collections::HashSet;

use crate::identity::Username;
use crate::schema::{Post, Timespan};

/// Posts written by `author`, compared case-insensitively.
pub fn written_by<'a>(posts: &'a [Post], author: &Username) -> Vec<&'a Post> {
    posts.iter().filter(|p| p.author == *author).collect()
}

/// Posts whose timestamp falls within `timespan`, endpoints included.
pub fn in_timespan(posts: &[Post], timespan: Timespan) -> Vec<&Post> {
    posts
        .iter()
        .filter(|p| timespan.contains(p.timestamp))
        .collect()
}

/// Posts containing at least one of `words` as a whitespace-separated word,
/// compared case-insensitively.
pub fn containing<'a, S: AsRef<str>>(posts: &'a [Post], words: &[S]) -> Vec<&'a Post> {
    let wanted: HashSet<String> = words
        .iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    if wanted.is_empty() {
        return Vec::new();
    }

    posts
        .iter()
        .filter(|p| {
            p.text
                .split_whitespace()
                .any(|word| wanted.contains(&word.to_lowercase()))
        })
        .collect()
}
