//! Post corpus loading.
//!
//! A corpus is either a JSON array of posts or JSON Lines (one post per line).
//! A leading `[` selects the array form.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use flock_graph::Post;
use tracing::info;

/// Load and validate a corpus file.
pub fn load(path: &Path) -> Result<Vec<Post>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus: {}", path.display()))?;

    let posts = parse(&contents)
        .with_context(|| format!("Failed to parse corpus: {}", path.display()))?;

    info!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

/// Parse corpus contents, rejecting duplicate post ids.
pub fn parse(contents: &str) -> Result<Vec<Post>> {
    let posts: Vec<Post> = if contents.trim_start().starts_with('[') {
        serde_json::from_str(contents).context("Invalid JSON array of posts")?
    } else {
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line)
                    .with_context(|| format!("Invalid post on line {}", i + 1))
            })
            .collect::<Result<_>>()?
    };

    let mut seen = HashSet::with_capacity(posts.len());
    for post in &posts {
        if !seen.insert(post.id) {
            bail!("Duplicate post id {}", post.id);
        }
    }

    Ok(posts)
}
