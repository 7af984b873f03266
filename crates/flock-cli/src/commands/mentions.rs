use std::path::Path;

use anyhow::Result;
use flock_graph::extract_mentioned_users;

use crate::commands::load_corpus;
use crate::ui;

pub fn run(corpus: &Path) -> Result<()> {
    let posts = load_corpus(corpus)?;
    let mentioned = extract_mentioned_users(&posts);

    if mentioned.is_empty() {
        ui::empty("No mentions found");
        return Ok(());
    }

    ui::header(&format!(
        "{} users mentioned across {} posts",
        mentioned.len(),
        posts.len()
    ));
    for user in &mentioned {
        ui::info(&format!("@{}", user));
    }

    Ok(())
}
