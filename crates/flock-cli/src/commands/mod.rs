use std::path::Path;

use anyhow::Result;
use flock_graph::Post;

use crate::corpus;
use crate::ui;

pub mod filter;
pub mod graph;
pub mod influencers;
pub mod mentions;
pub mod timespan;

/// Load a corpus behind a spinner.
pub(crate) fn load_corpus(path: &Path) -> Result<Vec<Post>> {
    let spinner = ui::spinner(&format!("Loading {}", path.display()));
    let result = corpus::load(path);
    spinner.finish_and_clear();
    result
}
