use std::path::Path;

use anyhow::Result;
use console::style;
use flock_graph::{FollowsGraph, FollowsGraphBuilder, Post};

use crate::commands::load_corpus;
use crate::config::FlockConfig;
use crate::ui;

pub fn run(corpus: &Path, config: &FlockConfig, json: bool) -> Result<()> {
    let posts = load_corpus(corpus)?;
    let graph = build(&posts, config);

    if json {
        return ui::json(&graph);
    }

    if graph.is_empty() {
        ui::empty("Nobody follows anybody");
        return Ok(());
    }

    ui::header(&format!(
        "{} followers, {} follows",
        graph.len(),
        graph.edge_count()
    ));
    for (follower, followed) in graph.iter() {
        let names: Vec<String> = followed.iter().map(|u| u.to_string()).collect();
        println!(
            "  {:<20} {} {}",
            style(follower).bold(),
            style("→").dim(),
            names.join(", ")
        );
    }

    Ok(())
}

pub(crate) fn build(posts: &[Post], config: &FlockConfig) -> FollowsGraph {
    FollowsGraphBuilder::with_config(config.graph.clone()).build(posts)
}
