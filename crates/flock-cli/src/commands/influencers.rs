use std::path::Path;

use anyhow::Result;
use console::style;
use flock_graph::{Influence, InfluencerRanker, Post, RankingConfig};

use crate::commands::{graph, load_corpus};
use crate::config::FlockConfig;
use crate::ui;

pub fn run(corpus: &Path, config: &FlockConfig, top: Option<usize>, json: bool) -> Result<()> {
    let posts = load_corpus(corpus)?;
    let ranking = rank(&posts, config, top);

    if json {
        return ui::json(&ranking);
    }

    if ranking.is_empty() {
        ui::empty("No users to rank");
        return Ok(());
    }

    ui::header("INFLUENCERS");
    let width = ranking.len().to_string().len();
    for (i, influence) in ranking.iter().enumerate() {
        let noun = if influence.followers == 1 { "follower" } else { "followers" };
        println!(
            "  {:>width$}. {:<20} {}",
            i + 1,
            style(&influence.username).bold(),
            style(format!("{} {}", influence.followers, noun)).dim(),
            width = width,
        );
    }
    println!();

    Ok(())
}

/// `--top` overrides the configured limit.
pub(crate) fn rank(posts: &[Post], config: &FlockConfig, top: Option<usize>) -> Vec<Influence> {
    let graph = graph::build(posts, config);
    let ranking = RankingConfig {
        limit: top.or(config.ranking.limit),
    };
    InfluencerRanker::with_config(ranking).rank(&graph)
}
