//! Influencer ranking.
//!
//! Ranks every username in a follows graph by follower count (in-degree),
//! highest first. Equal counts are ordered by lower-cased username, ascending,
//! so the ranking of a given graph is always the same.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::follows::FollowsGraph;
use crate::identity::Username;

/// Configuration for influencer ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Keep only the top `limit` entries (default: all)
    pub limit: Option<usize>,
}

/// A ranked username and its follower count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Influence {
    pub username: Username,
    pub followers: usize,
}

/// Ranks usernames by in-degree.
#[derive(Debug, Clone, Default)]
pub struct InfluencerRanker {
    config: RankingConfig,
}

impl InfluencerRanker {
    /// Create a new InfluencerRanker with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new InfluencerRanker with custom configuration.
    pub fn with_config(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Rank every username appearing in `graph`.
    ///
    /// A username is displayed with the first casing met while walking the
    /// graph in key order, each key before its follow set.
    #[instrument(skip_all, fields(followers = graph.len()))]
    pub fn rank(&self, graph: &FollowsGraph) -> Vec<Influence> {
        let start_time = std::time::Instant::now();

        let mut counts: BTreeMap<&Username, usize> = BTreeMap::new();
        for (follower, followed) in graph.iter() {
            counts.entry(follower).or_insert(0);
            for user in followed {
                *counts.entry(user).or_insert(0) += 1;
            }
        }

        let mut ranking: Vec<Influence> = counts
            .into_iter()
            .map(|(username, followers)| Influence {
                username: username.clone(),
                followers,
            })
            .collect();

        ranking.sort_by(|a, b| {
            b.followers
                .cmp(&a.followers)
                .then_with(|| a.username.cmp(&b.username))
        });

        let total = ranking.len();
        if let Some(limit) = self.config.limit {
            ranking.truncate(limit);
        }

        if let Some(top) = ranking.first() {
            debug!("Top influencer: {} ({} followers)", top.username, top.followers);
        }
        info!(
            "Ranked {} users (kept {}) in {:?}",
            total,
            ranking.len(),
            start_time.elapsed()
        );

        ranking
    }
}

/// Every username in `graph`, most followed first.
pub fn rank(graph: &FollowsGraph) -> Vec<Influence> {
    InfluencerRanker::new().rank(graph)
}

/// Usernames only, in ranking order.
pub fn influencers(graph: &FollowsGraph) -> Vec<Username> {
    rank(graph).into_iter().map(|i| i.username).collect()
}
