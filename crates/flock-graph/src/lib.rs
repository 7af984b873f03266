//! Flock Graph - follows-graph inference from short posts.
//!
//! This crate turns a corpus of posts into a guess at who follows whom, and
//! ranks users by how many others follow them. It includes:
//!
//! - **Extractors**: `@username` mention scanning
//! - **Follows**: author → mentioned-users graph construction
//! - **Ranking**: influencers ordered by follower count
//! - **Filter**: author, time window and keyword filters over posts
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use flock_graph::{guess_follows_graph, influencers, Post, Username};
//!
//! let posts = vec![
//!     Post::new(1, Username::parse("alyssa")?, "lunch with @Ben?", Utc::now()),
//!     Post::new(2, Username::parse("cy")?, "@ben @alyssa see you there", Utc::now()),
//! ];
//!
//! let graph = guess_follows_graph(&posts);
//! let ranking = influencers(&graph);
//! assert_eq!(ranking[0].canonical(), "ben");
//! # Ok::<(), flock_graph::GraphError>(())
//! ```

pub mod error;
pub mod extractors;
pub mod filter;
pub mod follows;
pub mod identity;
pub mod ranking;
pub mod schema;

// Re-export commonly used types
pub use error::GraphError;
pub use extractors::{extract_mentioned_users, extract_mentions, mentions_in_post, MentionSet};
pub use follows::{
    guess_follows_graph, FollowsGraph, FollowsGraphBuilder, GraphConfig, SelfMentionPolicy,
};
pub use identity::{is_username_char, Username};
pub use ranking::{influencers, rank, Influence, InfluencerRanker, RankingConfig};
pub use schema::{Post, Timespan};
