//! Follows-graph inference.
//!
//! Every post author is taken to follow every user their post mentions. The
//! graph is keyed by follower; values are the users they follow. Authors who
//! follow nobody have no entry, so an absent key and an empty follow set mean
//! the same thing.
//!
//! Construction is a fold over posts with [`FollowsGraph::merge_edges`], and
//! [`FollowsGraph::merge`] is a set union per key. Graphs built from disjoint
//! slices of a corpus therefore merge into the graph of the whole corpus, in
//! any order.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::extractors::{mentions_in_post, MentionSet};
use crate::identity::Username;
use crate::schema::Post;

/// What to do when an author mentions themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfMentionPolicy {
    /// Drop the mention; nobody follows themselves.
    #[default]
    Ignore,
    /// Record the mention as a self-loop.
    Keep,
}

/// Configuration for follows-graph construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub self_mentions: SelfMentionPolicy,
}

/// Directed graph of follower → followed usernames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FollowsGraph {
    edges: BTreeMap<Username, BTreeSet<Username>>,
}

impl FollowsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold step: add `follower → followed` edges and return the graph.
    ///
    /// An empty `followed` leaves the graph untouched.
    pub fn merge_edges(
        mut self,
        follower: &Username,
        followed: impl IntoIterator<Item = Username>,
    ) -> Self {
        self.insert_all(follower, followed);
        self
    }

    /// Add a single edge.
    pub fn add_follow(&mut self, follower: Username, followed: Username) {
        self.edges.entry(follower).or_default().insert(followed);
    }

    /// Union of two graphs.
    pub fn merge(mut self, other: FollowsGraph) -> Self {
        for (follower, followed) in other.edges {
            self.insert_all(&follower, followed);
        }
        self
    }

    fn insert_all(&mut self, follower: &Username, followed: impl IntoIterator<Item = Username>) {
        let mut followed = followed.into_iter().peekable();
        if followed.peek().is_none() {
            return;
        }
        // Existing keys and set members keep their first-seen casing.
        self.edges
            .entry(follower.clone())
            .or_default()
            .extend(followed);
    }

    /// Users that `follower` follows, if any.
    pub fn follows(&self, follower: &Username) -> Option<&BTreeSet<Username>> {
        self.edges.get(follower)
    }

    pub fn is_following(&self, follower: &Username, followed: &Username) -> bool {
        self.follows(follower)
            .map(|set| set.contains(followed))
            .unwrap_or(false)
    }

    /// Number of followers (distinct keys whose follow set contains `user`).
    pub fn followers_of(&self, user: &Username) -> usize {
        self.edges.values().filter(|set| set.contains(user)).count()
    }

    /// Every username in the graph, as a key or inside a follow set.
    pub fn users(&self) -> BTreeSet<&Username> {
        self.edges
            .iter()
            .flat_map(|(follower, followed)| std::iter::once(follower).chain(followed))
            .collect()
    }

    /// Number of followers with at least one edge.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Iterate follower → followed in canonical username order.
    pub fn iter(&self) -> impl Iterator<Item = (&Username, &BTreeSet<Username>)> {
        self.edges.iter()
    }
}

impl FromIterator<(Username, Username)> for FollowsGraph {
    fn from_iter<I: IntoIterator<Item = (Username, Username)>>(iter: I) -> Self {
        let mut graph = FollowsGraph::new();
        for (follower, followed) in iter {
            graph.add_follow(follower, followed);
        }
        graph
    }
}

/// Builds a [`FollowsGraph`] from posts.
#[derive(Debug, Clone, Default)]
pub struct FollowsGraphBuilder {
    config: GraphConfig,
}

impl FollowsGraphBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Users the author of `post` is inferred to follow.
    pub fn follows_from(&self, post: &Post) -> MentionSet {
        let mut mentioned = mentions_in_post(post);
        if self.config.self_mentions == SelfMentionPolicy::Ignore
            && mentioned.remove(&post.author)
        {
            debug!("Dropped self-mention by {} in post {}", post.author, post.id);
        }
        mentioned
    }

    /// Infer the follows graph of a post collection.
    ///
    /// Post ids must be distinct; this is checked in debug builds.
    #[instrument(skip_all, fields(posts = posts.len()))]
    pub fn build(&self, posts: &[Post]) -> FollowsGraph {
        debug_assert!(ids_are_distinct(posts), "post ids must be distinct");

        let graph = posts.iter().fold(FollowsGraph::new(), |graph, post| {
            graph.merge_edges(&post.author, self.follows_from(post))
        });

        info!(
            "Built follows graph: {} followers, {} edges from {} posts",
            graph.len(),
            graph.edge_count(),
            posts.len()
        );

        graph
    }
}

/// Infer the follows graph with the default configuration.
pub fn guess_follows_graph(posts: &[Post]) -> FollowsGraph {
    FollowsGraphBuilder::new().build(posts)
}

fn ids_are_distinct(posts: &[Post]) -> bool {
    let mut seen = HashSet::with_capacity(posts.len());
    posts.iter().all(|post| seen.insert(post.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn user(name: &str) -> Username {
        Username::parse(name).unwrap()
    }

    fn post(id: u64, author: &str, text: &str) -> Post {
        let d = DateTime::parse_from_rfc3339("2016-02-17T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Post::new(id, user(author), text, d)
    }

    fn tweet1() -> Post {
        post(
            1,
            "MITOCW",
            "@MITopenlearning component, free lecture notes, exams, and videos from @MIT.",
        )
    }

    fn tweet2() -> Post {
        post(
            2,
            "mitopenlearning",
            "@mit component, transforming teaching and learning at @mit, home of @mitocw",
        )
    }

    fn tweet3() -> Post {
        post(
            3,
            "mitocw",
            "Interactive online courses from @MITOCW, delivered to you via @MITxonedX.",
        )
    }

    fn tweet4() -> Post {
        post(
            4,
            "mit6005",
            "an email address like bitdiddle@mit.edu does NOT contain a mention",
        )
    }

    fn follows_of(graph: &FollowsGraph, name: &str) -> Vec<String> {
        graph
            .follows(&user(name))
            .map(|set| set.iter().map(|u| u.canonical().to_string()).collect())
            .unwrap_or_default()
    }

    fn keys(graph: &FollowsGraph) -> Vec<&str> {
        graph.iter().map(|(k, _)| k.canonical()).collect()
    }

    #[test]
    fn test_empty_collection() {
        let graph = guess_follows_graph(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_no_mentions_has_no_entry() {
        let graph = guess_follows_graph(&[tweet4()]);
        assert!(graph.is_empty());
        assert!(graph.follows(&user("mit6005")).is_none());
    }

    #[test]
    fn test_single_post() {
        let graph = guess_follows_graph(&[tweet1()]);
        assert_eq!(keys(&graph), vec!["mitocw"]);
        assert_eq!(follows_of(&graph, "mitocw"), vec!["mit", "mitopenlearning"]);
    }

    #[test]
    fn test_repeated_mentions() {
        let graph = guess_follows_graph(&[tweet1(), tweet2()]);
        assert_eq!(follows_of(&graph, "mitopenlearning"), vec!["mit", "mitocw"]);
        assert_eq!(keys(&graph), vec!["mitocw", "mitopenlearning"]);
    }

    #[test]
    fn test_case_variant_authors_merge() {
        let graph = guess_follows_graph(&[tweet1(), tweet3()]);

        assert_eq!(graph.len(), 1);
        assert_eq!(
            follows_of(&graph, "MitOcw"),
            vec!["mit", "mitopenlearning", "mitxonedx"]
        );
        // The key keeps the casing of the first post seen.
        let (key, _) = graph.iter().next().unwrap();
        assert_eq!(key.as_str(), "MITOCW");
    }

    #[test]
    fn test_self_mention_ignored_by_default() {
        let graph = guess_follows_graph(&[tweet3()]);
        assert!(!graph.is_following(&user("mitocw"), &user("mitocw")));
        assert_eq!(follows_of(&graph, "mitocw"), vec!["mitxonedx"]);
    }

    #[test]
    fn test_self_mention_kept_when_configured() {
        let builder = FollowsGraphBuilder::with_config(GraphConfig {
            self_mentions: SelfMentionPolicy::Keep,
        });
        let graph = builder.build(&[tweet3()]);
        assert!(graph.is_following(&user("mitocw"), &user("MITOCW")));
        assert_eq!(follows_of(&graph, "mitocw"), vec!["mitocw", "mitxonedx"]);
    }

    #[test]
    fn test_only_self_mention_leaves_no_entry() {
        let graph = guess_follows_graph(&[post(7, "alyssa", "note to self @Alyssa")]);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let posts = vec![tweet1(), tweet2(), tweet3(), tweet4()];
        assert_eq!(guess_follows_graph(&posts), guess_follows_graph(&posts));
    }

    #[test]
    fn test_merge_of_slices_matches_whole() {
        let posts = vec![tweet1(), tweet2(), tweet3(), tweet4()];
        let whole = guess_follows_graph(&posts);

        let (left, right) = posts.split_at(2);
        let a = guess_follows_graph(left);
        let b = guess_follows_graph(right);

        assert_eq!(a.clone().merge(b.clone()), whole);
        assert_eq!(b.merge(a), whole);
    }

    #[test]
    fn test_merge_is_associative() {
        let a = guess_follows_graph(&[tweet1()]);
        let b = guess_follows_graph(&[tweet2()]);
        let c = guess_follows_graph(&[tweet3()]);

        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_merge_edges_with_nothing_followed() {
        let graph = FollowsGraph::new().merge_edges(&user("alyssa"), Vec::new());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_from_iter_and_queries() {
        let graph: FollowsGraph = [
            (user("MIT"), user("MITOCW")),
            (user("mit"), user("mitopenlearning")),
            (user("mitocw"), user("MIT")),
        ]
        .into_iter()
        .collect();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.followers_of(&user("mit")), 1);
        assert_eq!(graph.followers_of(&user("mitopenlearning")), 1);
        assert_eq!(graph.followers_of(&user("nobody")), 0);

        let users: Vec<_> = graph.users().into_iter().map(Username::canonical).collect();
        assert_eq!(users, vec!["mit", "mitocw", "mitopenlearning"]);
    }

    #[test]
    fn test_serialize_as_adjacency_map() {
        let graph: FollowsGraph = [(user("Alyssa"), user("ben"))].into_iter().collect();
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(json, r#"{"Alyssa":["ben"]}"#);
    }

    #[test]
    fn test_config_parse() {
        let config: GraphConfig = toml::from_str("self_mentions = \"keep\"").unwrap();
        assert_eq!(config.self_mentions, SelfMentionPolicy::Keep);

        let config: GraphConfig = toml::from_str("").unwrap();
        assert_eq!(config.self_mentions, SelfMentionPolicy::Ignore);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "post ids must be distinct")]
    fn test_duplicate_ids_abort() {
        guess_follows_graph(&[tweet1(), post(1, "ben", "@alyssa")]);
    }
}
