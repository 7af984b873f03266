use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Args;
use console::style;
use flock_graph::{filter, Post, Timespan, Username};

use crate::commands::load_corpus;
use crate::ui;

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Corpus file (JSON array or JSON Lines)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Keep posts by this author (case-insensitive)
    #[arg(long)]
    pub author: Option<String>,

    /// Keep posts at or after this instant (RFC 3339)
    #[arg(long)]
    pub since: Option<DateTime<Utc>>,

    /// Keep posts at or before this instant (RFC 3339)
    #[arg(long)]
    pub until: Option<DateTime<Utc>>,

    /// Keep posts containing any of these words (repeatable)
    #[arg(long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: FilterArgs) -> Result<()> {
    let posts = load_corpus(&args.corpus)?;
    let kept = apply(&posts, &args)?;

    if args.json {
        return ui::json(&kept);
    }

    if kept.is_empty() {
        ui::empty("No posts matched");
        return Ok(());
    }

    for post in &kept {
        println!(
            "  {} {} {}",
            style(format!("#{}", post.id)).dim(),
            style(&post.author).bold(),
            style(post.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)).dim()
        );
        ui::info(&post.text);
    }
    println!();
    ui::success(&format!("{} of {} posts matched", kept.len(), posts.len()));

    Ok(())
}

/// Apply every filter given in `args`, preserving input order.
pub(crate) fn apply(posts: &[Post], args: &FilterArgs) -> Result<Vec<Post>> {
    let mut kept: Vec<Post> = posts.to_vec();

    if let Some(author) = &args.author {
        let author = Username::parse(author.as_str())?;
        kept = filter::written_by(&kept, &author)
            .into_iter()
            .cloned()
            .collect();
    }

    if args.since.is_some() || args.until.is_some() {
        let span = Timespan::new(
            args.since.unwrap_or(DateTime::<Utc>::MIN_UTC),
            args.until.unwrap_or(DateTime::<Utc>::MAX_UTC),
        )?;
        kept = filter::in_timespan(&kept, span)
            .into_iter()
            .cloned()
            .collect();
    }

    if !args.words.is_empty() {
        kept = filter::containing(&kept, args.words.as_slice())
            .into_iter()
            .cloned()
            .collect();
    }

    Ok(kept)
}
