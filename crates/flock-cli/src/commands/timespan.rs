use std::path::Path;

use anyhow::Result;
use chrono::SecondsFormat;
use console::style;
use flock_graph::Timespan;

use crate::commands::load_corpus;
use crate::ui;

pub fn run(corpus: &Path) -> Result<()> {
    let posts = load_corpus(corpus)?;

    let Some(span) = Timespan::spanning(&posts) else {
        ui::empty("Corpus is empty");
        return Ok(());
    };

    println!(
        "  {:<6} {}",
        style("start").bold(),
        span.start().to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    println!(
        "  {:<6} {}",
        style("end").bold(),
        span.end().to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    ui::info(&format!(
        "{} posts over {}s",
        posts.len(),
        (span.end() - span.start()).num_seconds()
    ));

    Ok(())
}
