use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod corpus;
mod paths;
mod ui;

use commands::filter::FilterArgs;
use config::FlockConfig;

#[derive(Parser)]
#[command(name = "flock")]
#[command(about = "Guess who follows whom from a pile of posts.")]
#[command(version)]
struct Cli {
    /// Config file (default: $FLOCK_CONFIG, then ./flock.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every user mentioned in the corpus
    Mentions {
        /// Corpus file (JSON array or JSON Lines)
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,
    },

    /// Show the inferred follows graph
    Graph {
        /// Corpus file (JSON array or JSON Lines)
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank users by follower count
    Influencers {
        /// Corpus file (JSON array or JSON Lines)
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,

        /// Show only the top N users
        #[arg(long, short = 'n', value_name = "N")]
        top: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the time interval the corpus spans
    Timespan {
        /// Corpus file (JSON array or JSON Lines)
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,
    },

    /// Print posts matching author, time window and keyword filters
    Filter(FilterArgs),
}

fn main() -> Result<()> {
    // Logs are hidden unless RUST_LOG asks for them
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = FlockConfig::load(&paths::get_config_path(cli.config))?;

    match cli.command {
        Commands::Mentions { corpus } => commands::mentions::run(&corpus),
        Commands::Graph { corpus, json } => commands::graph::run(&corpus, &config, json),
        Commands::Influencers { corpus, top, json } => {
            commands::influencers::run(&corpus, &config, top, json)
        }
        Commands::Timespan { corpus } => commands::timespan::run(&corpus),
        Commands::Filter(args) => commands::filter::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_influencers() {
        let cli = Cli::parse_from(["flock", "influencers", "posts.json", "-n", "5", "--json"]);
        match cli.command {
            Commands::Influencers { corpus, top, json } => {
                assert_eq!(corpus, PathBuf::from("posts.json"));
                assert_eq!(top, Some(5));
                assert!(json);
            }
            _ => panic!("expected influencers command"),
        }
    }

    #[test]
    fn test_parse_filter() {
        let cli = Cli::parse_from([
            "flock",
            "--config",
            "custom.toml",
            "filter",
            "posts.jsonl",
            "--author",
            "alyssa",
            "--since",
            "2016-02-17T10:00:00Z",
            "--word",
            "talk",
            "--word",
            "rivest",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Filter(args) => {
                assert_eq!(args.author.as_deref(), Some("alyssa"));
                assert!(args.since.is_some());
                assert!(args.until.is_none());
                assert_eq!(args.words, vec!["talk", "rivest"]);
            }
            _ => panic!("expected filter command"),
        }
    }
}
