use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use linkmatch::config::Config;
use linkmatch::MatchMode;

#[derive(Parser)]
#[command(name = "linkmatch")]
#[command(author, version, about = "Resolve GitHub-style markdown links against repository paths")]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a link into its path-matching pattern
    Pattern {
        /// Link target as written in the document
        target: String,

        /// Path of the document containing the link
        #[arg(long)]
        from: String,

        /// Project base path (overrides the config default)
        #[arg(long)]
        base: Option<String>,

        /// Treat the link as an image link
        #[arg(long)]
        image: bool,

        /// Treat the link as a wiki link
        #[arg(long)]
        wiki: bool,

        /// Relaxed matching: subdirectory descent, inferred extensions
        #[arg(long)]
        loose: bool,

        /// Completion matching: the filename is unconstrained
        #[arg(long)]
        completion: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the files under a project root that a link resolves to
    Find {
        /// Link target as written in the document
        target: String,

        /// Path of the document containing the link
        #[arg(long)]
        from: String,

        /// Project root directory to scan (also used as the base path)
        #[arg(long)]
        root: PathBuf,

        /// Treat the link as an image link
        #[arg(long)]
        image: bool,

        /// Treat the link as a wiki link
        #[arg(long)]
        wiki: bool,

        /// Relaxed matching: subdirectory descent, inferred extensions
        #[arg(long)]
        loose: bool,

        /// Completion matching: the filename is unconstrained
        #[arg(long)]
        completion: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Pattern {
            target,
            from,
            base,
            image,
            wiki,
            loose,
            completion,
            json,
        } => {
            let base = match base.or_else(|| config.base.clone()) {
                Some(base) => base,
                None => bail!("no project base path: pass --base or set one in the config"),
            };
            let kind = cli::commands::link_kind(image, wiki)?;
            let mode = mode_for(loose, completion, &config);
            cli::commands::pattern(&base, &from, &target, kind, mode, json)
        }
        Commands::Find {
            target,
            from,
            root,
            image,
            wiki,
            loose,
            completion,
        } => {
            let kind = cli::commands::link_kind(image, wiki)?;
            let mode = mode_for(loose, completion, &config);
            cli::commands::find(&root, &from, &target, kind, mode)
        }
    }
}

fn mode_for(loose: bool, completion: bool, config: &Config) -> MatchMode {
    if completion {
        MatchMode::Completion
    } else if loose || config.loose {
        MatchMode::Loose
    } else {
        MatchMode::Strict
    }
}
