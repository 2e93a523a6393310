//! CLI for managing per-domain feed settings.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use feedtune_core::config;
use feedtune_core::settings::MediaHandling;
use feedtune_core::SettingsDb;
use std::path::PathBuf;

use commands::{run_info, run_list, run_preview, run_remove, run_set};

/// Top-level CLI for feedtune.
#[derive(Debug, Parser)]
#[command(name = "feedtune")]
#[command(about = "feedtune: per-domain presentation settings for feed items", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create or update settings for a domain.
    Set(SetArgs),

    /// List all enabled domain settings.
    List,

    /// Remove settings for a domain.
    Remove {
        /// Domain or any URL on it.
        domain: String,
    },

    /// Show category, custom settings and suggested hashtags for a URL.
    Info {
        /// URL (or bare domain) to inspect.
        url: String,
    },

    /// Show how an item from a URL would be presented with the stored settings.
    Preview {
        /// Item link.
        url: String,
        /// Item title.
        #[arg(long)]
        title: String,
        /// Title of the feed the item came from.
        #[arg(long, default_value = "")]
        feed_title: String,
        /// File holding the item content (empty content if omitted).
        #[arg(long, value_name = "PATH")]
        content_file: Option<PathBuf>,
    },
}

/// Fields accepted by `feedtune set`. Omitted flags keep the stored value.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// Domain or any URL on it.
    pub domain: String,
    /// Title template using {title} and {feed_title}; an empty string clears it.
    #[arg(long)]
    pub title_template: Option<String>,
    /// Hashtag to add to items from this domain (repeatable; replaces stored list).
    #[arg(long = "hashtag", value_name = "TAG")]
    pub hashtags: Vec<String>,
    /// Media handling: auto, include, exclude, only_media.
    #[arg(long, value_parser = parse_media)]
    pub media: Option<MediaHandling>,
    /// Send mode (0 inherits).
    #[arg(long, allow_negative_numbers = true)]
    pub send_mode: Option<i16>,
    /// Author display (0 inherits).
    #[arg(long, allow_negative_numbers = true)]
    pub display_author: Option<i16>,
    /// Via display (0 inherits).
    #[arg(long, allow_negative_numbers = true)]
    pub display_via: Option<i16>,
    /// Message style (0 inherits).
    #[arg(long, allow_negative_numbers = true)]
    pub style: Option<i16>,
    /// Regex removed from item content (repeatable; replaces stored removals).
    #[arg(long = "remove-pattern", value_name = "REGEX")]
    pub remove_patterns: Vec<String>,
    /// Regex replacement applied to item content (repeatable; replaces stored replacements).
    #[arg(long = "replace", num_args = 2, value_names = ["REGEX", "REPLACEMENT"])]
    pub replace: Vec<String>,
    /// Keep the settings but stop applying them.
    #[arg(long, conflicts_with = "enable")]
    pub disable: bool,
    /// Re-enable previously disabled settings.
    #[arg(long)]
    pub enable: bool,
}

fn parse_media(s: &str) -> Result<MediaHandling, String> {
    match s {
        "auto" | "include" | "exclude" | "only_media" => Ok(MediaHandling::from_str(s)),
        other => Err(format!(
            "unknown media handling '{other}' (expected auto, include, exclude or only_media)"
        )),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let db = match &cfg.database_path {
            Some(path) => SettingsDb::open_at(path).await?,
            None => SettingsDb::open_default().await?,
        };

        match cli.command {
            CliCommand::Set(args) => run_set(&db, args).await?,
            CliCommand::List => run_list(&db).await?,
            CliCommand::Remove { domain } => run_remove(&db, &domain).await?,
            CliCommand::Info { url } => run_info(&db, &url).await?,
            CliCommand::Preview {
                url,
                title,
                feed_title,
                content_file,
            } => {
                run_preview(&db, &cfg, &url, &title, &feed_title, content_file.as_deref()).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
