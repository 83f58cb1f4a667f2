//! CLI for linkpreview.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkpreview_core::{config, PreviewCache};
use std::path::PathBuf;

use commands::{run_fetch, run_forget, run_key, run_render, run_resolve, run_show};

/// Top-level CLI for linkpreview.
#[derive(Debug, Parser)]
#[command(name = "linkpreview")]
#[command(about = "Resolve URLs into cached Open Graph link previews", long_about = None)]
pub struct Cli {
    /// Cache directory (overrides `cache_dir` from config.toml).
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Log to stderr instead of the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the preview for a URL, fetching and caching it on a miss.
    Resolve {
        /// Page URL.
        url: String,
    },

    /// Fetch a URL's preview without reading or writing the cache.
    Fetch {
        /// Page URL.
        url: String,
        /// Print every `property` meta tag instead of the normalized preview.
        #[arg(long)]
        raw: bool,
    },

    /// Print link-card HTML for a URL (resolved through the cache).
    Render {
        /// Page URL.
        url: String,
    },

    /// Print the cached preview for a URL, if any. Never fetches.
    Show {
        /// Page URL.
        url: String,
    },

    /// Print the cache key and entry path for a URL.
    Key {
        /// Page URL.
        url: String,
    },

    /// Delete the cached preview for a URL so the next resolve fetches again.
    Forget {
        /// Page URL.
        url: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut cfg = config::load_or_init()?;
        if let Some(dir) = self.cache_dir {
            cfg.cache_dir = dir;
        }
        tracing::debug!("loaded config: {:?}", cfg);
        let cache = PreviewCache::from_config(&cfg);

        match self.command {
            CliCommand::Resolve { url } => run_resolve(&cache, &url)?,
            CliCommand::Fetch { url, raw } => run_fetch(cache.fetcher(), &url, raw)?,
            CliCommand::Render { url } => run_render(&cache, &url)?,
            CliCommand::Show { url } => run_show(&cache, &url)?,
            CliCommand::Key { url } => run_key(&cache, &url)?,
            CliCommand::Forget { url } => run_forget(&cache, &url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
