//! Content-addressed disk cache of resolved previews.
//!
//! Each distinct URL maps to `{cache_dir}/{md5-hex(url)}.json`. An entry, once
//! written, is the durable resolution for that URL: it is never refreshed and
//! never partially re-fetched. There is no eviction; deleting the file is the
//! only way to force a new fetch.
//!
//! The directory is owned by the caller. When it is not an existing directory
//! (absent, or a regular file in its place), previews are still resolved but
//! nothing is read or persisted and a warning is logged.

mod entry;
mod key;

pub use key::{cache_key, entry_path};

use std::path::{Path, PathBuf};

use crate::config::PreviewConfig;
use crate::error::Result;
use crate::fetcher::{MetadataFetcher, OpenGraphFetcher};
use crate::preview::LinkPreview;

/// Disk cache in front of a [`MetadataFetcher`].
#[derive(Debug, Clone)]
pub struct PreviewCache<F = OpenGraphFetcher> {
    dir: PathBuf,
    fetcher: F,
}

impl PreviewCache<OpenGraphFetcher> {
    /// Cache at `cfg.cache_dir` backed by an HTTP fetcher using `cfg`'s fetch settings.
    pub fn from_config(cfg: &PreviewConfig) -> Self {
        Self::new(&cfg.cache_dir, OpenGraphFetcher::new(cfg.fetch_config()))
    }
}

impl<F: MetadataFetcher> PreviewCache<F> {
    pub fn new(dir: impl Into<PathBuf>, fetcher: F) -> Self {
        Self {
            dir: dir.into(),
            fetcher,
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.dir
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Whether resolutions are persisted, i.e. the cache directory exists now.
    pub fn is_enabled(&self) -> bool {
        self.dir.is_dir()
    }

    /// Path of the entry for `url`, whether or not it exists.
    pub fn entry_path(&self, url: &str) -> PathBuf {
        entry_path(&self.dir, url)
    }

    /// Cached preview for `url`, without ever fetching. Always `None` while
    /// the cache is disabled.
    pub fn lookup(&self, url: &str) -> Result<Option<LinkPreview>> {
        if !self.is_enabled() {
            return Ok(None);
        }
        entry::read_entry(&self.entry_path(url))
    }

    /// Persist `preview` as the entry for `url`, replacing any existing one.
    pub fn store(&self, url: &str, preview: &LinkPreview) -> Result<()> {
        entry::write_entry(&self.dir, &self.entry_path(url), preview)
    }

    /// Cached preview for `url`, fetching and persisting it on a miss.
    ///
    /// A hit never calls the fetcher. A corrupt entry is an error, not a miss.
    /// Fetch errors propagate unchanged and nothing is written for them.
    pub fn resolve(&self, url: &str) -> Result<LinkPreview> {
        if !self.is_enabled() {
            let preview = self.fetcher.get(url)?;
            tracing::warn!(
                "'{}' directory does not exist. Create it for caching.",
                self.dir.display()
            );
            return Ok(preview);
        }

        let path = self.entry_path(url);
        if let Some(preview) = entry::read_entry(&path)? {
            tracing::debug!(url, path = %path.display(), "preview cache hit");
            return Ok(preview);
        }

        tracing::debug!(url, "preview cache miss, fetching");
        let preview = self.fetcher.get(url)?;
        entry::write_entry(&self.dir, &path, &preview)?;
        tracing::debug!(url, path = %path.display(), "stored preview");
        Ok(preview)
    }
}
