//! `linkpreview forget <url>` – delete a cached entry.

use anyhow::{Context, Result};
use linkpreview_core::PreviewCache;

pub fn run_forget(cache: &PreviewCache, url: &str) -> Result<()> {
    let path = cache.entry_path(url);
    match std::fs::remove_file(&path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "deleted cache entry");
            println!("Removed cached preview for {url}");
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => println!("Not cached: {url}"),
        Err(e) => return Err(e).with_context(|| format!("delete {}", path.display())),
    }
    Ok(())
}
