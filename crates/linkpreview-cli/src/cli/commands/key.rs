//! `linkpreview key <url>` – cache key and entry path.

use anyhow::Result;
use linkpreview_core::{cache_key, PreviewCache};

pub fn run_key(cache: &PreviewCache, url: &str) -> Result<()> {
    println!("{}  {}", cache_key(url), cache.entry_path(url).display());
    Ok(())
}
