//! `linkpreview show <url>` – print a cached entry without fetching.

use anyhow::Result;
use linkpreview_core::PreviewCache;

pub fn run_show(cache: &PreviewCache, url: &str) -> Result<()> {
    match cache.lookup(url)? {
        Some(preview) => println!("{}", serde_json::to_string_pretty(&preview)?),
        None => println!("Not cached: {url}"),
    }
    Ok(())
}
