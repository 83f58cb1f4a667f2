//! `linkpreview resolve <url>` – cached resolution, printed as JSON.

use anyhow::{Context, Result};
use linkpreview_core::PreviewCache;

pub fn run_resolve(cache: &PreviewCache, url: &str) -> Result<()> {
    let preview = cache
        .resolve(url)
        .with_context(|| format!("resolve {url}"))?;
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
