//! `linkpreview render <url>` – link-card HTML.

use anyhow::{Context, Result};
use linkpreview_core::{render_card, PreviewCache};

pub fn run_render(cache: &PreviewCache, url: &str) -> Result<()> {
    let preview = cache
        .resolve(url)
        .with_context(|| format!("resolve {url}"))?;
    print!("{}", render_card(url, &preview));
    Ok(())
}
