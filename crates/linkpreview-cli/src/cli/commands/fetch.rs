//! `linkpreview fetch <url>` – bypass the cache.

use anyhow::{Context, Result};
use linkpreview_core::{MetadataFetcher, OpenGraphFetcher};

pub fn run_fetch(fetcher: &OpenGraphFetcher, url: &str, raw: bool) -> Result<()> {
    if raw {
        let props = fetcher
            .properties(url)
            .with_context(|| format!("fetch {url}"))?;
        let mut names: Vec<&str> = props.names().collect();
        names.sort_unstable();
        for name in names {
            for value in props.values(name) {
                println!("{name}\t{value}");
            }
        }
        return Ok(());
    }
    let preview = fetcher.get(url).with_context(|| format!("fetch {url}"))?;
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
