//! Fetcher interface for turning a URL into a [`LinkPreview`].
//!
//! The cache only depends on this trait and does not know how pages are
//! retrieved or parsed.

use crate::config::FetchConfig;
use crate::error::Result;
use crate::fetch_page;
use crate::og::OgProperties;
use crate::preview::LinkPreview;

/// Produces a fresh preview for a URL. Implementations perform I/O on every call.
pub trait MetadataFetcher {
    fn get(&self, url: &str) -> Result<LinkPreview>;
}

impl<T: MetadataFetcher + ?Sized> MetadataFetcher for &T {
    fn get(&self, url: &str) -> Result<LinkPreview> {
        (**self).get(url)
    }
}

impl<T: MetadataFetcher + ?Sized> MetadataFetcher for Box<T> {
    fn get(&self, url: &str) -> Result<LinkPreview> {
        (**self).get(url)
    }
}

/// Fetches the page over HTTP(S) and reads its Open Graph tags.
#[derive(Debug, Clone, Default)]
pub struct OpenGraphFetcher {
    cfg: FetchConfig,
}

impl OpenGraphFetcher {
    pub fn new(cfg: FetchConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.cfg
    }

    /// Fetch and parse without normalizing, e.g. to inspect every tag.
    pub fn properties(&self, url: &str) -> Result<OgProperties> {
        let page = fetch_page::fetch_html(url, &self.cfg)?;
        Ok(OgProperties::from_html(&page.body))
    }
}

impl MetadataFetcher for OpenGraphFetcher {
    fn get(&self, url: &str) -> Result<LinkPreview> {
        let props = self.properties(url)?;
        tracing::debug!(url, tags = props.len(), "parsed open graph tags");
        Ok(LinkPreview::from_properties(&props))
    }
}
