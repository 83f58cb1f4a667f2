//! Open Graph link previews backed by a content-addressed disk cache.
//!
//! [`PreviewCache::resolve`] returns the cached [`LinkPreview`] for a URL, or
//! fetches the page through a [`MetadataFetcher`] and persists the result.

pub mod config;
pub mod logging;

pub mod cache;
pub mod error;
pub mod fetch_page;
pub mod fetcher;
pub mod og;
pub mod preview;
pub mod render;

pub use cache::{cache_key, PreviewCache};
pub use error::PreviewError;
pub use fetcher::{MetadataFetcher, OpenGraphFetcher};
pub use og::{extract_domain, to_absolute_url, OgProperties};
pub use preview::LinkPreview;
pub use render::render_card;
