//! Errors surfaced by fetching and caching previews.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single resolution. Nothing here is recovered automatically.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Connection, DNS, TLS, timeout or malformed URL.
    #[error("fetch {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Final response status was not 2xx.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// The response is not an HTML document.
    #[error("{url} is not an HTML page (content type: {content_type})")]
    NotHtml { url: String, content_type: String },

    /// A cache entry exists but does not hold a valid preview.
    #[error("corrupt cache entry {}", path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a cache entry failed at the file-system level.
    #[error("cache I/O on {}", path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PreviewError {
    /// True for errors raised while fetching the page (as opposed to the cache).
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            PreviewError::Transport { .. } | PreviewError::Http { .. } | PreviewError::NotHtml { .. }
        )
    }
}

pub type Result<T, E = PreviewError> = std::result::Result<T, E>;
