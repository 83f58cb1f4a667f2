//! Blocking HTTP(S) GET of the page whose metadata we want.
//!
//! Uses the curl crate (libcurl) with redirects, timeouts and transparent
//! content decoding taken from [`FetchConfig`].

mod charset;
mod content_type;

pub use charset::{charset_param, decode_body, detect_encoding, meta_charset};
pub use content_type::is_html_content_type;

use crate::config::FetchConfig;
use crate::error::{PreviewError, Result};

/// Body and key response metadata of a completed GET.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Final HTTP status after redirects.
    pub status: u32,
    /// `Content-Type` of the final response, if sent.
    pub content_type: Option<String>,
    /// Response body, decoded using the declared charset (UTF-8 if none).
    pub body: String,
}

/// Performs a GET and returns the page once it is known to be HTML.
///
/// Non-2xx statuses and non-HTML content types are errors. Runs in the
/// current thread.
pub fn fetch_html(url: &str, cfg: &FetchConfig) -> Result<PageResponse> {
    let page = get(url, cfg)?;
    if !(200..300).contains(&page.status) {
        return Err(PreviewError::Http {
            url: url.to_string(),
            status: page.status,
        });
    }
    if let Some(ct) = page.content_type.as_deref() {
        if !is_html_content_type(ct) {
            return Err(PreviewError::NotHtml {
                url: url.to_string(),
                content_type: ct.to_string(),
            });
        }
    }
    Ok(page)
}

/// Raw GET: any status is returned as-is, only transport failures are errors.
pub fn get(url: &str, cfg: &FetchConfig) -> Result<PageResponse> {
    let transport = |source: curl::Error| PreviewError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(cfg.max_redirections).map_err(transport)?;
    easy.connect_timeout(cfg.connect_timeout()).map_err(transport)?;
    easy.timeout(cfg.timeout()).map_err(transport)?;
    easy.useragent(&cfg.user_agent).map_err(transport)?;
    // Empty string: accept every encoding libcurl can decode.
    easy.accept_encoding("").map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let status = easy.response_code().map_err(transport)?;
    let content_type = easy
        .content_type()
        .map_err(transport)?
        .map(str::to_string);

    tracing::debug!(
        url,
        status,
        content_type = content_type.as_deref().unwrap_or("-"),
        bytes = body.len(),
        "fetched page"
    );

    let body = decode_body(content_type.as_deref(), &body);
    Ok(PageResponse {
        status,
        content_type,
        body,
    })
}
