//! Content-Type checks for fetched pages.

/// True if the media type (parameters ignored) is an HTML document type.
pub fn is_html_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case("text/html") || essence.eq_ignore_ascii_case("application/xhtml+xml")
}
