//! Open Graph properties and their normalization into a [`LinkPreview`].
//!
//! Parsing (`parse`) only collects `property` tags; this module decides which
//! of them make up a preview and derives `domain` and the absolute image URL.

mod parse;

pub(crate) use parse::parse_properties;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::preview::LinkPreview;

pub const OG_TITLE: &str = "og:title";
pub const OG_URL: &str = "og:url";
pub const OG_IMAGE: &str = "og:image";
pub const OG_DESCRIPTION: &str = "og:description";

static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(http|https)://([^/]+)").expect("domain pattern is valid"));

/// Page metadata tags: property name to values in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OgProperties {
    tags: HashMap<String, Vec<String>>,
}

impl OgProperties {
    /// Parse `property` meta tags out of an HTML document.
    pub fn from_html(html: &str) -> Self {
        parse_properties(html)
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.tags.entry(name.into()).or_default().push(value.into());
    }

    /// First value recorded for `name`, if the tag was present.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.tags
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Property names present, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

impl LinkPreview {
    /// Build a preview from collected properties.
    ///
    /// `domain` comes from `og:url`; a root-relative `og:image` is rewritten
    /// against that domain. Missing tags leave their field `None`.
    pub fn from_properties(props: &OgProperties) -> Self {
        let url = props.first(OG_URL).map(str::to_string);
        let domain = extract_domain(url.as_deref());
        let image = to_absolute_url(props.first(OG_IMAGE), domain.as_deref());
        LinkPreview {
            title: props.first(OG_TITLE).map(str::to_string),
            url,
            image,
            description: props.first(OG_DESCRIPTION).map(str::to_string),
            domain,
        }
    }
}

/// Host part of an `http`/`https` URL, e.g. `https://example.com/a` → `example.com`.
///
/// Returns `None` for `None` or anything not shaped `scheme://host...`. A port,
/// if present, stays part of the host.
pub fn extract_domain(url: Option<&str>) -> Option<String> {
    let caps = DOMAIN_RE.captures(url?)?;
    caps.get(2).map(|m| m.as_str().to_string())
}

/// Make a root-relative image path protocol-relative: `/i.png` → `//{domain}/i.png`.
///
/// Anything not starting with `/` is returned unchanged. With no domain the
/// host segment is left empty (`///i.png`), matching long-standing behaviour.
pub fn to_absolute_url(image: Option<&str>, domain: Option<&str>) -> Option<String> {
    let image = image?;
    if image.starts_with('/') {
        return Some(format!("//{}{}", domain.unwrap_or_default(), image));
    }
    Some(image.to_string())
}
