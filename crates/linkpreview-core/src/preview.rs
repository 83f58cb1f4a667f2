//! The resolved preview record for one URL.

use serde::{Deserialize, Serialize};

/// Metadata resolved for one URL: what a link card needs to render.
///
/// Every field is independently optional. A record with all fields `None` is
/// still a valid resolution and is cached like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreview {
    /// Page title from `og:title`.
    #[serde(default)]
    pub title: Option<String>,
    /// Canonical URL from `og:url` (may differ from the requested URL).
    #[serde(default)]
    pub url: Option<String>,
    /// Image from `og:image`; root-relative paths are made protocol-relative.
    #[serde(default)]
    pub image: Option<String>,
    /// Page description from `og:description`.
    #[serde(default)]
    pub description: Option<String>,
    /// Host part of `url`.
    #[serde(default)]
    pub domain: Option<String>,
}

impl LinkPreview {
    /// True when every field a full card needs is present.
    ///
    /// `url` is not required: cards link to the URL the caller asked for.
    pub fn is_complete(&self) -> bool {
        self.title.is_some()
            && self.image.is_some()
            && self.description.is_some()
            && self.domain.is_some()
    }
}
