//! Collect `<meta property=... content=...>` tags from an HTML document.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::OgProperties;

static META_PROPERTY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[property]").expect("meta selector is valid"));

/// Parse every `meta` element carrying a `property` attribute.
///
/// Names are lowercased; values keep document order. A tag without `content`
/// contributes nothing, so a key that is present always has a value.
pub(crate) fn parse_properties(html: &str) -> OgProperties {
    let mut props = OgProperties::default();
    let document = Html::parse_document(html);
    for element in document.select(&META_PROPERTY) {
        let el = element.value();
        let (Some(name), Some(content)) = (el.attr("property"), el.attr("content")) else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        props.push(name.to_ascii_lowercase(), content.to_string());
    }
    props
}
