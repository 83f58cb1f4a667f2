//! Link-card HTML for a resolved preview.
//!
//! When any of title, image, description or domain is missing the card
//! degrades to a bare link. Values are HTML-escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::preview::LinkPreview;

/// Render `preview` as a link card pointing at `url` (the URL as requested).
pub fn render_card(url: &str, preview: &LinkPreview) -> String {
    let href = encode_double_quoted_attribute(url);
    let link_text = encode_text(url);

    let (Some(title), Some(image), Some(description), Some(domain)) = (
        preview.title.as_deref(),
        preview.image.as_deref(),
        preview.description.as_deref(),
        preview.domain.as_deref(),
    ) else {
        return format!(
            r#"<div class="jekyll-linkpreview-wrapper">
  <p><a href="{href}" target="_blank">{link_text}</a></p>
</div>
"#
        );
    };

    let image = encode_double_quoted_attribute(image);
    let title = encode_text(title);
    let description = encode_text(description);
    let domain_href = encode_double_quoted_attribute(domain);
    let domain_text = encode_text(domain);

    format!(
        r#"<div class="jekyll-linkpreview-wrapper">
  <p><a href="{href}" target="_blank">{link_text}</a></p>
  <div class="jekyll-linkpreview-wrapper-inner">
    <div class="jekyll-linkpreview-content">
      <div class="jekyll-linkpreview-image">
        <a href="{href}" target="_blank">
          <img src="{image}" />
        </a>
      </div>
      <div class="jekyll-linkpreview-body">
        <h2 class="jekyll-linkpreview-title">
          <a href="{href}" target="_blank">{title}</a>
        </h2>
        <div class="jekyll-linkpreview-description">{description}</div>
      </div>
    </div>
    <div class="jekyll-linkpreview-footer">
      <a href="//{domain_href}" target="_blank">{domain_text}</a>
    </div>
  </div>
</div>
"#
    )
}
