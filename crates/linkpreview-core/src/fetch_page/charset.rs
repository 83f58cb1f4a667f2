//! Character-set detection and decoding of fetched page bodies.
//!
//! Precedence: `charset` parameter of the `Content-Type` header, then a
//! `<meta charset>` / `<meta http-equiv>` declaration near the top of the
//! document, then UTF-8. A byte-order mark overrides all of them.

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// How far into the body a `<meta>` charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#)
        .expect("meta charset pattern is valid")
});

/// The `charset` parameter of a Content-Type value, unquoted.
pub fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then_some(value)
    })
}

/// Charset declared by a `<meta>` tag within the first bytes of `body`.
pub fn meta_charset(body: &[u8]) -> Option<&str> {
    let head = &body[..body.len().min(SNIFF_LEN)];
    let caps = META_CHARSET.captures(head)?;
    std::str::from_utf8(caps.get(1)?.as_bytes()).ok()
}

/// Encoding to decode `body` with; unknown labels fall through to the next source.
pub fn detect_encoding(content_type: Option<&str>, body: &[u8]) -> &'static Encoding {
    content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| meta_charset(body).and_then(|label| Encoding::for_label(label.as_bytes())))
        .unwrap_or(UTF_8)
}

/// Decode `body` to a string; malformed sequences become U+FFFD.
pub fn decode_body(content_type: Option<&str>, body: &[u8]) -> String {
    let encoding = detect_encoding(content_type, body);
    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "page body had malformed sequences");
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_param_cases() {
        assert_eq!(charset_param("text/html; charset=ISO-8859-1"), Some("ISO-8859-1"));
        assert_eq!(charset_param("text/html;Charset=\"utf-8\""), Some("utf-8"));
        assert_eq!(charset_param("text/html; q=1; charset=shift_jis"), Some("shift_jis"));
        assert_eq!(charset_param("text/html"), None);
        assert_eq!(charset_param("text/html; charset="), None);
    }

    #[test]
    fn meta_charset_forms() {
        assert_eq!(meta_charset(br#"<head><meta charset="windows-1252">"#), Some("windows-1252"));
        assert_eq!(
            meta_charset(br#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=iso-8859-1">"#),
            Some("iso-8859-1")
        );
        assert_eq!(meta_charset(b"<html><head><title>x</title>"), None);
    }

    #[test]
    fn meta_charset_only_near_the_top() {
        let mut body = vec![b' '; SNIFF_LEN];
        body.extend_from_slice(br#"<meta charset="iso-8859-1">"#);
        assert_eq!(meta_charset(&body), None);
    }

    #[test]
    fn header_charset_decodes_latin1() {
        let body = b"<meta property=\"og:title\" content=\"Caf\xE9\">";
        let text = decode_body(Some("text/html; charset=ISO-8859-1"), body);
        assert!(text.contains("Café"), "{text}");
    }

    #[test]
    fn meta_charset_used_without_header_charset() {
        let body = b"<meta charset=\"iso-8859-1\"><meta property=\"og:title\" content=\"Caf\xE9\">";
        assert!(decode_body(Some("text/html"), body).contains("Café"));
        assert!(decode_body(None, body).contains("Café"));
    }

    #[test]
    fn header_wins_over_meta() {
        let body = "<meta charset=\"iso-8859-1\">Café".as_bytes();
        assert!(decode_body(Some("text/html; charset=utf-8"), body).ends_with("Café"));
    }

    #[test]
    fn defaults_to_utf8_and_ignores_unknown_labels() {
        let body = "Zürich".as_bytes();
        assert_eq!(decode_body(None, body), "Zürich");
        assert_eq!(decode_body(Some("text/html; charset=bogus-9"), body), "Zürich");
        assert_eq!(decode_body(None, b"a\xFFb"), "a\u{FFFD}b");
    }
}
