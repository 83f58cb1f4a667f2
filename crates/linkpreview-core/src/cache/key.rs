//! Cache keys: lowercase hex MD5 of the requested URL string.

use md5::{Digest, Md5};
use std::path::{Path, PathBuf};

/// File extension of cache entries.
pub(crate) const ENTRY_EXTENSION: &str = "json";

/// Deterministic, filesystem-safe key for `url`. The URL is hashed as given,
/// without normalization.
pub fn cache_key(url: &str) -> String {
    hex::encode(Md5::digest(url.as_bytes()))
}

/// `{dir}/{cache_key(url)}.json`
pub fn entry_path(dir: &Path, url: &str) -> PathBuf {
    dir.join(format!("{}.{}", cache_key(url), ENTRY_EXTENSION))
}
