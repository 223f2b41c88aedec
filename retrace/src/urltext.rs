//! URL text expansion for indexing.
//!
//! A row's URL contributes more than its verbatim form to the searchable
//! blob: the decoded URL, hostname, path, and every query-parameter key and
//! value (each ± decoded). This is what lets a bare parameter value or a
//! hostname fragment match even when it never appears in the title.

use url::Url;

use crate::normalize::safe_decode;

/// Expanded text blob for a URL. Always contains the raw and decoded URL;
/// when the URL parses as an absolute URL, also the hostname, path, and
/// query parameters in iteration order. A URL that fails to parse degrades
/// silently to the raw + decoded form; the row is still indexed.
pub fn expand(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let mut joined = format!("{} {}", url, safe_decode(url));
    if let Ok(parsed) = Url::parse(url) {
        let host = parsed.host_str().unwrap_or("");
        let path = parsed.path();
        let decoded_host = safe_decode(host);
        let decoded_path = safe_decode(path);
        for part in [host, decoded_host.as_str(), path, decoded_path.as_str()] {
            joined.push(' ');
            joined.push_str(part);
        }
        // query_pairs() already applies one decode pass (the form-encoding
        // convention); the extra safe_decode covers double-encoded values
        for (key, value) in parsed.query_pairs() {
            let decoded_key = safe_decode(&key);
            let decoded_value = safe_decode(&value);
            for part in [key.as_ref(), value.as_ref(), decoded_key.as_str(), decoded_value.as_str()] {
                joined.push(' ');
                joined.push_str(part);
            }
        }
    }
    joined
}
