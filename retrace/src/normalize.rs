//! Text normalization for searchable blobs and queries.
//!
//! Everything here is pure and total: decode failures degrade to the best
//! value obtained so far instead of propagating. Both indexed rows and user
//! queries go through [`normalize`], so matching is a plain substring test
//! over canonical text.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Punctuation treated as a word separator, matching what titles and URLs
/// actually contain: path/query delimiters, brackets, quotes, and the usual
/// ASCII noise.
static SEPARATORS: Lazy<HashSet<char>> = Lazy::new(|| {
    [
        '-', '_', '.', '/', ':', '?', '=', '&', '%', '#', '|', '\\', '(', ')', '[', ']', '{',
        '}', '"', '\'', '`', '~', '!', '@', '$', '^', '*', ',', ';', '+', '<', '>',
    ]
    .into_iter()
    .collect()
});

/// Zero-width and format characters stripped before separator collapsing.
const ZERO_WIDTH: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

/// Canonical searchable form: NFKC composition, lowercase, zero-width
/// characters stripped, every maximal run of whitespace/punctuation
/// collapsed to a single space, leading/trailing space trimmed.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_separator = false;
    for ch in text.nfkc().flat_map(char::to_lowercase) {
        if ZERO_WIDTH.contains(&ch) {
            continue;
        }
        if is_separator(ch) {
            in_separator = true;
            continue;
        }
        if in_separator && !out.is_empty() {
            out.push(' ');
        }
        in_separator = false;
        out.push(ch);
    }
    out
}

/// Percent decoding failed to produce text.
#[derive(Debug, Error)]
pub(crate) enum DecodeError {
    #[error("percent-decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// One percent-decode pass over the whole string. Malformed escapes are left
/// in place by the decoder; only invalid UTF-8 in the decoded bytes fails.
fn decode_once(text: &str) -> Result<String, DecodeError> {
    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Best-effort URL text decoding. `+` is taken as the form-encoding space
/// substitute, then percent decoding is applied up to twice (query strings
/// in the wild are often double-encoded), stopping early when a pass is a
/// no-op or fails. Never fails outward: the caller always gets the best
/// value obtained so far.
pub fn safe_decode(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut value = text.replace('+', "%20");
    for _ in 0..2 {
        match decode_once(&value) {
            Ok(decoded) if decoded == value => break,
            Ok(decoded) => value = decoded,
            Err(_) => break,
        }
    }
    value
}

/// CJK Unified Ideographs (incl. Extension A) and Compatibility Ideographs.
fn has_cjk(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{3400}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}'))
}

/// Minimum query length (in chars) before a search fires. A single CJK
/// character carries enough meaning to search on; a single Latin character
/// is too noisy.
pub fn min_query_length(query: &str) -> usize {
    if has_cjk(query) {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_folds_fullwidth() {
        // NFKC folds fullwidth forms to ASCII before lowercasing
        assert_eq!(normalize("ＧｉｔＨｕｂ"), "github");
        assert_eq!(normalize("Hello World"), "hello world");
    }

    #[test]
    fn test_normalize_collapses_separator_runs() {
        assert_eq!(normalize("foo---bar__baz"), "foo bar baz");
        assert_eq!(normalize("https://github.com/pricing?tab=teams"), "https github com pricing tab teams");
        assert_eq!(normalize("  spaced \t out  "), "spaced out");
    }

    #[test]
    fn test_normalize_strips_zero_width() {
        assert_eq!(normalize("git\u{200B}hub"), "github");
        assert_eq!(normalize("\u{FEFF}title"), "title");
        assert_eq!(normalize("a\u{200C}\u{200D}b"), "ab");
    }

    #[test]
    fn test_normalize_all_punctuation_is_empty() {
        assert_eq!(normalize("?!#..//"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in [
            "Hello  World",
            "ＧｉｔＨｕｂ Pricing",
            "https://github.com/pricing?tab=teams",
            "caf\u{00E9} au lait",
            "\u{6700}\u{8FD1}\u{8BBF}\u{95EE}",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_safe_decode_single_pass() {
        assert_eq!(safe_decode("hello%20world"), "hello world");
        assert_eq!(safe_decode("tab%3Dteams"), "tab=teams");
    }

    #[test]
    fn test_safe_decode_double_encoded() {
        // %2520 -> %20 -> space
        assert_eq!(safe_decode("a%2520b"), "a b");
    }

    #[test]
    fn test_safe_decode_plus_as_space() {
        assert_eq!(safe_decode("hello+world"), "hello world");
    }

    #[test]
    fn test_safe_decode_stops_on_invalid_utf8() {
        // %FF decodes to an invalid UTF-8 byte; the pre-decode value survives
        assert_eq!(safe_decode("%FF"), "%FF");
        // a malformed escape is left in place rather than failing
        assert_eq!(safe_decode("100%zz"), "100%zz");
    }

    #[test]
    fn test_safe_decode_plain_text_untouched() {
        assert_eq!(safe_decode("plain text"), "plain text");
        assert_eq!(safe_decode(""), "");
    }

    #[test]
    fn test_min_query_length_latin() {
        assert_eq!(min_query_length("g"), 2);
        assert_eq!(min_query_length("git"), 2);
    }

    #[test]
    fn test_min_query_length_cjk() {
        assert_eq!(min_query_length("\u{6700}"), 1);
        // compatibility ideograph range
        assert_eq!(min_query_length("\u{F900}"), 1);
        // mixed input counts as CJK
        assert_eq!(min_query_length("g\u{6700}"), 1);
    }
}
