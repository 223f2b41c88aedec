//! Multi-token query matching over indexed rows.
//!
//! A row matches when every query token is a plain substring of its
//! searchable blob (AND semantics, no word boundaries, no prefix bias).
//! Matching never reorders: results are a subsequence of the snapshot's
//! recency-descending order, truncated to a presentation cap.

use std::collections::HashSet;

use crate::interface::ResultRow;
use crate::normalize::{self, min_query_length};
use crate::snapshot::IndexedRow;

/// Result-assembly options; see `SearchConfig` for the per-surface values.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Presentation cap on returned rows.
    pub cap: usize,
    /// Collapse rows sharing identical (title, url), first occurrence wins.
    pub dedup: bool,
}

/// Tokenize a raw query: trim, enforce the minimum length, decode, then
/// normalize and split on whitespace. Returns an empty set both for
/// too-short queries and for queries that normalize away entirely (all
/// punctuation); callers treat an empty set as "show the default view",
/// never as "match everything".
pub fn query_tokens(query: &str) -> Vec<String> {
    let raw = query.trim();
    if raw.is_empty() || raw.chars().count() < min_query_length(raw) {
        return Vec::new();
    }
    normalize::normalize(&normalize::safe_decode(raw))
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Filter rows by token containment, preserving input order. Duplicate
/// tokens are harmless: containment is per-token and idempotent.
pub fn match_rows(rows: &[IndexedRow], query: &str, opts: &MatchOptions) -> Vec<ResultRow> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut matched = Vec::new();
    for row in rows {
        if !tokens.iter().all(|t| row.searchable.contains(t.as_str())) {
            continue;
        }
        if opts.dedup && !seen.insert((row.title.as_str(), row.url.as_str())) {
            continue;
        }
        matched.push(to_result_row(row));
        if matched.len() >= opts.cap {
            break;
        }
    }
    matched
}

/// Rows render with the URL standing in for a missing title.
pub(crate) fn to_result_row(row: &IndexedRow) -> ResultRow {
    let title = if row.title.is_empty() {
        row.url.clone()
    } else {
        row.title.clone()
    };
    ResultRow {
        title,
        url: row.url.clone(),
        visit_count: row.visit_count,
        last_visit_time: row.last_visit_time,
    }
}
