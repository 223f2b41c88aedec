//! History snapshot cache.
//!
//! Holds the last-fetched, pre-normalized history rows. Normalization is an
//! O(rows x text-length) pass, so it runs once per snapshot rather than once
//! per keystroke; staleness is time-based only (changes to the underlying
//! history inside the validity window are accepted).
//!
//! Concurrency: reads go through a `parking_lot` lock, the refresh path is
//! serialized by an async mutex so concurrent callers converge on a single
//! fetch in flight. A read during an in-flight refresh may see either the
//! old or the new snapshot; keystroke-order application in the controller is
//! the correctness backstop.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use parking_lot::RwLock;

use crate::interface::{HistoryEntry, HistorySource};
use crate::normalize;
use crate::urltext;

/// Pre-normalized history row. `searchable` is derived deterministically
/// from the raw entry at build time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRow {
    pub title: String,
    pub url: String,
    pub visit_count: u32,
    pub last_visit_time: i64,
    /// Lowercase, Unicode-canonicalized concatenation of the title (raw and
    /// decoded) and the URL's expanded text. The substring-match target.
    pub searchable: String,
}

impl IndexedRow {
    /// Build a row from a raw entry. Entries without a URL are dropped: the
    /// URL is the row's identity and link target.
    pub(crate) fn from_entry(entry: HistoryEntry) -> Option<Self> {
        if entry.url.is_empty() {
            return None;
        }
        let searchable = normalize::normalize(&format!(
            "{} {} {}",
            entry.title,
            normalize::safe_decode(&entry.title),
            urltext::expand(&entry.url),
        ));
        Some(Self {
            title: entry.title,
            url: entry.url,
            visit_count: entry.visit_count,
            last_visit_time: entry.last_visit_time,
            searchable,
        })
    }
}

/// Clock seam so staleness is deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct Snapshot {
    rows: Arc<Vec<IndexedRow>>,
    built_at: DateTime<Utc>,
}

/// Process-wide cache of indexed history rows with a time-based staleness
/// policy.
pub struct SnapshotCache {
    source: Arc<dyn HistorySource>,
    clock: Arc<dyn Clock>,
    fetch_limit: usize,
    ttl: Option<Duration>,
    state: RwLock<Option<Snapshot>>,
    refresh: tokio::sync::Mutex<()>,
}

impl SnapshotCache {
    pub fn new(
        source: Arc<dyn HistorySource>,
        clock: Arc<dyn Clock>,
        fetch_limit: usize,
        ttl: Option<Duration>,
    ) -> Self {
        Self {
            source,
            clock,
            fetch_limit,
            ttl,
            state: RwLock::new(None),
            refresh: tokio::sync::Mutex::new(()),
        }
    }

    /// The indexed rows, sorted descending by last visit time. Returns the
    /// cached snapshot when it is still inside the validity window,
    /// otherwise fetches and rebuilds. A failed fetch produces an empty
    /// snapshot rather than an error.
    pub async fn rows(&self) -> Arc<Vec<IndexedRow>> {
        if let Some(rows) = self.fresh_rows() {
            return rows;
        }

        let _refresh = self.refresh.lock().await;
        // another caller may have rebuilt while we waited on the lock
        if let Some(rows) = self.fresh_rows() {
            return rows;
        }

        let rows = Arc::new(self.build_rows().await);
        debug!("snapshot rebuilt with {} rows", rows.len());
        *self.state.write() = Some(Snapshot {
            rows: Arc::clone(&rows),
            built_at: self.clock.now(),
        });
        rows
    }

    fn fresh_rows(&self) -> Option<Arc<Vec<IndexedRow>>> {
        let state = self.state.read();
        let snapshot = state.as_ref()?;
        if self.is_fresh(snapshot.built_at) {
            Some(Arc::clone(&snapshot.rows))
        } else {
            None
        }
    }

    fn is_fresh(&self, built_at: DateTime<Utc>) -> bool {
        match self.ttl {
            None => true,
            Some(ttl) => self
                .clock
                .now()
                .signed_duration_since(built_at)
                .to_std()
                .map_or(false, |age| age < ttl),
        }
    }

    async fn build_rows(&self) -> Vec<IndexedRow> {
        let entries = match self.source.fetch(self.fetch_limit).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!("history fetch failed, using empty snapshot: {err}");
                Vec::new()
            }
        };
        let mut rows: Vec<IndexedRow> = entries
            .into_iter()
            .filter_map(IndexedRow::from_entry)
            .collect();
        rows.sort_by(|a, b| b.last_visit_time.cmp(&a.last_visit_time));
        rows
    }
}
