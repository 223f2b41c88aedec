//! Debounced search controller.
//!
//! State machine over keystrokes: every keystroke resets a single-slot
//! debounce timer, the timer fires a snapshot fetch + match, and results
//! are applied to the rendering sink in keystroke-sequence order. A search
//! superseded by a newer keystroke is aborted at its next suspension point
//! and, as a backstop, its results are discarded unapplied when the
//! sequence check fails (last writer wins by keystroke order, not
//! completion order).
//!
//! Methods that schedule work (`on_input`) must run inside a tokio runtime;
//! the debounce timer is a spawned task whose handle is replaced (and the
//! previous one aborted) on every keystroke.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::interface::{
    DefaultView, HistorySource, RenderSink, SearchConfig, SearchPhase, ViewUpdate,
};
use crate::matcher::{self, MatchOptions};
use crate::snapshot::{Clock, SnapshotCache, SystemClock};
use crate::normalize::min_query_length;

/// Orchestrates debouncing, cache access, matching, and view-swap
/// signaling for one input field. Rendering happens in the host sink.
pub struct SearchController {
    inner: Arc<Inner>,
}

struct Inner {
    config: SearchConfig,
    cache: SnapshotCache,
    sink: Arc<dyn RenderSink>,
    /// Latest issued search sequence number; results apply only while their
    /// sequence still equals this value.
    seq: AtomicU64,
    phase: Mutex<SearchPhase>,
    /// Single-slot debounce timer: scheduling replaces (and aborts) any
    /// previously scheduled search for this input field.
    slot: Mutex<Option<JoinHandle<()>>>,
}

impl SearchController {
    pub fn new(
        source: Arc<dyn HistorySource>,
        sink: Arc<dyn RenderSink>,
        config: SearchConfig,
    ) -> Self {
        Self::with_clock(source, sink, config, Arc::new(SystemClock))
    }

    /// Constructor with an injectable clock for deterministic staleness.
    pub fn with_clock(
        source: Arc<dyn HistorySource>,
        sink: Arc<dyn RenderSink>,
        config: SearchConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cache = SnapshotCache::new(source, clock, config.fetch_limit, config.snapshot_ttl);
        Self {
            inner: Arc::new(Inner {
                config,
                cache,
                sink,
                seq: AtomicU64::new(0),
                phase: Mutex::new(SearchPhase::Idle),
                slot: Mutex::new(None),
            }),
        }
    }

    /// Current state, for the shell (e.g. a loading indicator).
    pub fn phase(&self) -> SearchPhase {
        *self.inner.phase.lock()
    }

    /// Keystroke entry point. An emptied input clears synchronously; any
    /// other text resets the debounce timer so only the last keystroke in a
    /// burst triggers a search.
    pub fn on_input(&self, text: &str) {
        if text.trim().is_empty() {
            self.clear();
            return;
        }

        let inner = Arc::clone(&self.inner);
        let query = text.to_string();
        let mut slot = self.inner.slot.lock();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *self.inner.phase.lock() = SearchPhase::Debouncing;
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.config.debounce).await;
            inner.run_search(&query).await;
        }));
    }

    /// Clearing the input returns to the default view immediately,
    /// bypassing debounce. Bumping the sequence invalidates any search
    /// still in flight.
    pub fn clear(&self) {
        if let Some(pending) = self.inner.slot.lock().take() {
            pending.abort();
        }
        self.inner.seq.fetch_add(1, Ordering::SeqCst);
        self.inner.apply(ViewUpdate::ShowDefault, SearchPhase::Idle);
    }

    /// The default view: leading rows of the snapshot plus the total count.
    /// Used by shells that render history rows when no search is active.
    pub async fn default_view(&self) -> DefaultView {
        let rows = self.inner.cache.rows().await;
        DefaultView {
            total: rows.len() as u64,
            rows: rows
                .iter()
                .take(self.inner.config.default_view_count)
                .map(matcher::to_result_row)
                .collect(),
        }
    }
}

impl Inner {
    async fn run_search(&self, query: &str) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let trimmed = query.trim();
        if trimmed.chars().count() < min_query_length(trimmed) {
            if self.is_latest(seq) {
                self.apply(ViewUpdate::ShowDefault, SearchPhase::Idle);
            }
            return;
        }

        *self.phase.lock() = SearchPhase::Searching;
        let rows = self.cache.rows().await;
        if !self.is_latest(seq) {
            debug!("dropping superseded search (seq {seq})");
            return;
        }

        let matched = matcher::match_rows(
            &rows,
            query,
            &MatchOptions {
                cap: self.config.result_cap,
                dedup: self.config.dedup_results,
            },
        );
        if !self.is_latest(seq) {
            debug!("dropping superseded search (seq {seq})");
            return;
        }

        if matched.is_empty() {
            self.apply(ViewUpdate::ShowEmpty, SearchPhase::ShowingEmpty);
        } else {
            self.apply(ViewUpdate::ShowResults(matched), SearchPhase::ShowingResults);
        }
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == seq
    }

    fn apply(&self, update: ViewUpdate, phase: SearchPhase) {
        *self.phase.lock() = phase;
        self.sink.apply(update);
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(pending) = self.slot.lock().take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{HistoryEntry, SourceError};
    use parking_lot::Mutex as PlMutex;

    struct StaticSource(Vec<HistoryEntry>);

    #[async_trait::async_trait]
    impl HistorySource for StaticSource {
        async fn fetch(&self, max_results: usize) -> Result<Vec<HistoryEntry>, SourceError> {
            Ok(self.0.iter().take(max_results).cloned().collect())
        }
    }

    #[derive(Default)]
    struct CaptureSink(PlMutex<Vec<ViewUpdate>>);

    impl RenderSink for CaptureSink {
        fn apply(&self, update: ViewUpdate) {
            self.0.lock().push(update);
        }
    }

    fn entry(title: &str, url: &str, last_visit_time: i64) -> HistoryEntry {
        HistoryEntry {
            title: title.to_string(),
            url: url.to_string(),
            visit_count: 1,
            last_visit_time,
        }
    }

    #[test]
    fn test_clear_is_synchronous_and_idles() {
        // no runtime needed: clear never schedules
        let sink = Arc::new(CaptureSink::default());
        let controller = SearchController::new(
            Arc::new(StaticSource(Vec::new())),
            Arc::clone(&sink) as Arc<dyn RenderSink>,
            SearchConfig::popup(),
        );

        controller.clear();
        assert_eq!(controller.phase(), SearchPhase::Idle);
        assert_eq!(*sink.0.lock(), vec![ViewUpdate::ShowDefault]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_bypasses_debounce() {
        let sink = Arc::new(CaptureSink::default());
        let controller = SearchController::new(
            Arc::new(StaticSource(vec![entry("GitHub", "https://github.com", 10)])),
            Arc::clone(&sink) as Arc<dyn RenderSink>,
            SearchConfig::popup(),
        );

        controller.on_input("   ");
        // applied without advancing time
        assert_eq!(controller.phase(), SearchPhase::Idle);
        assert_eq!(*sink.0.lock(), vec![ViewUpdate::ShowDefault]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_view_caps_rows_and_reports_total() {
        let entries: Vec<HistoryEntry> = (0..10)
            .map(|i| entry(&format!("t{i}"), &format!("https://e{i}.example"), i))
            .collect();
        let mut config = SearchConfig::history_page();
        config.default_view_count = 3;
        let controller = SearchController::new(
            Arc::new(StaticSource(entries)),
            Arc::new(CaptureSink::default()),
            config,
        );

        let view = controller.default_view().await;
        assert_eq!(view.total, 10);
        assert_eq!(view.rows.len(), 3);
        // most recent first
        assert_eq!(view.rows[0].last_visit_time, 9);
    }
}
