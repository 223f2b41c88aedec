//! Retrace boundary types
//!
//! This file defines the seams between the search core and the host shell:
//! the history store that supplies raw entries, the rendering sink that
//! consumes view updates, and the per-surface configuration. It acts as the
//! source of truth for shared types.

use std::time::Duration;

use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Raw history entry as supplied by the host history store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub title: String,
    pub url: String,
    pub visit_count: u32,
    /// Last visit time in epoch milliseconds.
    pub last_visit_time: i64,
}

/// A matched row ready for display. `title` falls back to the URL when the
/// entry carried no title, so the renderer never shows an empty label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultRow {
    pub title: String,
    pub url: String,
    pub visit_count: u32,
    pub last_visit_time: i64,
}

/// The default (all items) view: the leading rows plus the total row count
/// behind them, for the "total items" counter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultView {
    pub rows: Vec<ResultRow>,
    pub total: u64,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// View-swap instruction emitted to the rendering sink. The core decides
/// which container is active and what it holds; the shell owns the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Show the default container; the search container is cleared.
    ShowDefault,
    /// Show the search container with the given rows, most recent first.
    ShowResults(Vec<ResultRow>),
    /// Show the search container with the no-results marker.
    ShowEmpty,
}

/// Controller state over keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Showing the default view, no search pending.
    Idle,
    /// A debounce timer is pending; the last keystroke in a burst wins.
    Debouncing,
    /// Snapshot fetch / matching in flight.
    Searching,
    ShowingResults,
    ShowingEmpty,
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Per-surface tuning for the shared cache/matcher contract.
///
/// The two shipped surfaces differ only in these values: the popup keeps a
/// short-lived snapshot and dedups repeat rows, the history page keeps its
/// snapshot for the process lifetime and shows every row.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Ceiling on entries requested from the history store.
    pub fetch_limit: usize,
    /// Presentation cap on matched rows, not a relevance cutoff.
    pub result_cap: usize,
    /// Snapshot validity window; `None` means the snapshot is reused for the
    /// process lifetime.
    pub snapshot_ttl: Option<Duration>,
    /// Collapse rows sharing identical (title, url), first occurrence wins.
    pub dedup_results: bool,
    /// Keystroke debounce; only the last keystroke in a burst searches.
    pub debounce: Duration,
    /// Rows rendered in the default view.
    pub default_view_count: usize,
}

impl SearchConfig {
    /// Popup surface: small snapshot, 30s staleness window, deduped results.
    pub fn popup() -> Self {
        Self {
            fetch_limit: 3000,
            result_cap: 120,
            snapshot_ttl: Some(Duration::from_secs(30)),
            dedup_results: true,
            debounce: Duration::from_millis(120),
            default_view_count: 120,
        }
    }

    /// History page: larger snapshot reused for the process lifetime.
    pub fn history_page() -> Self {
        Self {
            fetch_limit: 5000,
            result_cap: 300,
            snapshot_ttl: None,
            dedup_results: false,
            debounce: Duration::from_millis(120),
            default_view_count: 300,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HOST SEAMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Error type for history-source implementations. Absorbed by the snapshot
/// cache (a failed fetch degrades to an empty snapshot); never reaches the
/// rendering sink.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

/// The host history store. Implementations answer "the N most recent entries
/// across the full history range" (empty text filter, start time zero).
#[async_trait::async_trait]
pub trait HistorySource: Send + Sync {
    async fn fetch(&self, max_results: usize) -> Result<Vec<HistoryEntry>, SourceError>;
}

/// Rendering sink fed by the controller. Receives data and a view decision;
/// never a partial or out-of-order update (superseded searches are dropped
/// before they reach here).
pub trait RenderSink: Send + Sync {
    fn apply(&self, update: ViewUpdate);
}
