//! Retrace - incremental full-text filtering over browsing history
//!
//! This library implements the search core shared by the popup and
//! history-page surfaces of a history browser: URL/title decoding, Unicode
//! normalization, multi-token substring matching, and a process-wide
//! snapshot cache that avoids re-normalizing history rows on every
//! keystroke. Storage, rendering, and localization live in the host shell
//! behind the traits in [`interface`].

pub mod favicon;
pub mod interface;
pub mod locale;
pub mod matcher;
pub mod normalize;
mod snapshot;
pub mod urltext;
mod controller;

pub use controller::SearchController;
pub use interface::*;
pub use snapshot::{Clock, IndexedRow, SnapshotCache, SystemClock};
