//! UI label lookup.
//!
//! String-keyed labels for the small set of UI strings the surfaces show.
//! Lookup only; formatting and substitution are the shell's concern.

/// Keys for every label either surface renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    RecentHistory,
    AllHistory,
    Options,
    CurrentDate,
    TotalHistoryItems,
    DeleteItems,
    NoResults,
    Loading,
    Visits,
}

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Label text for a key in the given locale.
pub fn label(locale: Locale, key: LabelKey) -> &'static str {
    match locale {
        Locale::En => match key {
            LabelKey::RecentHistory => "Recent History",
            LabelKey::AllHistory => "All History",
            LabelKey::Options => "Options",
            LabelKey::CurrentDate => "Current Date",
            LabelKey::TotalHistoryItems => "Total history items:",
            LabelKey::DeleteItems => "Delete items",
            LabelKey::NoResults => "No results found",
            LabelKey::Loading => "Loading...",
            LabelKey::Visits => "Visits",
        },
        Locale::Zh => match key {
            LabelKey::RecentHistory => "\u{6700}\u{8FD1}\u{8BBF}\u{95EE}\u{5386}\u{53F2}",
            LabelKey::AllHistory => "\u{6240}\u{6709}\u{5386}\u{53F2}",
            LabelKey::Options => "\u{8BBE}\u{7F6E}",
            LabelKey::CurrentDate => "\u{5F53}\u{524D}\u{65E5}\u{671F}",
            LabelKey::TotalHistoryItems => "\u{603B}\u{8BA1}\u{5386}\u{53F2}\u{6761}\u{6570}\u{FF1A}",
            LabelKey::DeleteItems => "\u{5220}\u{9664}\u{9879}\u{76EE}",
            LabelKey::NoResults => "\u{672A}\u{627E}\u{5230}\u{7ED3}\u{679C}",
            LabelKey::Loading => "\u{6B63}\u{5728}\u{8F7D}\u{5165}...",
            LabelKey::Visits => "\u{8BBF}\u{95EE}",
        },
    }
}
