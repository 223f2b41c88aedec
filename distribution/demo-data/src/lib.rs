//! Shared demo history entries for tests and benchmarks.

pub struct DemoEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub visit_count: u32,
    /// Relative offset in seconds from "now" (negative means in the past)
    pub offset: i64,
}

pub const DEMO_ENTRIES: &[DemoEntry] = &[
    DemoEntry {
        title: "GitHub Pricing",
        url: "https://github.com/pricing?tab=teams",
        visit_count: 4,
        offset: -30,
    },
    DemoEntry {
        title: "retrace: incremental history search - Pull Requests",
        url: "https://github.com/example/retrace/pulls?q=is%3Aopen+label%3Abug",
        visit_count: 12,
        offset: -90,
    },
    DemoEntry {
        title: "tokio::time::sleep - Rust",
        url: "https://docs.rs/tokio/latest/tokio/time/fn.sleep.html",
        visit_count: 7,
        offset: -240,
    },
    DemoEntry {
        title: "std::collections - Rust",
        url: "https://doc.rust-lang.org/std/collections/index.html",
        visit_count: 19,
        offset: -600,
    },
    DemoEntry {
        title: "Riverside Park picnic directions",
        url: "https://maps.example.com/dir?dest=Riverside%2520Park&mode=walk",
        visit_count: 2,
        offset: -3600,
    },
    DemoEntry {
        title: "\u{6700}\u{8FD1}\u{8BBF}\u{95EE}\u{5386}\u{53F2} - \u{77E5}\u{4E4E}",
        url: "https://www.zhihu.com/search?type=content&q=%E5%8E%86%E5%8F%B2",
        visit_count: 3,
        offset: -4200,
    },
    DemoEntry {
        title: "",
        url: "https://untitled.example.net/raw/4f2a",
        visit_count: 1,
        offset: -5000,
    },
    DemoEntry {
        title: "Weather - Berlin, 10 day forecast",
        url: "https://weather.example.org/forecast?city=Berlin&days=10",
        visit_count: 9,
        offset: -7200,
    },
    DemoEntry {
        title: "Hacker News",
        url: "https://news.ycombinator.com/",
        visit_count: 31,
        offset: -9000,
    },
    // duplicate pair: same title and URL at different visit times
    DemoEntry {
        title: "Hacker News",
        url: "https://news.ycombinator.com/",
        visit_count: 31,
        offset: -86_400,
    },
    DemoEntry {
        title: "Crate url - crates.io",
        url: "https://crates.io/crates/url",
        visit_count: 5,
        offset: -10_800,
    },
    DemoEntry {
        title: "Unicode normalization forms",
        url: "https://unicode.org/reports/tr15/",
        visit_count: 2,
        offset: -14_400,
    },
    DemoEntry {
        title: "caf\u{00E9} recipes \u{2014} slow mornings",
        url: "https://blog.example.io/caf%C3%A9-recipes",
        visit_count: 1,
        offset: -18_000,
    },
    DemoEntry {
        title: "Team calendar",
        url: "https://calendar.example.com/team?view=week&tz=Europe%2FBerlin",
        visit_count: 22,
        offset: -21_600,
    },
    DemoEntry {
        title: "Flight status LH1234",
        url: "https://fly.example.com/status?flight=LH1234",
        visit_count: 2,
        offset: -36_000,
    },
    DemoEntry {
        title: "rustlang/rust: Empowering everyone",
        url: "https://github.com/rust-lang/rust",
        visit_count: 14,
        offset: -43_200,
    },
    DemoEntry {
        title: "Local library opening hours",
        url: "https://library.example.gov/hours",
        visit_count: 1,
        offset: -172_800,
    },
    DemoEntry {
        title: "Apartment walkthrough notes",
        url: "https://notes.example.app/d/437-riverside-dr",
        visit_count: 6,
        offset: -259_200,
    },
];
