//! Link icon classification
//!
//! Pure substring matching over a link's URL and title, both lower-cased.
//! Rules are ordered and the first match wins; the order matters because
//! the substrings overlap (a YouTube URL titled "tiktok fan page" is still
//! YouTube).

use linkdeck_core::Link;

/// Icon shown next to a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCategory {
    YouTube,
    TikTok,
    Instagram,
    Telegram,
    X,
    Generic,
}

/// Classify a link into an icon category
pub fn classify(link: &Link) -> IconCategory {
    let url = link.url.to_lowercase();
    let title = link.title.to_lowercase();

    if url.contains("youtube.com") || url.contains("youtu.be") || title.contains("youtube") {
        IconCategory::YouTube
    } else if url.contains("tiktok.com") || title.contains("tiktok") {
        IconCategory::TikTok
    } else if url.contains("instagram.com") || title.contains("instagram") {
        IconCategory::Instagram
    } else if url.contains("t.me") || url.contains("telegram.org") || title.contains("telegram") {
        IconCategory::Telegram
    } else if url.contains("x.com")
        || url.contains("twitter.com")
        || title.contains("x")
        || title.contains("twitter")
    {
        IconCategory::X
    } else {
        IconCategory::Generic
    }
}
