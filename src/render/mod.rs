//! Markup rendering: pure functions from display records to HTML strings.
//!
//! Every interpolated value goes through [`escape_html`]. The output replaces
//! a render target's content wholesale each cycle; nothing here touches the
//! network or the scheduler.

use crate::archive::ArchiveEntry;
use crate::core::DeckError;
use crate::core::format::{format_currency, format_kib, format_percentage};
use crate::news::CategoryBucket;
use crate::prices::PriceQuote;

/// Fixed offline placeholder for the price ticker.
pub const PRICES_OFFLINE: &str =
    r#"<div class="error">System Offline: Crypto Data Unavailable</div>"#;

/// Placeholder when the feed returned items but none matched a category.
pub const NEWS_NO_CATEGORY: &str =
    r#"<div class="info">No specific category updates found.</div>"#;

/// Placeholder when the feed returned no items at all.
pub const NEWS_EMPTY_FEED: &str = r#"<div class="info">No recent updates found.</div>"#;

/// Placeholder when the archive listing is empty after filtering.
pub const ARCHIVE_EMPTY: &str = r#"<div class="info">No archives found in current sector.</div>"#;

/// Escape text for interpolation into markup.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the ticker strip, one `ticker-item` per quote in the given order.
#[must_use]
pub fn render_ticker(quotes: &[PriceQuote]) -> String {
    let mut html = String::new();
    for quote in quotes {
        let change_class = if quote.usd_24h_change >= 0.0 {
            "positive"
        } else {
            "negative"
        };
        html.push_str(&format!(
            r#"<div class="ticker-item"><span class="coin-name">{}</span><span class="coin-price">{}</span><span class="coin-change {change_class}">{}</span></div>"#,
            escape_html(&quote.symbol),
            format_currency(quote.usd),
            format_percentage(quote.usd_24h_change),
        ));
    }
    html
}

/// Render the category sections in bucket order, or the no-category
/// placeholder when every bucket was empty.
#[must_use]
pub fn render_news(buckets: &[CategoryBucket]) -> String {
    if buckets.is_empty() {
        return NEWS_NO_CATEGORY.to_string();
    }

    let mut html = String::new();
    for bucket in buckets {
        html.push_str(&format!(
            r#"<div class="news-category"><h3 class="category-title">{}</h3><div class="category-list">"#,
            escape_html(&bucket.name)
        ));
        for story in &bucket.items {
            html.push_str(&format!(
                r#"<div class="news-minimize-item"><a href="{}" target="_blank" class="news-link">{}</a><span class="news-meta-mini">{} &bull; {}</span></div>"#,
                escape_html(&story.link),
                escape_html(&story.title),
                escape_html(&story.source),
                escape_html(&story.date),
            ));
        }
        html.push_str("</div></div>");
    }
    html
}

/// Render the archive file list, or the empty placeholder.
#[must_use]
pub fn render_archive(entries: &[ArchiveEntry]) -> String {
    if entries.is_empty() {
        return ARCHIVE_EMPTY.to_string();
    }

    let mut html = String::new();
    for entry in entries {
        html.push_str(&format!(
            r#"<div class="file-item"><div class="file-icon">&#128196;</div><div class="file-info"><a href="{}" class="file-link">{}</a><span class="file-meta">SIZE: {}</span></div></div>"#,
            escape_html(&entry.name),
            escape_html(&entry.display_name),
            format_kib(entry.size),
        ));
    }
    html
}

/// Error placeholder for the news feed, embedding the error description.
#[must_use]
pub fn render_news_error(err: &DeckError) -> String {
    format!(
        r#"<div class="error">Comms Link Severed: {}</div>"#,
        escape_html(&err.to_string())
    )
}

/// Error placeholder for the archive lister, embedding the error description.
#[must_use]
pub fn render_archive_error(err: &DeckError) -> String {
    format!(
        r#"<div class="error">ARCHIVE ACCESS ERROR: {}</div>"#,
        escape_html(&err.to_string())
    )
}
