//! homedeck: typed async pollers for a personal dashboard.
//!
//! Three independent widgets, each a fetch-parse-render cycle:
//! - [`prices`]: crypto price ticker (CoinGecko simple-price shape).
//! - [`news`]: categorized tech-news feed (RSS-via-proxy or a JSON search API).
//! - [`archive`]: research-archive file listing (GitHub contents API).
//!
//! The [`poll`] module schedules each widget on its own interval and renders
//! into a [`poll::RenderTarget`]; the [`render`] module produces the markup.

pub mod core;

pub mod archive;
pub mod news;
pub mod poll;
pub mod prices;
pub mod render;

pub use crate::core::client::{Backoff, CacheMode, RetryConfig};
pub use crate::core::{DeckClient, DeckClientBuilder, DeckError};

pub use crate::archive::{ArchiveBuilder, ArchiveEntry};
pub use crate::news::{CategoryBucket, Categorizer, NewsBuilder, NewsItem, NewsSource};
pub use crate::poll::{DeckContext, MemoryTarget, PollHandle, RenderTarget};
pub use crate::prices::{AssetSpec, PriceQuote, PricesBuilder};
