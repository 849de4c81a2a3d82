//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// CoinGecko v3 API base (endpoint paths are appended).
pub(crate) const DEFAULT_BASE_PRICES: &str = "https://api.coingecko.com/api/v3/";

/// CORS-relaxing proxy base; the target feed URL goes in the `url` query pair.
pub(crate) const DEFAULT_BASE_PROXY: &str = "https://api.allorigins.win/get";

/// Default RSS feed fetched through the proxy (Google News search).
pub(crate) const DEFAULT_FEED_URL: &str = "https://news.google.com/rss/search?q=xAI+OR+Grok+OR+Claude+AI+OR+Gemini+AI+OR+OpenAI+OR+SpaceX+OR+Tesla+when:7d&hl=en-US&gl=US&ceid=US:en";

/// HN Algolia search API base (endpoint paths are appended).
pub(crate) const DEFAULT_BASE_SEARCH: &str = "https://hn.algolia.com/api/v1/";

/// GitHub REST API base (repository content paths are appended).
pub(crate) const DEFAULT_BASE_ARCHIVE: &str = "https://api.github.com/";
