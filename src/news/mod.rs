mod api;
mod categorize;
mod model;
pub(crate) mod rss;
mod wire;

pub use categorize::{BUCKET_CAP, CategoryRule, Categorizer};
pub use model::{CategoryBucket, NewsItem};

use crate::{
    DeckClient, DeckError,
    core::client::{CacheMode, RetryConfig},
};

/// Which external feed contract the news poller speaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NewsSource {
    /// RSS XML fetched through a CORS-relaxing proxy.
    #[default]
    RssProxy,
    /// A JSON search API queried by recency.
    SearchApi {
        /// Free-text query sent to the search endpoint.
        query: String,
    },
}

/// A builder for fetching and (optionally) categorizing feed items.
pub struct NewsBuilder {
    client: DeckClient,
    source: NewsSource,
    categorizer: Option<Categorizer>,
    count: u32,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` using the default RSS-via-proxy source.
    pub fn new(client: &DeckClient) -> Self {
        Self {
            client: client.clone(),
            source: NewsSource::default(),
            categorizer: None,
            count: 30,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Selects the source strategy.
    #[must_use]
    pub fn source(mut self, source: NewsSource) -> Self {
        self.source = source;
        self
    }

    /// Enables categorization with the given rule set.
    #[must_use]
    pub fn categorizer(mut self, categorizer: Categorizer) -> Self {
        self.categorizer = Some(categorizer);
        self
    }

    /// Sets the maximum number of hits requested from the search API.
    /// Ignored by the RSS source, which returns whatever the feed carries.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and returns the normalized feed items, with
    /// categories assigned when a categorizer was configured.
    ///
    /// # Errors
    ///
    /// Returns a `DeckError` if the request fails, the proxy envelope is
    /// empty, or the response body cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<NewsItem>, DeckError> {
        match &self.source {
            NewsSource::RssProxy => {
                api::fetch_rss(
                    &self.client,
                    self.categorizer.as_ref(),
                    self.cache_mode,
                    self.retry_override.as_ref(),
                )
                .await
            }
            NewsSource::SearchApi { query } => {
                api::fetch_search(
                    &self.client,
                    query,
                    self.count,
                    self.categorizer.as_ref(),
                    self.cache_mode,
                    self.retry_override.as_ref(),
                )
                .await
            }
        }
    }

    /// Fetches and groups items into capped category buckets, in the
    /// categorizer's display order. Requires a categorizer.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Data` if no categorizer was configured, otherwise
    /// any error from [`fetch`](Self::fetch).
    pub async fn fetch_buckets(self) -> Result<Vec<CategoryBucket>, DeckError> {
        let Some(categorizer) = self.categorizer.clone() else {
            return Err(DeckError::Data(
                "news: fetch_buckets requires a categorizer".into(),
            ));
        };
        let items = self.fetch().await?;
        Ok(categorizer.bucketize(&items))
    }
}
