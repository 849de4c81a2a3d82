//! Public client surface + builder.
//! Internals are split into `retry` (policy types) and `constants` (UA + defaults).

mod constants;
mod retry;

use crate::core::DeckError;
use constants::{
    DEFAULT_BASE_ARCHIVE, DEFAULT_BASE_PRICES, DEFAULT_BASE_PROXY, DEFAULT_BASE_SEARCH,
    DEFAULT_FEED_URL, USER_AGENT,
};
use rand::Rng;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

pub use retry::{Backoff, CacheMode, RetryConfig};

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// Shared HTTP client for all widget endpoints.
///
/// Cheap to clone; the underlying `reqwest::Client` and cache are shared.
#[derive(Debug, Clone)]
pub struct DeckClient {
    http: Client,
    base_prices: Url,
    base_proxy: Url,
    feed_url: Url,
    base_search: Url,
    base_archive: Url,

    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl Default for DeckClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl DeckClient {
    /// Create a new builder.
    pub fn builder() -> DeckClientBuilder {
        DeckClientBuilder::default()
    }

    /* -------- internal getters used by the widget modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_prices(&self) -> &Url {
        &self.base_prices
    }
    pub(crate) fn base_proxy(&self) -> &Url {
        &self.base_proxy
    }
    pub(crate) fn feed_url(&self) -> &Url {
        &self.feed_url
    }
    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }
    pub(crate) fn base_archive(&self) -> &Url {
        &self.base_archive
    }

    /// Whether the in-memory response cache is enabled.
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let key = url.as_str().to_string();
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(&key)
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let store = match &self.cache {
            Some(s) => s.clone(),
            None => return,
        };
        let key = url.as_str().to_string();
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let expires_at = Instant::now() + ttl;
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at,
        };
        let mut guard = store.map.write().await;
        guard.insert(key, entry);
    }

    /// Send a request, retrying per the client's [`RetryConfig`] (or a per-call override).
    ///
    /// Only transport-level failures and the configured status codes are retried;
    /// any response outside `retry_on_status` is returned to the caller as-is.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, DeckError> {
        let cfg = retry_override.unwrap_or(&self.retry);

        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt: u32 = 0;
        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| DeckError::Data("request body is not cloneable".into()))?;

            let outcome = this_try.send().await;
            let retriable = match &outcome {
                Ok(resp) => cfg.retry_on_status.contains(&resp.status().as_u16()),
                Err(e) => {
                    (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect)
                }
            };

            if !retriable || attempt >= cfg.max_retries {
                return Ok(outcome?);
            }

            tokio::time::sleep(backoff_delay(&cfg.backoff, attempt)).await;
            attempt += 1;
        }
    }
}

fn backoff_delay(backoff: &Backoff, attempt: u32) -> Duration {
    match backoff {
        Backoff::Fixed(d) => *d,
        Backoff::Exponential {
            base,
            factor,
            max,
            jitter,
        } => {
            let exp = base.as_secs_f64() * factor.powi(attempt.min(16) as i32);
            let mut secs = exp.min(max.as_secs_f64());
            if *jitter {
                secs *= rand::rng().random_range(0.5..=1.5);
            }
            Duration::from_secs_f64(secs.min(max.as_secs_f64()))
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`DeckClient`].
#[derive(Default)]
pub struct DeckClientBuilder {
    user_agent: Option<String>,
    base_prices: Option<Url>,
    base_proxy: Option<Url>,
    feed_url: Option<Url>,
    base_search: Option<Url>,
    base_archive: Option<Url>,

    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl DeckClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the price API base (e.g. `https://api.coingecko.com/api/v3/`).
    pub fn base_prices(mut self, url: Url) -> Self {
        self.base_prices = Some(url);
        self
    }

    /// Override the CORS proxy base used for RSS fetches.
    pub fn base_proxy(mut self, url: Url) -> Self {
        self.base_proxy = Some(url);
        self
    }

    /// Override the RSS feed URL handed to the proxy.
    pub fn feed_url(mut self, url: Url) -> Self {
        self.feed_url = Some(url);
        self
    }

    /// Override the search API base (e.g. `https://hn.algolia.com/api/v1/`).
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Override the archive API base (e.g. `https://api.github.com/`).
    pub fn base_archive(mut self, url: Url) -> Self {
        self.base_archive = Some(url);
        self
    }

    /// Set the default retry policy for all requests.
    #[must_use]
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `DeckError` if a default endpoint constant fails to parse or
    /// the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<DeckClient, DeckError> {
        let base_prices = self.base_prices.unwrap_or(Url::parse(DEFAULT_BASE_PRICES)?);
        let base_proxy = self.base_proxy.unwrap_or(Url::parse(DEFAULT_BASE_PROXY)?);
        let feed_url = self.feed_url.unwrap_or(Url::parse(DEFAULT_FEED_URL)?);
        let base_search = self.base_search.unwrap_or(Url::parse(DEFAULT_BASE_SEARCH)?);
        let base_archive = self
            .base_archive
            .unwrap_or(Url::parse(DEFAULT_BASE_ARCHIVE)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(DeckClient {
            http,
            base_prices,
            base_proxy,
            feed_url,
            base_search,
            base_archive,
            retry: self.retry.unwrap_or_default(),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
