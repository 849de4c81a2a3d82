//! Scheduling: one cancellable interval task per widget.
//!
//! [`DeckContext`] holds the client and the three render targets explicitly;
//! each `spawn_*` runs a fetch-parse-render cycle immediately and then on its
//! interval, replacing the target's content wholesale. A failed cycle renders
//! the widget's error placeholder and waits for the next tick. Pollers never
//! touch each other's targets.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::archive::ArchiveBuilder;
use crate::core::DeckClient;
use crate::news::{Categorizer, NewsBuilder, NewsSource};
use crate::prices::{AssetSpec, PricesBuilder};
use crate::render;

/// Default refresh interval for the price ticker.
pub const PRICES_EVERY: Duration = Duration::from_secs(60);
/// Default refresh interval for the news feed.
pub const NEWS_EVERY: Duration = Duration::from_secs(300);

/// A container whose content is replaced wholesale each render cycle.
///
/// This is the seam to whatever displays the markup (a DOM container, a
/// terminal pane, a test buffer).
pub trait RenderTarget: Send + Sync + 'static {
    /// Replace the target's content with the given markup.
    fn replace(&self, html: String);
}

/// An in-memory [`RenderTarget`] for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    html: Mutex<String>,
}

impl MemoryTarget {
    /// Create an empty target.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// The most recently rendered markup.
    #[must_use]
    pub fn html(&self) -> String {
        self.html.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl RenderTarget for MemoryTarget {
    fn replace(&self, html: String) {
        if let Ok(mut guard) = self.html.lock() {
            *guard = html;
        }
    }
}

/// Handle to one scheduled poller task.
pub struct PollHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stop the loop at its next select point. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the task has been asked to stop.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for the task to finish (after [`cancel`](Self::cancel), or after
    /// a one-shot poller's single cycle).
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Explicit application context: the client plus the three render targets.
#[derive(Clone)]
pub struct DeckContext {
    client: DeckClient,
    ticker: Arc<dyn RenderTarget>,
    news: Arc<dyn RenderTarget>,
    archive: Arc<dyn RenderTarget>,
}

impl DeckContext {
    /// Build a context from a client and the three targets.
    pub fn new(
        client: DeckClient,
        ticker: Arc<dyn RenderTarget>,
        news: Arc<dyn RenderTarget>,
        archive: Arc<dyn RenderTarget>,
    ) -> Self {
        Self {
            client,
            ticker,
            news,
            archive,
        }
    }

    /// Schedule the price ticker: one cycle now, then every `every`.
    #[must_use]
    pub fn spawn_prices(&self, assets: Vec<AssetSpec>, every: Duration) -> PollHandle {
        let client = self.client.clone();
        let target = Arc::clone(&self.ticker);
        spawn_loop(every, move || {
            let client = client.clone();
            let assets = assets.clone();
            let target = Arc::clone(&target);
            async move {
                match PricesBuilder::new(&client).assets(assets).fetch().await {
                    Ok(quotes) => target.replace(render::render_ticker(&quotes)),
                    Err(_e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(error = %_e, "price cycle failed");
                        target.replace(render::PRICES_OFFLINE.to_string());
                    }
                }
            }
        })
    }

    /// Schedule the news feed: one cycle now, then every `every`.
    #[must_use]
    pub fn spawn_news(
        &self,
        source: NewsSource,
        categorizer: Categorizer,
        every: Duration,
    ) -> PollHandle {
        let client = self.client.clone();
        let target = Arc::clone(&self.news);
        spawn_loop(every, move || {
            let client = client.clone();
            let source = source.clone();
            let categorizer = categorizer.clone();
            let target = Arc::clone(&target);
            async move {
                let result = NewsBuilder::new(&client)
                    .source(source)
                    .categorizer(categorizer.clone())
                    .fetch()
                    .await;
                match result {
                    Ok(items) if items.is_empty() => {
                        target.replace(render::NEWS_EMPTY_FEED.to_string());
                    }
                    Ok(items) => {
                        let buckets = categorizer.bucketize(&items);
                        target.replace(render::render_news(&buckets));
                    }
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(error = %e, "news cycle failed");
                        target.replace(render::render_news_error(&e));
                    }
                }
            }
        })
    }

    /// Schedule the archive lister. `every = None` runs a single cycle and
    /// finishes; `Some` re-runs on the interval like the other pollers.
    #[must_use]
    pub fn spawn_archive(&self, every: Option<Duration>) -> PollHandle {
        let client = self.client.clone();
        let target = Arc::clone(&self.archive);
        let cycle = move || {
            let client = client.clone();
            let target = Arc::clone(&target);
            async move {
                match ArchiveBuilder::new(&client).fetch().await {
                    Ok(entries) => target.replace(render::render_archive(&entries)),
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(error = %e, "archive cycle failed");
                        target.replace(render::render_archive_error(&e));
                    }
                }
            }
        };

        match every {
            Some(every) => spawn_loop(every, cycle),
            None => {
                let token = CancellationToken::new();
                let task = tokio::spawn(cycle());
                PollHandle { token, task }
            }
        }
    }
}

/// Run `cycle` immediately, then on every interval tick until cancelled.
fn spawn_loop<F, Fut>(every: Duration, mut cycle: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let token = CancellationToken::new();
    let child = token.clone();
    let task = tokio::spawn(async move {
        let mut tick = tokio::time::interval(every);
        loop {
            tokio::select! {
                () = child.cancelled() => break,
                _ = tick.tick() => cycle().await,
            }
        }
    });
    PollHandle { token, task }
}
