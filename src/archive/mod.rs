mod api;
mod model;
mod wire;

pub use model::ArchiveEntry;

use crate::{
    DeckClient, DeckError,
    core::client::{CacheMode, RetryConfig},
};

const DEFAULT_OWNER: &str = "McoreD";
const DEFAULT_REPO: &str = "mcored.github.io";
const DEFAULT_PATH: &str = "research";
const DEFAULT_EXTENSION: &str = ".html";
const DEFAULT_EXCLUDE: &str = "index.html";

/// A builder for listing archive files under a fixed repository path.
pub struct ArchiveBuilder {
    client: DeckClient,
    owner: String,
    repo: String,
    path: String,
    extension: String,
    exclude: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl ArchiveBuilder {
    /// Creates a new `ArchiveBuilder` for the default research path.
    pub fn new(client: &DeckClient) -> Self {
        Self {
            client: client.clone(),
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            path: DEFAULT_PATH.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: DEFAULT_EXCLUDE.to_string(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Point at a different repository.
    #[must_use]
    pub fn repository(mut self, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.repo = repo.into();
        self
    }

    /// Override the listed path within the repository.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Override the extension filter (default `.html`).
    #[must_use]
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
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

    /// Executes the request and returns the filtered listing, sorted by file
    /// name descending.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::RateLimited` on a 403 response, `DeckError::Status`
    /// for any other non-success status, and `DeckError::Json`/`Http` for
    /// parse and transport failures.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<ArchiveEntry>, DeckError> {
        api::fetch_listing(
            &self.client,
            &self.owner,
            &self.repo,
            &self.path,
            &self.extension,
            &self.exclude,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
