mod api;
mod model;
mod wire;

pub use model::{AssetSpec, PriceQuote};

use crate::{
    DeckClient, DeckError,
    core::client::{CacheMode, RetryConfig},
};

/// The default tracked set, in canonical ticker order.
#[must_use]
pub fn default_assets() -> Vec<AssetSpec> {
    vec![
        AssetSpec::new("bitcoin", "BTC"),
        AssetSpec::new("solana", "SOL"),
        AssetSpec::new("avalanche-2", "AVAX"),
        AssetSpec::new("sui", "SUI"),
    ]
}

/// A builder for fetching current prices for a fixed, ordered set of assets.
pub struct PricesBuilder {
    client: DeckClient,
    assets: Vec<AssetSpec>,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl PricesBuilder {
    /// Creates a new `PricesBuilder` tracking the default asset set.
    pub fn new(client: &DeckClient) -> Self {
        Self {
            client: client.clone(),
            assets: default_assets(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Replace the tracked asset set. Order here is the render order.
    #[must_use]
    pub fn assets(mut self, assets: Vec<AssetSpec>) -> Self {
        self.assets = assets;
        self
    }

    /// Add a single asset to the end of the tracked set.
    #[must_use]
    pub fn add_asset(mut self, asset: AssetSpec) -> Self {
        self.assets.push(asset);
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

    /// Executes the request and fetches one quote per tracked asset present
    /// in the response, in the tracked set's order.
    ///
    /// # Errors
    ///
    /// Returns a `DeckError` if the request fails, the API returns a
    /// non-success status, or the response body cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<PriceQuote>, DeckError> {
        if self.assets.is_empty() {
            return Err(DeckError::Data("prices: at least one asset required".into()));
        }
        api::fetch_prices(
            &self.client,
            &self.assets,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
