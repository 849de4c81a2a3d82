use serde::Serialize;

/// One tracked asset: the quote-API identifier plus the display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetSpec {
    /// Identifier understood by the price API (e.g. `"avalanche-2"`).
    pub id: String,
    /// Short display symbol for the ticker strip (e.g. `"AVAX"`).
    pub symbol: String,
}

impl AssetSpec {
    /// Convenience constructor.
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }
}

/// A snapshot price for one asset, re-fetched every cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Display symbol, in the tracked set's canonical order.
    pub symbol: String,
    /// Current price in USD.
    pub usd: f64,
    /// Percentage change over the trailing 24 hours.
    pub usd_24h_change: f64,
}
