use serde::Deserialize;
use std::collections::HashMap;

/// Response shape of the simple-price endpoint: a map from asset id to quote node.
pub(crate) type SimplePriceMap = HashMap<String, SimplePriceNode>;

#[derive(Deserialize)]
pub(crate) struct SimplePriceNode {
    #[serde(default)]
    pub(crate) usd: Option<f64>,
    #[serde(default)]
    pub(crate) usd_24h_change: Option<f64>,
}
