use crate::{
    core::{
        DeckClient, DeckError,
        client::{CacheMode, RetryConfig},
        net,
    },
    prices::{AssetSpec, PriceQuote, wire},
};

pub(super) async fn fetch_prices(
    client: &DeckClient,
    assets: &[AssetSpec],
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<PriceQuote>, DeckError> {
    let ids = assets
        .iter()
        .map(|a| a.id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut url = client.base_prices().join("simple/price")?;
    url.query_pairs_mut()
        .append_pair("ids", &ids)
        .append_pair("vs_currencies", "usd")
        .append_pair("include_24hr_change", "true");

    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(&url).await
    {
        return parse_price_body(&body, assets);
    }

    let req = client
        .http()
        .get(url.clone())
        .header("accept", "application/json");
    let resp = client.send_with_retry(req, retry_override).await?;

    if !resp.status().is_success() {
        return Err(DeckError::from_status(resp.status().as_u16(), &url));
    }

    let body = net::get_text(resp, "simple_price", &ids, "json").await?;
    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &body, None).await;
    }
    parse_price_body(&body, assets)
}

/// Map the response onto the tracked set in its canonical order.
/// An asset absent from the response (or missing its quote fields) is skipped.
fn parse_price_body(body: &str, assets: &[AssetSpec]) -> Result<Vec<PriceQuote>, DeckError> {
    let map: wire::SimplePriceMap = serde_json::from_str(body)?;

    Ok(assets
        .iter()
        .filter_map(|asset| {
            let node = map.get(&asset.id)?;
            Some(PriceQuote {
                symbol: asset.symbol.clone(),
                usd: node.usd?,
                usd_24h_change: node.usd_24h_change?,
            })
        })
        .collect())
}
