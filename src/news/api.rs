use url::Url;

use crate::{
    core::{
        DeckClient, DeckError,
        client::{CacheMode, RetryConfig},
        net,
    },
    news::{
        Categorizer, NewsItem,
        rss::{extract_items, split_source},
        wire,
    },
};

/// Default source label for RSS items whose title carries no publisher suffix.
const RSS_DEFAULT_SOURCE: &str = "Google News";

/// Display domain used when a search hit has no external URL.
const SEARCH_FALLBACK_DOMAIN: &str = "news.ycombinator.com";

pub(super) async fn fetch_rss(
    client: &DeckClient,
    categorizer: Option<&Categorizer>,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<NewsItem>, DeckError> {
    let mut url = client.base_proxy().clone();
    url.query_pairs_mut()
        .append_pair("url", client.feed_url().as_str());

    let body = if cache_mode == CacheMode::Use
        && let Some(cached) = client.cache_get(&url).await
    {
        cached
    } else {
        let req = client.http().get(url.clone());
        let resp = client.send_with_retry(req, retry_override).await?;
        if !resp.status().is_success() {
            return Err(DeckError::from_status(resp.status().as_u16(), &url));
        }
        let body = net::get_text(resp, "news_rss", "feed", "json").await?;
        if cache_mode != CacheMode::Bypass {
            client.cache_put(&url, &body, None).await;
        }
        body
    };

    parse_rss_body(&body, categorizer)
}

pub(super) fn parse_rss_body(
    body: &str,
    categorizer: Option<&Categorizer>,
) -> Result<Vec<NewsItem>, DeckError> {
    let envelope: wire::ProxyEnvelope = serde_json::from_str(body)?;
    let contents = envelope
        .contents
        .filter(|c| !c.is_empty())
        .ok_or_else(|| DeckError::EmptyResponse("proxy returned no contents".into()))?;

    let items = extract_items(&contents)
        .into_iter()
        .map(|raw| {
            // Categories match on the full headline, publisher suffix included.
            let category = categorizer
                .and_then(|c| c.assign(&raw.title))
                .map(str::to_string);
            let (title, source) = split_source(&raw.title, RSS_DEFAULT_SOURCE);
            let date = raw
                .pub_date
                .as_deref()
                .and_then(short_date_rfc2822)
                .unwrap_or_default();

            NewsItem {
                title,
                link: raw.link,
                date,
                source,
                category,
            }
        })
        .collect();

    Ok(items)
}

pub(super) async fn fetch_search(
    client: &DeckClient,
    query: &str,
    count: u32,
    categorizer: Option<&Categorizer>,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<NewsItem>, DeckError> {
    let mut url = client.base_search().join("search_by_date")?;
    url.query_pairs_mut()
        .append_pair("query", query)
        .append_pair("tags", "story")
        .append_pair("hitsPerPage", &count.to_string());

    let body = if cache_mode == CacheMode::Use
        && let Some(cached) = client.cache_get(&url).await
    {
        cached
    } else {
        let req = client
            .http()
            .get(url.clone())
            .header("accept", "application/json");
        let resp = client.send_with_retry(req, retry_override).await?;
        if !resp.status().is_success() {
            return Err(DeckError::from_status(resp.status().as_u16(), &url));
        }
        let body = net::get_text(resp, "news_search", query, "json").await?;
        if cache_mode != CacheMode::Bypass {
            client.cache_put(&url, &body, None).await;
        }
        body
    };

    parse_search_body(&body, categorizer)
}

pub(super) fn parse_search_body(
    body: &str,
    categorizer: Option<&Categorizer>,
) -> Result<Vec<NewsItem>, DeckError> {
    let envelope: wire::SearchEnvelope = serde_json::from_str(body)?;
    let hits = envelope.hits.unwrap_or_default();

    let items = hits
        .into_iter()
        .filter_map(|hit| {
            let title = hit.title?;
            let link = hit.url.clone().unwrap_or_else(|| {
                format!("https://news.ycombinator.com/item?id={}", hit.object_id)
            });
            let source = hit
                .url
                .as_deref()
                .and_then(display_domain)
                .unwrap_or_else(|| SEARCH_FALLBACK_DOMAIN.to_string());
            let date = hit
                .created_at
                .as_deref()
                .and_then(short_date_rfc3339)
                .unwrap_or_default();
            let category = categorizer
                .and_then(|c| c.assign(&title))
                .map(str::to_string);

            Some(NewsItem {
                title,
                link,
                date,
                source,
                category,
            })
        })
        .collect();

    Ok(items)
}

/// Host of an external URL with any leading `www.` stripped.
fn display_domain(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

fn short_date_rfc2822(s: &str) -> Option<String> {
    let dt = chrono::DateTime::parse_from_rfc2822(s).ok()?;
    Some(dt.format("%b %-d").to_string())
}

fn short_date_rfc3339(s: &str) -> Option<String> {
    let dt = chrono::DateTime::parse_from_rfc3339(s).ok()?;
    Some(dt.format("%b %-d").to_string())
}
