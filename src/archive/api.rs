use crate::{
    archive::{ArchiveEntry, model::display_label, wire},
    core::{
        DeckClient, DeckError,
        client::{CacheMode, RetryConfig},
        net,
    },
};

pub(super) async fn fetch_listing(
    client: &DeckClient,
    owner: &str,
    repo: &str,
    path: &str,
    extension: &str,
    exclude: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<ArchiveEntry>, DeckError> {
    let url = client
        .base_archive()
        .join(&format!("repos/{owner}/{repo}/contents/{path}"))?;

    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(&url).await
    {
        return parse_listing_body(&body, extension, exclude);
    }

    let req = client
        .http()
        .get(url.clone())
        .header("accept", "application/vnd.github+json");
    let resp = client.send_with_retry(req, retry_override).await?;

    let status = resp.status();
    if !status.is_success() {
        // The contents API reports rate limiting as a 403.
        return Err(if status.as_u16() == 403 {
            DeckError::RateLimited {
                url: url.to_string(),
            }
        } else {
            DeckError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
        });
    }

    let body = net::get_text(resp, "archive_contents", path, "json").await?;
    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &body, None).await;
    }
    parse_listing_body(&body, extension, exclude)
}

/// Filter to the tracked extension, drop the index file, and sort by name
/// descending (the numbering scheme puts the newest entries first).
pub(super) fn parse_listing_body(
    body: &str,
    extension: &str,
    exclude: &str,
) -> Result<Vec<ArchiveEntry>, DeckError> {
    let nodes: Vec<wire::ContentsNode> = serde_json::from_str(body)?;

    let mut entries: Vec<ArchiveEntry> = nodes
        .into_iter()
        .filter(|n| n.name.ends_with(extension) && !n.name.eq_ignore_ascii_case(exclude))
        .map(|n| ArchiveEntry {
            display_name: display_label(&n.name, extension),
            name: n.name,
            size: n.size,
        })
        .collect();

    entries.sort_by(|a, b| b.name.cmp(&a.name));
    Ok(entries)
}
