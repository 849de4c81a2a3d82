use std::sync::Arc;
use std::time::Duration;

use crate::common::{mock_archive_listing, mock_proxy_feed, mock_simple_price, setup_server};
use homedeck::{Categorizer, DeckContext, MemoryTarget, NewsSource, RetryConfig};

fn context_for(server: &httpmock::MockServer) -> (DeckContext, Arc<MemoryTarget>, Arc<MemoryTarget>, Arc<MemoryTarget>) {
    let base = url::Url::parse(&format!("{}/", server.base_url())).unwrap();
    let client = homedeck::DeckClient::builder()
        .base_prices(base.clone())
        .base_proxy(url::Url::parse(&format!("{}/get", server.base_url())).unwrap())
        .base_search(base.clone())
        .base_archive(base)
        .retry_policy(RetryConfig::disabled())
        .build()
        .unwrap();

    let ticker = MemoryTarget::new();
    let news = MemoryTarget::new();
    let archive = MemoryTarget::new();
    let ctx = DeckContext::new(
        client,
        Arc::clone(&ticker) as Arc<dyn homedeck::RenderTarget>,
        Arc::clone(&news) as Arc<dyn homedeck::RenderTarget>,
        Arc::clone(&archive) as Arc<dyn homedeck::RenderTarget>,
    );
    (ctx, ticker, news, archive)
}

async fn wait_for_render(target: &MemoryTarget) -> String {
    for _ in 0..200 {
        let html = target.html();
        if !html.is_empty() {
            return html;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("target was never rendered");
}

#[tokio::test]
async fn a_failing_poller_renders_its_error_and_leaves_others_alone() {
    let server = setup_server();
    let _prices = mock_simple_price(
        &server,
        r#"{ "bitcoin": { "usd": 97000.0, "usd_24h_change": 1.5 } }"#,
    );
    // The proxy is down; only the news poller should notice.
    let _news = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/get");
        then.status(503).body("unavailable");
    });

    let (ctx, ticker, news, archive) = context_for(&server);
    let prices_handle = ctx.spawn_prices(homedeck::prices::default_assets(), Duration::from_secs(60));
    let news_handle = ctx.spawn_news(
        NewsSource::RssProxy,
        Categorizer::default(),
        Duration::from_secs(300),
    );

    let ticker_html = wait_for_render(&ticker).await;
    let news_html = wait_for_render(&news).await;

    assert!(ticker_html.contains("BTC"));
    assert!(ticker_html.contains("$97,000.00"));
    assert!(news_html.starts_with(r#"<div class="error">Comms Link Severed: "#));
    // The archive poller was never started; its target stays untouched.
    assert_eq!(archive.html(), "");

    prices_handle.cancel();
    news_handle.cancel();
    prices_handle.join().await;
    news_handle.join().await;
}

#[tokio::test]
async fn price_failure_renders_the_fixed_offline_placeholder() {
    let server = setup_server();
    let _prices = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/simple/price");
        then.status(500).body("oops");
    });

    let (ctx, ticker, _news, _archive) = context_for(&server);
    let handle = ctx.spawn_prices(homedeck::prices::default_assets(), Duration::from_secs(60));

    let html = wait_for_render(&ticker).await;
    assert_eq!(
        html,
        r#"<div class="error">System Offline: Crypto Data Unavailable</div>"#
    );

    handle.cancel();
    handle.join().await;
}

#[tokio::test]
async fn empty_feed_renders_the_empty_placeholder() {
    let server = setup_server();
    let _news = mock_proxy_feed(&server, "<rss><channel></channel></rss>");

    let (ctx, _ticker, news, _archive) = context_for(&server);
    let handle = ctx.spawn_news(
        NewsSource::RssProxy,
        Categorizer::default(),
        Duration::from_secs(300),
    );

    let html = wait_for_render(&news).await;
    assert_eq!(html, r#"<div class="info">No recent updates found.</div>"#);

    handle.cancel();
    handle.join().await;
}

#[tokio::test]
async fn one_shot_archive_runs_a_single_cycle_and_finishes() {
    let server = setup_server();
    let mock = mock_archive_listing(
        &server,
        "research",
        r#"[{"name": "log_01.html", "size": 1024}]"#,
    );

    let (ctx, _ticker, _news, archive) = context_for(&server);
    let handle = ctx.spawn_archive(None);
    handle.join().await;

    mock.assert();
    let html = archive.html();
    assert!(html.contains(">Log 01</a>"));
    assert!(html.contains("SIZE: 1.00 KB"));
}

#[tokio::test]
async fn cancelled_poller_stops_ticking() {
    let server = setup_server();
    let prices = mock_simple_price(
        &server,
        r#"{ "bitcoin": { "usd": 1.0, "usd_24h_change": 0.0 } }"#,
    );

    let (ctx, ticker, _news, _archive) = context_for(&server);
    let handle = ctx.spawn_prices(homedeck::prices::default_assets(), Duration::from_millis(20));

    wait_for_render(&ticker).await;
    handle.cancel();
    assert!(handle.is_cancelled());
    handle.join().await;

    let hits_after_cancel = prices.hits();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(prices.hits(), hits_after_cancel);
}
