use crate::common::{client_for, mock_proxy_feed, setup_server};
use homedeck::{Categorizer, DeckError, NewsBuilder, NewsSource};

const FEED: &str = "<rss version=\"2.0\"><channel>\
    <item>\
      <title>OpenAI releases a new model - The Verge</title>\
      <link>https://example.com/openai</link>\
      <pubDate>Thu, 05 Dec 2024 14:00:00 GMT</pubDate>\
    </item>\
    <item>\
      <title>Starship booster caught on fifth flight - Reuters</title>\
      <link>https://example.com/spacex</link>\
      <pubDate>Fri, 06 Dec 2024 09:30:00 GMT</pubDate>\
    </item>\
    <item>\
      <title>Quiet local election wrap-up</title>\
      <link>https://example.com/other</link>\
      <pubDate>Fri, 06 Dec 2024 11:00:00 GMT</pubDate>\
    </item>\
  </channel></rss>";

#[tokio::test]
async fn rss_fetch_normalizes_titles_sources_and_dates() {
    let server = setup_server();
    let mock = mock_proxy_feed(&server, FEED);

    let client = client_for(&server);
    let items = NewsBuilder::new(&client).fetch().await.unwrap();

    mock.assert();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title, "OpenAI releases a new model");
    assert_eq!(items[0].source, "The Verge");
    assert_eq!(items[0].date, "Dec 5");
    // No separator: full title kept, default source label assigned.
    assert_eq!(items[2].title, "Quiet local election wrap-up");
    assert_eq!(items[2].source, "Google News");
    assert_eq!(items[2].category, None);
}

#[tokio::test]
async fn rss_fetch_buckets_in_display_order_and_drops_unmatched() {
    let server = setup_server();
    let _mock = mock_proxy_feed(&server, FEED);

    let client = client_for(&server);
    let buckets = NewsBuilder::new(&client)
        .categorizer(Categorizer::default())
        .fetch_buckets()
        .await
        .unwrap();

    let names: Vec<_> = buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["OpenAI", "SpaceX"]);
    assert_eq!(buckets[0].items[0].title, "OpenAI releases a new model");
    // The uncategorized wrap-up story appears in no bucket.
    assert!(buckets
        .iter()
        .all(|b| b.items.iter().all(|i| i.title != "Quiet local election wrap-up")));
}

#[tokio::test]
async fn rss_proxy_without_contents_is_an_empty_response_error() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/get");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status":{"http_code":200}}"#);
    });

    let client = client_for(&server);
    let err = NewsBuilder::new(&client).fetch().await.unwrap_err();
    assert!(matches!(err, DeckError::EmptyResponse(_)));
}

#[tokio::test]
async fn rss_fetch_passes_the_feed_url_to_the_proxy() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/get")
            .query_param("url", "https://example.com/custom.rss");
        then.status(200)
            .header("content-type", "application/json")
            .body(serde_json::json!({ "contents": FEED }).to_string());
    });

    let base = url::Url::parse(&format!("{}/get", server.base_url())).unwrap();
    let client = homedeck::DeckClient::builder()
        .base_proxy(base)
        .feed_url(url::Url::parse("https://example.com/custom.rss").unwrap())
        .build()
        .unwrap();

    let items = NewsBuilder::new(&client).fetch().await.unwrap();
    mock.assert();
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn search_fetch_queries_by_recency_and_maps_hits() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/search_by_date")
            .query_param("query", "rust")
            .query_param("tags", "story")
            .query_param("hitsPerPage", "10");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"hits": [
                    {"title": "A fast parser", "url": "https://www.blog.example/post",
                     "objectID": "100", "created_at": "2024-12-05T14:00:00Z"},
                    {"title": "Show HN: my tool", "objectID": "101",
                     "created_at": "2024-12-06T08:00:00Z"}
                ]}"#,
            );
    });

    let client = client_for(&server);
    let items = NewsBuilder::new(&client)
        .source(NewsSource::SearchApi {
            query: "rust".into(),
        })
        .count(10)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].source, "blog.example");
    assert_eq!(items[0].link, "https://www.blog.example/post");
    assert_eq!(items[1].link, "https://news.ycombinator.com/item?id=101");
    assert_eq!(items[1].source, "news.ycombinator.com");
}

#[tokio::test]
async fn news_failure_surfaces_the_status() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/get");
        then.status(502).body("bad gateway");
    });

    let client = client_for(&server);
    let err = NewsBuilder::new(&client)
        .retry_policy(Some(homedeck::RetryConfig::disabled()))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::ServerError { status: 502, .. }));
}
