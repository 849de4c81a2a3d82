use crate::common::{client_for, mock_archive_listing, setup_server};
use homedeck::{ArchiveBuilder, DeckError};

#[tokio::test]
async fn fetch_filters_and_sorts_descending() {
    let server = setup_server();
    let mock = mock_archive_listing(
        &server,
        "research",
        r#"[
            {"name": "b.html", "size": 2048, "type": "file"},
            {"name": "a.html", "size": 1024, "type": "file"},
            {"name": "index.html", "size": 512, "type": "file"},
            {"name": "c.txt", "size": 10, "type": "file"}
        ]"#,
    );

    let client = client_for(&server);
    let entries = ArchiveBuilder::new(&client).fetch().await.unwrap();

    mock.assert();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["b.html", "a.html"]);
    assert_eq!(entries[0].size, 2048);
}

#[tokio::test]
async fn display_names_are_derived_from_file_names() {
    let server = setup_server();
    let _mock = mock_archive_listing(
        &server,
        "research",
        r#"[{"name": "deep_dive-2024.html", "size": 4096}]"#,
    );

    let client = client_for(&server);
    let entries = ArchiveBuilder::new(&client).fetch().await.unwrap();
    assert_eq!(entries[0].display_name, "Deep Dive 2024");
}

#[tokio::test]
async fn forbidden_status_is_reported_as_rate_limited() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/repos/McoreD/mcored.github.io/contents/research");
        then.status(403)
            .body(r#"{"message": "API rate limit exceeded"}"#);
    });

    let client = client_for(&server);
    let err = ArchiveBuilder::new(&client)
        .retry_policy(Some(homedeck::RetryConfig::disabled()))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::RateLimited { .. }));
}

#[tokio::test]
async fn other_statuses_keep_their_numeric_code() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/repos/McoreD/mcored.github.io/contents/research");
        then.status(404).body(r#"{"message": "Not Found"}"#);
    });

    let client = client_for(&server);
    let err = ArchiveBuilder::new(&client)
        .retry_policy(Some(homedeck::RetryConfig::disabled()))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::Status { status: 404, .. }));
}

#[tokio::test]
async fn custom_repository_and_path_shape_the_request() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/repos/someone/site/contents/papers");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = client_for(&server);
    let entries = ArchiveBuilder::new(&client)
        .repository("someone", "site")
        .path("papers")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(entries.is_empty());
}
