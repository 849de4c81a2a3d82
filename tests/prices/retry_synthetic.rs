use std::time::Duration;

use crate::common::{client_for, setup_server};
use homedeck::{Backoff, DeckError, PricesBuilder, RetryConfig};

/// A fast, deterministic policy: fixed short backoff, retry on 503 only.
fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(10)),
        retry_on_status: vec![503],
        retry_on_timeout: true,
        retry_on_connect: true,
    }
}

#[tokio::test]
async fn retriable_status_is_reattempted_until_the_budget_runs_out() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/simple/price");
        then.status(503).body("unavailable");
    });

    let client = client_for(&server);
    let err = PricesBuilder::new(&client)
        .retry_policy(Some(fast_retry(2)))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, DeckError::ServerError { status: 503, .. }));
    // Initial attempt plus two retries.
    assert_eq!(mock.hits(), 3);
}

#[tokio::test]
async fn status_outside_the_retry_list_is_attempted_once() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/simple/price");
        then.status(404).body("not found");
    });

    let client = client_for(&server);
    let err = PricesBuilder::new(&client)
        .retry_policy(Some(fast_retry(4)))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, DeckError::Status { status: 404, .. }));
    assert_eq!(mock.hits(), 1);
}

#[tokio::test]
async fn disabled_policy_never_retries() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/simple/price");
        then.status(503).body("unavailable");
    });

    let client = client_for(&server);
    let err = PricesBuilder::new(&client)
        .retry_policy(Some(RetryConfig::disabled()))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, DeckError::ServerError { status: 503, .. }));
    assert_eq!(mock.hits(), 1);
}
