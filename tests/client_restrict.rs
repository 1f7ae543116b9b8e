//! End-to-end tests over a real TCP connection from 127.0.0.1.

use client_restrict::http::SERVICE_RESPONSE;
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_loopback_peer_is_allowed() {
    let server = common::start_server("127.0.0.1").await;

    let res = common::client().get(server.url()).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), SERVICE_RESPONSE);

    server.stop().await;
}

#[tokio::test]
async fn test_other_peer_is_denied() {
    let server = common::start_server("1.2.3.4").await;

    let res = common::client().get(server.url()).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.text().await.unwrap(), "not allowed");

    server.stop().await;
}

#[tokio::test]
async fn test_forwarded_for_overrides_peer() {
    let server = common::start_server("1.2.3.4").await;
    let client = common::client();

    let res = client
        .get(server.url())
        .header("X-Forwarded-For", "1.2.3.4")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(server.url())
        .header("X-Forwarded-For", "1.2.3.4, 10.0.0.2")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    server.stop().await;
}

#[tokio::test]
async fn test_real_ip_overrides_peer() {
    let server = common::start_server("1.2.3.4").await;

    let res = common::client()
        .post(server.url())
        .header("X-Real-Ip", "1.2.3.4")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.stop().await;
}

#[tokio::test]
async fn test_garbage_headers_fall_back_to_peer() {
    let server = common::start_server("127.0.0.1").await;

    let res = common::client()
        .get(server.url())
        .header("X-Forwarded-For", "garbage")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.stop().await;
}
