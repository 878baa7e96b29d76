//! Local counting service, exercised through the real client.

use std::net::SocketAddr;
use tally::config::FetchConfig;
use tally::fetch::{CountSource, HttpCountSource};
use tally::server::{CountServer, ServeOptions};

async fn start(options: ServeOptions) -> (SocketAddr, tally::server::ServerHandle) {
    let server = CountServer::bind("127.0.0.1:0".parse().unwrap(), options)
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();
    let handle = server.handle();
    tokio::spawn(server.run());
    (addr, handle)
}

fn client_for(addr: SocketAddr) -> HttpCountSource {
    HttpCountSource::new(&FetchConfig {
        endpoint: format!("http://{addr}/count"),
        ..FetchConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn echoes_amount_by_default() {
    let (addr, handle) = start(ServeOptions::default()).await;

    assert_eq!(client_for(addr).fetch_delta(5).await.unwrap(), 5);
    assert_eq!(client_for(addr).fetch_delta(0).await.unwrap(), 0);

    handle.shutdown();
}

#[tokio::test]
async fn fixed_delta_ignores_amount() {
    let (addr, handle) = start(ServeOptions { delta: Some(-3) }).await;

    assert_eq!(client_for(addr).fetch_delta(5).await.unwrap(), -3);
    assert_eq!(client_for(addr).fetch_delta(100).await.unwrap(), -3);

    handle.shutdown();
}

#[tokio::test]
async fn missing_or_invalid_amount_is_bad_request() {
    let (addr, handle) = start(ServeOptions::default()).await;
    let client = reqwest::Client::new();

    for url in [
        format!("http://{addr}/count"),
        format!("http://{addr}/count?amount=abc"),
        format!("http://{addr}/count?amount=-1"),
    ] {
        let resp = client.get(&url).send().await.unwrap();
        assert_eq!(resp.status().as_u16(), 400, "{url}");
    }

    handle.shutdown();
}

#[tokio::test]
async fn health_reports_ok() {
    let (addr, handle) = start(ServeOptions::default()).await;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");

    handle.shutdown();
}

#[tokio::test]
async fn shutdown_before_run_still_stops() {
    let server = CountServer::bind("127.0.0.1:0".parse().unwrap(), ServeOptions::default())
        .await
        .unwrap();
    server.handle().shutdown();

    tokio::time::timeout(std::time::Duration::from_secs(5), server.run())
        .await
        .expect("server did not stop")
        .unwrap();
}
