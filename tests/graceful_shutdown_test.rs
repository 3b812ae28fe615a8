//! Integration tests for serving on a real socket and shutting down
//!
//! These tests verify that:
//! - The server answers over TCP
//! - A shutdown signal stops the server cleanly
//! - Data written before shutdown is still on disk afterwards

use prometheus::api::{self, AppState};
use prometheus::config::PrometheusConfig;
use serde_json::{json, Value};
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::watch;

async fn start_server(
    dir: &TempDir,
) -> (
    String,
    watch::Sender<bool>,
    tokio::task::JoinHandle<std::io::Result<()>>,
) {
    let mut config = PrometheusConfig::default();
    config.storage.data_dir = dir.path().join("data").to_string_lossy().to_string();
    config.export.export_dir = dir.path().join("exports").to_string_lossy().to_string();

    let state = AppState::from_config(config).await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(api::serve(state, listener, shutdown_rx));
    (base_url, shutdown_tx, handle)
}

#[tokio::test]
async fn test_shutdown_signal_channel() {
    let (shutdown_tx, shutdown_rx1) = watch::channel(false);
    let shutdown_rx2 = shutdown_rx1.clone();

    assert!(!*shutdown_rx1.borrow());
    shutdown_tx.send(true).unwrap();
    assert!(*shutdown_rx1.borrow());
    assert!(*shutdown_rx2.borrow());
}

#[tokio::test]
async fn test_server_stops_on_signal() {
    let dir = TempDir::new().unwrap();
    let (base_url, shutdown_tx, handle) = start_server(&dir).await;

    let client = reqwest::Client::new();
    let health: Value = client
        .get(format!("{base_url}/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");

    shutdown_tx.send(true).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop within 5 seconds")
        .unwrap();
    assert!(result.is_ok());

    assert!(client
        .get(format!("{base_url}/api/health"))
        .send()
        .await
        .is_err());
}

#[tokio::test]
async fn test_courses_persist_across_restart() {
    let dir = TempDir::new().unwrap();

    let (base_url, shutdown_tx, handle) = start_server(&dir).await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base_url}/api/courses"))
        .json(&json!({"title": "Fire Safety", "code": "FS-1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();

    shutdown_tx.send(true).unwrap();
    handle.await.unwrap().unwrap();

    let (base_url, shutdown_tx, handle) = start_server(&dir).await;
    let fetched: Value = client
        .get(format!("{base_url}/api/courses/{}", created["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    shutdown_tx.send(true).unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_dropped_sender_keeps_serving() {
    let dir = TempDir::new().unwrap();
    let (base_url, shutdown_tx, handle) = start_server(&dir).await;
    drop(shutdown_tx);

    tokio::time::sleep(Duration::from_millis(50)).await;
    let status = reqwest::get(format!("{base_url}/"))
        .await
        .unwrap()
        .status();
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(!handle.is_finished());
    handle.abort();
}
