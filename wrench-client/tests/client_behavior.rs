//! Client behavior against a minimal in-process backend

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use wrench_client::{
    ClientConfig, ClientError, OrderReconciliationService, StaticTokenProvider,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("wrench_client=debug")
        .try_init();
}

/// Serve exactly one request with a canned response, returning the raw
/// request text for assertions
async fn serve_once(status_line: &'static str, body: &'static str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut request = String::new();
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.push_str(&String::from_utf8_lossy(&buf[..n]));
            if request.contains("\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (addr, handle)
}

fn client_for(addr: SocketAddr, token: StaticTokenProvider) -> wrench_client::HttpClient {
    ClientConfig::new(format!("http://{addr}"))
        .with_timeout(5)
        .build_client(Arc::new(token))
}

#[tokio::test]
async fn list_receipts_maps_and_normalizes() {
    init_tracing();
    let body = r#"{"code":"E0000","message":"Success","data":[{"id":"r-1","vehiclePlate":"12가3456","ownerName":"이영희","vehicleModel":"Avante","intakeDate":"2025-10-01","status":"접수"}]}"#;
    let (addr, server) = serve_once("200 OK", body).await;

    let client = client_for(addr, StaticTokenProvider::new("test-token"));
    let cancel = CancellationToken::new();
    let records = client.list_unprocessed_receipts(&cancel).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "r-1");
    assert_eq!(
        records[0].status,
        shared::models::RepairStatus::CheckedIn
    );

    let request = server.await.unwrap().to_ascii_lowercase();
    assert!(request.contains("get /api/receipts/unprocessed"));
    assert!(request.contains("authorization: bearer test-token"));
}

#[tokio::test]
async fn fetch_ordered_parts_drops_incomplete_lines() {
    init_tracing();
    let body = r#"{"code":"E0000","message":"Success","data":[{"partName":"brake pad","quantity":4,"unitPrice":32000.0},{"partCode":"FLT-02","partName":"oil filter","quantity":1,"unitPrice":12000.0}]}"#;
    let (addr, server) = serve_once("200 OK", body).await;

    let client = client_for(addr, StaticTokenProvider::new("test-token"));
    let service = OrderReconciliationService::new(client);
    let cancel = CancellationToken::new();
    let lines = service
        .fetch_ordered_parts("r-1", "12가3456", &cancel)
        .await
        .unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].part_code, "FLT-02");

    let request = server.await.unwrap();
    assert!(request.contains("receiptId=r-1"));
}

#[tokio::test]
async fn backend_401_surfaces_unauthorized_and_signals() {
    init_tracing();
    let (addr, _server) = serve_once("401 Unauthorized", "").await;

    let client = client_for(addr, StaticTokenProvider::new("stale-token"));
    let signal = client.unauthorized_signal();
    let cancel = CancellationToken::new();

    let err = client.list_my_receipts(&cancel).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(signal.has_changed().unwrap());
}

#[tokio::test]
async fn absent_token_fails_fast_without_round_trip() {
    init_tracing();
    // Nothing is listening here; an attempted request would error differently
    let client = ClientConfig::new("http://127.0.0.1:9")
        .build_client(Arc::new(StaticTokenProvider::anonymous()));
    let signal = client.unauthorized_signal();
    let cancel = CancellationToken::new();

    let err = client.list_unprocessed_receipts(&cancel).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(signal.has_changed().unwrap());
}

#[tokio::test]
async fn cancelled_fetch_returns_cancelled() {
    init_tracing();
    let client = ClientConfig::new("http://127.0.0.1:9")
        .build_client(Arc::new(StaticTokenProvider::new("test-token")));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client.list_unprocessed_receipts(&cancel).await.unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
}

#[tokio::test]
async fn connection_failure_is_an_error_not_empty_success() {
    init_tracing();
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ClientConfig::new(format!("http://{addr}"))
        .with_timeout(5)
        .build_client(Arc::new(StaticTokenProvider::new("test-token")));
    let cancel = CancellationToken::new();

    let err = client.list_unprocessed_receipts(&cancel).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Http(_) | ClientError::Timeout
    ));
}
