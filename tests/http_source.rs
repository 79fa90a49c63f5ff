//! HttpScheduleSource tests against a one-connection local HTTP fixture.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::{timeout, Duration};

use planview::error::PlanviewError;
use planview::{HttpScheduleSource, ScheduleSource};

const TIMEOUT_MS: u64 = 2000;

/// Serve exactly one connection with a canned HTTP/1.1 response and return
/// the base URL to hit.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fixture");
    let addr = listener.local_addr().expect("fixture addr");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");

        // Drain the request head; the source sends no body.
        let mut buf = [0u8; 4096];
        let mut head = Vec::new();
        loop {
            let n = stream.read(&mut buf).await.expect("read request");
            head.extend_from_slice(&buf[..n]);
            if n == 0 || head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        stream.shutdown().await.ok();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn fetch_decodes_success_response() {
    let base = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"month_name": "2025년 9월", "schedule": {"1": {"naver": ["카페"]}}}"#,
    )
    .await;

    let source = HttpScheduleSource::new(base);
    let response = timeout(Duration::from_millis(TIMEOUT_MS), source.fetch_monthly())
        .await
        .expect("fetch timed out")
        .expect("fetch failed");

    assert_eq!(response.month_name.as_deref(), Some("2025년 9월"));
    assert!(response.schedule.is_some());
    assert!(response.error.is_none());
}

#[tokio::test]
async fn non_ok_status_maps_to_transport_error() {
    let base = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;

    let source = HttpScheduleSource::new(base);
    let result = timeout(Duration::from_millis(TIMEOUT_MS), source.fetch_monthly())
        .await
        .expect("fetch timed out");

    match result {
        Err(PlanviewError::Transport { status }) => assert_eq!(status, 500),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let base = serve_once("HTTP/1.1 200 OK", "this is not json").await;

    let source = HttpScheduleSource::new(base);
    let result = timeout(Duration::from_millis(TIMEOUT_MS), source.fetch_monthly())
        .await
        .expect("fetch timed out");

    match result {
        Err(PlanviewError::Decode { .. }) => {}
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_maps_to_network_error() {
    // Bind then drop so the port is very likely unoccupied.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let source = HttpScheduleSource::new(format!("http://{addr}"));
    let result = timeout(Duration::from_millis(TIMEOUT_MS), source.fetch_monthly())
        .await
        .expect("fetch timed out");

    match result {
        Err(PlanviewError::Network { .. }) => {}
        other => panic!("expected Network error, got {other:?}"),
    }
}
