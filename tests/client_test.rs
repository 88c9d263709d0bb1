//! 解析クライアントのテスト
//!
//! ローカルに1回だけ応答するHTTPサーバーを立てて送受信を検証

use resume_analyzer::client::{submit, AnalyzerClient};
use resume_analyzer_common::error::{REQUEST_FAILED_MESSAGE, VALIDATION_MESSAGE};
use resume_analyzer_common::{NoticeKind, Phase, ResumeFile, ScoreTier, UploadForm};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// 1リクエストだけ受けて固定レスポンスを返す。受信したリクエスト全文を返す
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept失敗");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}/analyze", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok());

        let complete = match content_length {
            Some(len) => buf.len() >= header_end + 4 + len,
            None => buf.ends_with(b"0\r\n\r\n"),
        };
        if complete {
            break;
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn client(endpoint: &str) -> AnalyzerClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("クライアント作成失敗");
    AnalyzerClient::with_http(http, endpoint)
}

fn filled_form() -> UploadForm {
    let mut form = UploadForm::new();
    form.select_file(ResumeFile::new("cv.pdf", b"%PDF-1.4 resume".to_vec()));
    form.set_job_posting("Data analyst: SQL, Python, Go");
    form
}

/// 接続できないアドレス
async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/analyze", addr)
}

#[tokio::test]
async fn test_successful_analysis() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"fit_score": 85, "matched": ["SQL", "Python"], "missing": ["Go"]}"#,
    )
    .await;

    let mut form = filled_form();
    submit(&mut form, &client(&endpoint), false).await;

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /analyze"));
    assert!(request.contains(r#"name="resume"; filename="cv.pdf""#));
    assert!(request.contains("%PDF-1.4 resume"));
    assert!(request.contains(r#"name="job_posting""#));
    assert!(request.contains("Data analyst: SQL, Python, Go"));

    assert!(!form.is_loading());
    let result = form.visible_result().expect("結果がない");
    assert_eq!(result.fit_score, 85.0);
    assert_eq!(result.tier(), ScoreTier::High);
    assert_eq!(result.matched, vec!["SQL", "Python"]);
    assert_eq!(result.missing, vec!["Go"]);
    assert!(form.notice().is_none());
}

#[tokio::test]
async fn test_server_error_status() {
    let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;

    let mut form = filled_form();
    submit(&mut form, &client(&endpoint), false).await;
    server.await.unwrap();

    assert_eq!(form.phase(), &Phase::Idle);
    let notice = form.notice().expect("通知がない");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, REQUEST_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_backend_error_payload() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"error": "Invalid JSON from model", "raw_output": "sorry"}"#,
    )
    .await;

    let mut form = filled_form();
    submit(&mut form, &client(&endpoint), false).await;
    server.await.unwrap();

    assert!(form.visible_result().is_none());
    assert_eq!(form.notice().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_network_failure_clears_previous_result() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"fit_score": 55, "matched": [], "missing": []}"#,
    )
    .await;
    let mut form = filled_form();
    submit(&mut form, &client(&endpoint), false).await;
    server.await.unwrap();
    assert_eq!(form.visible_result().unwrap().tier(), ScoreTier::Mid);

    let endpoint = closed_endpoint().await;
    submit(&mut form, &client(&endpoint), false).await;

    assert!(!form.is_loading());
    assert!(form.visible_result().is_none());
    assert_eq!(form.notice().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let endpoint = closed_endpoint().await;

    let mut form = UploadForm::new();
    form.set_job_posting("Data analyst");
    submit(&mut form, &client(&endpoint), false).await;

    // 送信していればNetworkエラー（Error通知）になる
    let notice = form.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Validation);
    assert_eq!(notice.message, VALIDATION_MESSAGE);
    assert_eq!(form.phase(), &Phase::Idle);
}
