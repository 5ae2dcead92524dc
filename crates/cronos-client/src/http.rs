//! `reqwest`-backed analysis client
//!
//! Works on native targets and in the browser (reqwest uses `fetch` on
//! wasm32). Every failure mode of `POST /analyze` is surfaced as an
//! [`Error`] so callers can show it instead of silently stalling.

use std::time::Duration;

use cronos_core::prelude::*;
use cronos_core::{AnalysisRequest, AnalysisResult, ReportId};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::endpoints::{ApiBase, ReportFormat};

/// Default request timeout for native clients
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Longest error body echoed back to the user
const MAX_ERROR_BODY_CHARS: usize = 200;

/// FastAPI-style error body: `{"detail": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// HTTP client for the analysis service
#[derive(Debug, Clone)]
pub struct HttpAnalyzeClient {
    client: Client,
    base: ApiBase,
}

impl HttpAnalyzeClient {
    /// Create a client for the given base URL
    ///
    /// `timeout` bounds each request on native targets. The browser applies
    /// its own network policy, so it is ignored on wasm32.
    pub fn new(base: ApiBase, timeout: Duration) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout;
            Client::new()
        };

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Perform `POST {base}/analyze`
    pub async fn send_analysis(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let url = self.base.analyze_url()?;
        debug!("POST {} (mode={})", url, request.mode);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(describe_transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
            warn!("Analysis request failed with {}: {}", status, message);
            return Err(Error::server_status(status.as_u16(), message));
        }

        let result: AnalysisResult = serde_json::from_str(&body)
            .map_err(|e| Error::malformed_response(e.to_string()))?;
        info!(
            "Analysis completed: status={} report_id={:?}",
            result.status,
            result.usable_report_id().map(|id| id.as_str())
        );
        Ok(result)
    }

    pub fn download_url(&self, format: ReportFormat, id: &ReportId) -> Result<Url> {
        self.base.report_url(format, id)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl crate::api::AnalyzeApi for HttpAnalyzeClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        self.send_analysis(request).await
    }

    fn report_url(&self, format: ReportFormat, id: &ReportId) -> Result<Url> {
        self.download_url(format, id)
    }
}

fn describe_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        return Error::http("request timed out waiting for the analysis service");
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return Error::http(format!("could not reach the analysis service: {err}"));
    }

    Error::http(err.to_string())
}

/// Extract a human-readable message from an error response body
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => s,
        Ok(parsed) => parsed.detail.to_string(),
        Err(_) => trimmed.to_string(),
    };

    Some(message.chars().take(MAX_ERROR_BODY_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cronos_core::{Constraints, Mode, Status};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response and hand back the raw request
    async fn spawn_stub(status_line: &'static str, body: &'static str) -> (ApiBase, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        let base = ApiBase::parse(&format!("http://{addr}")).unwrap();
        (base, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client(base: ApiBase) -> HttpAnalyzeClient {
        HttpAnalyzeClient::new(base, Duration::from_secs(5)).unwrap()
    }

    fn change_request() -> AnalysisRequest {
        AnalysisRequest::new(
            Mode::Change,
            "def f(x): return x > 1",
            "same result",
            Constraints {
                no_behavior_change: true,
                allow_boundary_change: false,
            },
        )
        .with_conditions("x > 1", "x >= 1")
    }

    #[tokio::test]
    async fn test_successful_analysis_posts_json() {
        let (base, server) = spawn_stub(
            "200 OK",
            r#"{"status":"FAIL","risk_score":30,"technical_explanation":"boundary moved","human_explanation":"1 is now accepted","report_id":"r-42","timestamp":"2024-01-01T00:00:00Z","ai_provider":"Gemini","mode":"CHANGE"}"#,
        )
        .await;

        let result = client(base).send_analysis(&change_request()).await.unwrap();
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.usable_report_id().unwrap().as_str(), "r-42");
        assert_eq!(result.human_explanation.as_deref(), Some("1 is now accepted"));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /analyze HTTP/1.1"));
        assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
        let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(sent["mode"], "CHANGE");
        assert_eq!(sent["old_condition"], "x > 1");
        assert_eq!(sent["new_condition"], "x >= 1");
        assert_eq!(sent["constraints"]["no_behavior_change"], true);
    }

    #[tokio::test]
    async fn test_error_status_surfaces_detail() {
        let (base, _server) = spawn_stub("400 Bad Request", r#"{"detail":"Invalid mode"}"#).await;

        let err = client(base)
            .send_analysis(&change_request())
            .await
            .unwrap_err();
        match err {
            Error::ServerStatus { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid mode");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_is_malformed() {
        let (base, _server) = spawn_stub("200 OK", "<html>proxy error</html>").await;

        let err = client(base)
            .send_analysis(&change_request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = ApiBase::parse(&format!("http://{addr}")).unwrap();
        let err = client(base)
            .send_analysis(&change_request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
    }

    #[test]
    fn test_error_message_from_detail_object() {
        let message = error_message(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        assert!(message.contains("field required"));
    }

    #[test]
    fn test_error_message_plain_text_truncated() {
        let long = "x".repeat(500);
        assert_eq!(error_message(&long).unwrap().len(), MAX_ERROR_BODY_CHARS);
        assert!(error_message("   ").is_none());
    }

    #[test]
    fn test_error_message_detail_truncated() {
        let body = format!(r#"{{"detail":"{}"}}"#, "é".repeat(500));
        let message = error_message(&body).unwrap();
        assert_eq!(message.chars().count(), MAX_ERROR_BODY_CHARS);
        assert!(message.chars().all(|c| c == 'é'));

        let body = format!(r#"{{"detail":[{{"msg":"{}"}}]}}"#, "y".repeat(500));
        assert_eq!(error_message(&body).unwrap().chars().count(), MAX_ERROR_BODY_CHARS);
    }

    #[test]
    fn test_download_url_uses_base() {
        let base = ApiBase::parse("http://localhost:9000").unwrap();
        let client = client(base);
        let id = ReportId::new("r1").unwrap();
        assert_eq!(
            client.download_url(ReportFormat::Pdf, &id).unwrap().as_str(),
            "http://localhost:9000/report/pdf/r1"
        );
    }
}
