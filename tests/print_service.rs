//! # Print Service Tests
//!
//! End-to-end exchanges against an in-process mock print service.
//!
//! ## Test Coverage
//!
//! - **Submission**: body shape, queue order, resubmission of the full queue
//! - **Prepared requests**: job files reach the service byte-for-byte
//! - **Printer list**: returned unmodified, empty list is not a failure
//! - **Failures**: non-success status, refused and dropped connections,
//!   timeouts all surface as the same error variant and message

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::{get, post},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::error::Error as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use thermal_relay::{
    PrintOutcome, PrintRequest, PrintService, Printer, RawPrintRequest, RelayError, ServiceConfig,
    action::{Action, BarcodeMode, JustifyMode},
};

// ============================================================================
// MOCK PRINT SERVICE
// ============================================================================

#[derive(Clone)]
struct MockService {
    /// Status answered to POST /print and GET /printers.
    status: StatusCode,
    /// Body answered to GET /printers.
    printers: Value,
    /// Delay before answering.
    delay: Duration,
    /// Every POST /print body received, in arrival order.
    received: Arc<Mutex<Vec<Value>>>,
    /// The same bodies as raw text.
    raw: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    fn ok() -> Self {
        Self {
            status: StatusCode::OK,
            printers: json!([]),
            delay: Duration::ZERO,
            received: Arc::new(Mutex::new(Vec::new())),
            raw: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    fn printers(mut self, printers: Value) -> Self {
        self.printers = printers;
        self
    }

    fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    fn raw(&self) -> Vec<String> {
        self.raw.lock().unwrap().clone()
    }
}

async fn handle_print(State(mock): State<MockService>, headers: HeaderMap, body: String) -> (StatusCode, String) {
    tokio::time::sleep(mock.delay).await;
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if !is_json {
        return (StatusCode::UNSUPPORTED_MEDIA_TYPE, "expected application/json".to_string());
    }
    let Ok(parsed) = serde_json::from_str::<Value>(&body) else {
        return (StatusCode::BAD_REQUEST, "body is not JSON".to_string());
    };
    mock.raw.lock().unwrap().push(body);
    mock.received.lock().unwrap().push(parsed);
    let message = if mock.status.is_success() { "ok" } else { "printer offline" };
    (mock.status, message.to_string())
}

async fn handle_printers(State(mock): State<MockService>) -> (StatusCode, Json<Value>) {
    tokio::time::sleep(mock.delay).await;
    (mock.status, Json(mock.printers.clone()))
}

/// Start the mock on an ephemeral port and return a client for it.
async fn spawn(mock: MockService) -> PrintService {
    let app = Router::new()
        .route("/print", post(handle_print))
        .route("/printers", get(handle_printers))
        .with_state(mock);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    service_at(&format!("http://{}", addr))
}

fn service_at(url: &str) -> PrintService {
    PrintService::new(ServiceConfig::new(url).unwrap()).unwrap()
}

/// A port that refuses connections.
async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// A server that accepts connections and closes them without answering.
async fn dropping_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            if let Ok((stream, _)) = listener.accept().await {
                drop(stream);
            }
        }
    });
    format!("http://{}", addr)
}

fn sample_job(service: PrintService) -> Printer {
    let mut printer = Printer::new("EPSON1").with_service(service);
    printer
        .justify(JustifyMode::Center)
        .text("a")
        .cut()
        .text("b")
        .barcode("0123", Some(BarcodeMode::Itf))
        .feed(None);
    printer
}

// ============================================================================
// SUBMISSION
// ============================================================================

#[tokio::test]
async fn test_print_sends_queue_in_order() {
    let mock = MockService::ok();
    let mut printer = sample_job(spawn(mock.clone()).await);
    printer.set_key("unlock-key");
    printer.set_printer_text_special(true);

    let outcome = printer.print().await.unwrap();
    assert_eq!(outcome, PrintOutcome { success: true });

    assert_eq!(
        mock.received(),
        vec![json!({
            "key": "unlock-key",
            "printer": "EPSON1",
            "payload": [
                {"type": "justify", "payload": "justifyCenter"},
                {"type": "text", "payload": "a"},
                {"type": "cut"},
                {"type": "text", "payload": "b"},
                {"type": "barcode", "payload": "0123", "extraData": "BARCODE_ITF"},
                {"type": "feed"}
            ],
            "textSpecial": true
        })]
    );
}

#[tokio::test]
async fn test_print_twice_resends_full_queue() {
    let mock = MockService::ok();
    let printer = sample_job(spawn(mock.clone()).await);

    printer.print().await.unwrap();
    printer.print().await.unwrap();

    let received = mock.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], received[1]);
    assert_eq!(received[0]["payload"].as_array().unwrap().len(), 6);
    assert_eq!(printer.actions().len(), 6);
}

#[tokio::test]
async fn test_print_empty_queue_is_forwarded() {
    let mock = MockService::ok();
    let printer = Printer::new("").with_service(spawn(mock.clone()).await);

    printer.print().await.unwrap();

    assert_eq!(
        mock.received(),
        vec![json!({"printer": "", "payload": [], "textSpecial": false})]
    );
}

#[tokio::test]
async fn test_received_body_parses_back_into_actions() {
    let mock = MockService::ok();
    let printer = sample_job(spawn(mock.clone()).await);
    printer.print().await.unwrap();

    let request: PrintRequest = serde_json::from_value(mock.received().remove(0)).unwrap();
    assert_eq!(request, printer.request());
    assert_eq!(request.payload[5], Action::Feed(None));
}

#[tokio::test]
async fn test_submit_prepared_request() {
    let mock = MockService::ok();
    let service = spawn(mock.clone()).await;
    let request: PrintRequest = serde_json::from_value(json!({
        "printer": "STAR2",
        "payload": [{"type": "pulse"}, {"type": "commands", "payload": "\u{1b}@"}]
    }))
    .unwrap();

    service.print(&request).await.unwrap();

    assert_eq!(
        mock.received()[0]["payload"],
        json!([{"type": "pulse"}, {"type": "commands", "payload": "\u{1b}@"}])
    );
}

// ============================================================================
// PREPARED REQUESTS
// ============================================================================

#[tokio::test]
async fn test_print_raw_sends_exact_bytes() {
    let mock = MockService::ok();
    let service = spawn(mock.clone()).await;
    let body = r#"{"printer":"STAR2","payload":[{"type":"qrCode","payload":{"content":"x"}}]}"#;

    let outcome = service.print_raw(&RawPrintRequest::parse(body).unwrap()).await.unwrap();

    assert_eq!(outcome, PrintOutcome { success: true });
    assert_eq!(mock.raw(), vec![body.to_string()]);
    assert!(mock.raw()[0].contains(r#"{"type":"qrCode","payload":{"content":"x"}}"#));
}

#[tokio::test]
async fn test_print_raw_forwards_values_without_checking() {
    let mock = MockService::ok();
    let service = spawn(mock.clone()).await;
    let body = "{\n  \"printer\": \"STAR2\",\n  \"payload\": [\n    {\"type\": \"qrCode\", \"payload\": {\"content\": \"x\", \"size\": 3.5}},\n    {\"type\": \"feed\", \"payload\": -1}\n  ]\n}\n";
    assert!(serde_json::from_str::<PrintRequest>(body).is_err());

    service.print_raw(&RawPrintRequest::parse(body).unwrap()).await.unwrap();

    assert_eq!(mock.raw(), vec![body.to_string()]);
    assert_eq!(mock.received()[0]["payload"][1], json!({"type": "feed", "payload": -1}));
}

#[tokio::test]
async fn test_print_raw_failure_is_uniform() {
    let mock = MockService::ok().status(StatusCode::INTERNAL_SERVER_ERROR);
    let service = spawn(mock.clone()).await;
    let request = RawPrintRequest::parse(r#"{"printer":"P","payload":[]}"#).unwrap();

    let err = service.print_raw(&request).await.unwrap_err();
    assert!(matches!(err, RelayError::PrintFailed(_)));
    assert_eq!(err.to_string(), "Failed to print");
    assert_eq!(mock.raw().len(), 1);
}

// ============================================================================
// PRINTER LIST
// ============================================================================

#[tokio::test]
async fn test_get_printers_returns_list_unmodified() {
    let mock = MockService::ok().printers(json!(["EPSON1", "STAR2"]));
    let printer = Printer::new("").with_service(spawn(mock).await);

    let printers = printer.get_printers().await.unwrap();
    assert_eq!(printers, vec!["EPSON1".to_string(), "STAR2".to_string()]);
}

#[tokio::test]
async fn test_get_printers_empty_list_is_not_a_failure() {
    let printer = Printer::new("").with_service(spawn(MockService::ok()).await);
    assert_eq!(printer.get_printers().await.unwrap(), Vec::<String>::new());
}

#[tokio::test]
async fn test_get_printers_does_not_touch_queue() {
    let mock = MockService::ok().printers(json!(["EPSON1"]));
    let printer = sample_job(spawn(mock.clone()).await);

    printer.get_printers().await.unwrap();

    assert!(mock.received().is_empty());
    assert_eq!(printer.actions().len(), 6);
}

#[tokio::test]
async fn test_get_printers_failures() {
    let rejected = spawn(MockService::ok().status(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let err = rejected.printers().await.unwrap_err();
    assert!(matches!(err, RelayError::PrinterListFailed(_)));
    assert_eq!(err.to_string(), "Failed getting printer list");

    let malformed = spawn(MockService::ok().printers(json!({"printers": []}))).await;
    let err = malformed.printers().await.unwrap_err();
    assert!(matches!(err, RelayError::PrinterListFailed(_)));

    let refused = service_at(&refused_url().await);
    let err = refused.printers().await.unwrap_err();
    assert!(matches!(err, RelayError::PrinterListFailed(_)));
    assert_eq!(err.to_string(), "Failed getting printer list");
}

// ============================================================================
// FAILURES
// ============================================================================

#[tokio::test]
async fn test_rejection_and_transport_failure_look_the_same() {
    let mock = MockService::ok().status(StatusCode::INTERNAL_SERVER_ERROR);
    let rejected = sample_job(spawn(mock.clone()).await).print().await.unwrap_err();
    let refused = sample_job(service_at(&refused_url().await)).print().await.unwrap_err();
    let dropped = sample_job(service_at(&dropping_url().await)).print().await.unwrap_err();

    for err in [&rejected, &refused, &dropped] {
        assert!(matches!(err, RelayError::PrintFailed(_)));
        assert_eq!(err.to_string(), "Failed to print");
    }

    // The service still got the job it rejected.
    assert_eq!(mock.received().len(), 1);
}

#[tokio::test]
async fn test_rejection_detail_is_kept_as_source() {
    let mock = MockService::ok().status(StatusCode::BAD_REQUEST);
    let err = sample_job(spawn(mock).await).print().await.unwrap_err();

    let detail = err.source().unwrap().to_string();
    assert!(detail.contains("400"));
    assert!(detail.contains("printer offline"));
}

#[tokio::test]
async fn test_failed_print_keeps_queue() {
    let printer = sample_job(service_at(&refused_url().await));
    assert!(printer.print().await.is_err());
    assert_eq!(printer.actions().len(), 6);
}

#[tokio::test]
async fn test_configured_timeout_fails_print() {
    let mock = MockService::ok().delay(Duration::from_secs(5));
    let slow = spawn(mock).await;
    let config = slow.config().clone().with_timeout(Duration::from_millis(200));
    let service = PrintService::new(config).unwrap();

    let err = sample_job(service).print().await.unwrap_err();
    assert!(matches!(err, RelayError::PrintFailed(_)));
}
