// TimeLog Viewer - tests/e2e_fetch.rs
//
// End-to-end tests for the fetch pipeline.
//
// These tests run the real reqwest client against a one-shot HTTP responder
// on a local socket, then push the result through the reducer, the
// aggregation functions, and the CSV export. Nothing is mocked apart from
// the backend itself.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use timelog_viewer::app::client::{HttpLogSource, LogSource};
use timelog_viewer::app::fetch::FetchManager;
use timelog_viewer::app::state::{LoadStatus, ViewEvent, ViewState};
use timelog_viewer::core::aggregate::{hours_by_employee, hours_by_project};
use timelog_viewer::core::export::export_csv;
use timelog_viewer::core::model::{AggregateRow, LogFilter, ViewTab};
use timelog_viewer::util::error::FetchError;

// =============================================================================
// Helpers
// =============================================================================

const SAM_BODY: &str = r#"[{"employee":"Sam","date":"2024-01-01","startTime":"09:00","endTime":"17:00","task":"Build","project":"Apollo"}]"#;

/// Serve exactly one request with the given status line and body.
///
/// Returns the bound address and a receiver yielding the request line the
/// client sent (e.g. `GET /logs?employee=Sam HTTP/1.1`).
fn serve_once(status: &'static str, body: &'static str) -> (SocketAddr, mpsc::Receiver<String>) {
    serve_bytes_once(status, body.as_bytes())
}

/// Like `serve_once`, for bodies that are not valid UTF-8.
fn serve_bytes_once(
    status: &'static str,
    body: &'static [u8],
) -> (SocketAddr, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        // Drain headers up to the blank line; GET carries no body.
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        let _ = tx.send(request_line.trim_end().to_string());

        // The client may already have given up; write errors are not the
        // subject of these tests.
        let mut stream = stream;
        let _ = write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(body);
        let _ = stream.flush();
    });

    (addr, rx)
}

fn source_for(addr: SocketAddr) -> HttpLogSource {
    HttpLogSource::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap()
}

fn sam_filter() -> LogFilter {
    LogFilter {
        employee: "Sam".to_string(),
        project: "Apollo".to_string(),
        date: String::new(),
    }
}

fn row(name: &str, hours: f64) -> AggregateRow {
    AggregateRow {
        name: name.to_string(),
        hours,
    }
}

// =============================================================================
// HTTP client
// =============================================================================

/// The request line carries the filters in fixed order, and the response
/// is decoded into entries.
#[test]
fn e2e_fetch_sends_query_and_decodes_entries() {
    let (addr, request_rx) = serve_once("200 OK", SAM_BODY);

    let entries = source_for(addr).fetch_logs(&sam_filter()).unwrap();

    assert_eq!(
        request_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        "GET /logs?employee=Sam&project=Apollo HTTP/1.1"
    );
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].columns(),
        ["Sam", "2024-01-01", "09:00", "17:00", "Build", "Apollo"]
    );
}

/// No filters: plain `/logs`, no `?`.
#[test]
fn e2e_fetch_without_filters_has_no_query() {
    let (addr, request_rx) = serve_once("200 OK", "[]");

    let entries = source_for(addr).fetch_logs(&LogFilter::default()).unwrap();

    assert!(entries.is_empty());
    assert_eq!(
        request_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        "GET /logs HTTP/1.1"
    );
}

/// A non-2xx response is a Status error, even when the body is JSON.
#[test]
fn e2e_fetch_error_status_is_reported() {
    let (addr, _request_rx) = serve_once("500 Internal Server Error", r#"{"error":"db down"}"#);

    let result = source_for(addr).fetch_logs(&LogFilter::default());

    match result {
        Err(FetchError::Status {
            status,
            body_preview,
            ..
        }) => {
            assert_eq!(status, 500);
            assert!(body_preview.contains("db down"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

/// A JSON object instead of an array is a Decode error, not a crash.
#[test]
fn e2e_fetch_non_array_body_is_decode_error() {
    let (addr, _request_rx) = serve_once("200 OK", r#"{"logs":[]}"#);

    let result = source_for(addr).fetch_logs(&LogFilter::default());

    assert!(
        matches!(result, Err(FetchError::Decode { .. })),
        "expected Decode error, got {result:?}"
    );
}

/// Bytes that are not UTF-8 fail decoding rather than being replaced
/// with U+FFFD and accepted.
#[test]
fn e2e_fetch_invalid_utf8_body_is_decode_error() {
    let body: &'static [u8] = b"[{\"employee\":\"Sa\xFFm\",\"date\":\"2024-01-01\",\"startTime\":\"09:00\",\"endTime\":\"17:00\",\"task\":\"Build\",\"project\":\"Apollo\"}]";
    let (addr, _request_rx) = serve_bytes_once("200 OK", body);

    let result = source_for(addr).fetch_logs(&LogFilter::default());

    assert!(
        matches!(result, Err(FetchError::Decode { .. })),
        "expected Decode error, got {result:?}"
    );
}

/// The error preview of a non-UTF-8 error body is still readable.
#[test]
fn e2e_fetch_invalid_utf8_error_body_keeps_status() {
    let (addr, _request_rx) = serve_bytes_once("502 Bad Gateway", b"upstream \xFF down");

    let result = source_for(addr).fetch_logs(&LogFilter::default());

    match result {
        Err(FetchError::Status {
            status,
            body_preview,
            ..
        }) => {
            assert_eq!(status, 502);
            assert_eq!(body_preview, "upstream \u{FFFD} down");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

/// Nothing listening on the port is a Network error.
#[test]
fn e2e_fetch_connection_refused_is_network_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let result = source_for(addr).fetch_logs(&LogFilter::default());

    assert!(
        matches!(result, Err(FetchError::Network { .. })),
        "expected Network error, got {result:?}"
    );
}

// =============================================================================
// Full pipeline
// =============================================================================

/// Fetch through the worker, reduce, then check table, charts and export.
#[test]
fn e2e_load_then_render_table_charts_and_export() {
    let (addr, _request_rx) = serve_once("200 OK", SAM_BODY);
    let mut manager = FetchManager::new(Arc::new(source_for(addr)));

    let mut state = ViewState::default();
    let request_id = manager.start_fetch(state.filter.clone());
    state = state.reduce(ViewEvent::FetchIssued { request_id });

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut outcomes = Vec::new();
    while outcomes.is_empty() && Instant::now() < deadline {
        outcomes = manager.poll_outcomes(1);
        thread::sleep(Duration::from_millis(10));
    }
    let outcome = outcomes.pop().expect("fetch did not complete in time");
    state = state.reduce(outcome.into_event());

    // Table tab
    assert_eq!(state.tab, ViewTab::Table);
    assert_eq!(state.status, LoadStatus::Loaded { count: 1 });
    assert_eq!(
        state.entries[0].columns(),
        ["Sam", "2024-01-01", "09:00", "17:00", "Build", "Apollo"]
    );

    // Charts tab: switching does not touch the entries.
    let before = state.entries.clone();
    state = state.reduce(ViewEvent::TabSelected(ViewTab::Charts));
    assert_eq!(state.entries, before);
    assert_eq!(hours_by_employee(&state.entries), vec![row("Sam", 8.0)]);
    assert_eq!(hours_by_project(&state.entries), vec![row("Apollo", 8.0)]);

    // Export the loaded entries to a real file.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs.csv");
    let file = std::fs::File::create(&path).unwrap();
    assert_eq!(export_csv(&state.entries, file, &path).unwrap(), 1);
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "Employee,Date,Start Time,End Time,Task,Project\n\
         Sam,2024-01-01,09:00,17:00,Build,Apollo\n"
    );
}
