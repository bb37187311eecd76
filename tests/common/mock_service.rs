//! In-process stand-in for the remote counting service.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// One request the mock saw, for assertions.
#[derive(Debug, Clone)]
pub struct CapturedVisit {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedVisit {
    /// The request body parsed as JSON, when it is JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// A canned reply.
///
/// While the queue is empty the mock behaves like the real service: it
/// increments its own counter and answers `{"count", "success"}`.
#[derive(Debug, Clone)]
pub struct ServiceReply {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl ServiceReply {
    /// A successful count response.
    pub fn count(count: u64) -> Self {
        Self {
            status: 200,
            content_type: "application/json".to_string(),
            body: format!(r#"{{"count":{count},"success":true}}"#).into_bytes(),
            delay_ms: 0,
        }
    }

    /// An error status with a JSON error body.
    pub fn error(status: u16) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: br#"{"error":"counter unavailable"}"#.to_vec(),
            delay_ms: 0,
        }
    }

    /// An arbitrary body, for malformed-response tests.
    pub fn raw(status: u16, content_type: &str, body: &str) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    /// Delays the reply by `ms` before it is sent.
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct ServiceState {
    visits: Arc<Mutex<Vec<CapturedVisit>>>,
    replies: Arc<Mutex<VecDeque<ServiceReply>>>,
    counter: Arc<AtomicU64>,
}

/// Mock counting service for integration tests.
pub struct MockCountService {
    pub addr: SocketAddr,
    state: ServiceState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCountService {
    /// Start the mock on an ephemeral port.
    pub async fn start() -> Self {
        let state = ServiceState {
            visits: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(VecDeque::new())),
            counter: Arc::new(AtomicU64::new(0)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_visit))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock count service");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for the server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue a reply for the next request.
    pub async fn enqueue(&self, reply: ServiceReply) {
        self.state.replies.lock().await.push_back(reply);
    }

    /// All requests seen so far.
    pub async fn captured(&self) -> Vec<CapturedVisit> {
        self.state.visits.lock().await.clone()
    }

    /// The `/visit` URL of this mock.
    pub fn visit_url(&self) -> String {
        format!("http://{}/visit", self.addr)
    }
}

impl Drop for MockCountService {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_visit(State(state): State<ServiceState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let body = axum::body::to_bytes(req.into_body(), 64 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.visits.lock().await.push(CapturedVisit {
        method,
        path,
        content_type,
        body,
    });

    let reply = state.replies.lock().await.pop_front().unwrap_or_else(|| {
        let count = state.counter.fetch_add(1, Ordering::SeqCst) + 1;
        ServiceReply::count(count)
    });

    if reply.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(reply.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(reply.status).unwrap())
        .header("content-type", reply.content_type)
        .body(Body::from(reply.body))
        .unwrap()
}
