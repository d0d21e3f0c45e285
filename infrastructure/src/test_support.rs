//! Loopback HTTP stub used by adapter tests

use axum::Router;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the stub saw of the first request it answered
#[derive(Debug)]
pub(crate) struct RecordedRequest {
    pub method: String,
    /// Path and query, e.g. `/prompt/x?seed=1`
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// An axum server bound to an ephemeral loopback port
pub(crate) struct StubServer {
    /// `http://127.0.0.1:{port}`
    pub base_url: String,
    pub request: oneshot::Receiver<RecordedRequest>,
}

struct Reply {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
    recorder: Mutex<Option<oneshot::Sender<RecordedRequest>>>,
}

/// Answer every request with the given status and JSON body
pub(crate) async fn serve_once(status: u16, body: impl Into<Vec<u8>>) -> StubServer {
    serve_once_with_type(status, "application/json", body).await
}

pub(crate) async fn serve_once_with_type(
    status: u16,
    content_type: &str,
    body: impl Into<Vec<u8>>,
) -> StubServer {
    let (tx, rx) = oneshot::channel();
    let reply = Arc::new(Reply {
        status: StatusCode::from_u16(status).unwrap(),
        content_type: content_type.to_string(),
        body: body.into(),
        recorder: Mutex::new(Some(tx)),
    });
    let app = Router::new().fallback(respond).with_state(reply);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubServer {
        base_url,
        request: rx,
    }
}

async fn respond(State(reply): State<Arc<Reply>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        uri: parts.uri.to_string(),
        headers: parts.headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    if let Some(tx) = reply.recorder.lock().unwrap().take() {
        let _ = tx.send(recorded);
    }

    (
        reply.status,
        [(header::CONTENT_TYPE, reply.content_type.clone())],
        reply.body.clone(),
    )
        .into_response()
}

/// HTTP client that never routes loopback traffic through a proxy
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// An address nothing listens on
pub(crate) async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
