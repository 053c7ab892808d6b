//! Local stand-in for an upstream provider, used by the client tests.
//!
//! Answers every request with a fixed status and body and records what it
//! received, so tests can check headers and payloads on the real HTTP path.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode, Uri, header};

/// One request as the fake provider saw it.
pub(crate) struct Captured {
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Captured {
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub(crate) struct FakeProvider {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Captured>>>,
}

impl FakeProvider {
    /// Bind `127.0.0.1:0` and answer every request with `status` and a JSON `body`.
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let seen: Arc<Mutex<Vec<Captured>>> = Arc::default();
        let sink = seen.clone();
        let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap, body_in: Bytes| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(Captured {
                    uri,
                    headers,
                    body: body_in,
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            seen,
        }
    }

    /// Take the single request received so far.
    pub fn only_request(&self) -> Captured {
        let mut seen = self.seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "expected exactly one upstream request");
        seen.remove(0)
    }
}
