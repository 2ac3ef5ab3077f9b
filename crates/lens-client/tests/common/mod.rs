//! Scripted backend shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use lens_client::session::{MemoryStore, SessionStore};
use lens_client::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use lens_client::LensClient;
use lens_core::config::{LensConfig, SessionConfig};
use lens_core::errors::TransportError;
use lens_core::models::{TokenPair, UserProfile};
use serde_json::{json, Value};
use tokio::sync::Barrier;

/// What the backend does for one request.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(HttpResponse),
    Unreachable,
}

struct Gate {
    path: String,
    barrier: Arc<Barrier>,
    remaining: usize,
}

/// In-process [`HttpTransport`] answering from per-route queues.
///
/// Each `(method, path)` route pops one reply per request; an exhausted route
/// answers 404. Every request is recorded before it is answered.
#[derive(Default)]
pub struct MockBackend {
    routes: Mutex<HashMap<(String, String), VecDeque<Reply>>>,
    requests: Mutex<Vec<HttpRequest>>,
    offline: AtomicBool,
    gate: Mutex<Option<Gate>>,
    delays: Mutex<HashMap<String, Duration>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.push(method, path, Reply::Respond(HttpResponse::json_body(status, &body)))
    }

    pub fn on_raw(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, Reply::Respond(HttpResponse::new(status, body)))
    }

    pub fn on_unreachable(&self, method: Method, path: &str) -> &Self {
        self.push(method, path, Reply::Unreachable)
    }

    fn push(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method.as_str().to_string(), path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Every request fails at the transport level from now on.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Hold the first `parties` requests to `path` until all of them arrived.
    pub fn gate(&self, path: &str, parties: usize) {
        *self.gate.lock().unwrap() = Some(Gate {
            path: path.to_string(),
            barrier: Arc::new(Barrier::new(parties)),
            remaining: parties,
        });
    }

    /// Delay every answer on `path`.
    pub fn delay(&self, path: &str, by: Duration) {
        self.delays.lock().unwrap().insert(path.to_string(), by);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let barrier = {
            let mut gate = self.gate.lock().unwrap();
            match gate.as_mut() {
                Some(g) if g.path == request.path && g.remaining > 0 => {
                    g.remaining -= 1;
                    Some(Arc::clone(&g.barrier))
                }
                _ => None,
            }
        };
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }

        let delay = self.delays.lock().unwrap().get(&request.path).copied();
        if let Some(by) = delay {
            tokio::time::sleep(by).await;
        }

        if self.offline.load(Ordering::SeqCst) {
            return Err(TransportError::Unreachable {
                reason: "connection refused".into(),
            });
        }

        let key = (request.method.as_str().to_string(), request.path.clone());
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Unreachable) => Err(TransportError::Unreachable {
                reason: "connection reset".into(),
            }),
            None => Ok(HttpResponse::json_body(404, &json!({ "detail": "Not Found" }))),
        }
    }
}

// ─── Fixtures ──────────────────────────────────────────────

pub fn user() -> UserProfile {
    UserProfile {
        id: "1".into(),
        email: "a@b.com".into(),
        full_name: "Ada Bell".into(),
        role: "associate".into(),
        organization_id: "org-1".into(),
        organization_name: "Bell & Co".into(),
    }
}

pub fn tokens(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access_token: access.into(),
        refresh_token: refresh.into(),
        token_type: "bearer".into(),
    }
}

pub fn user_json() -> Value {
    serde_json::to_value(user()).unwrap()
}

pub fn tokens_json(access: &str, refresh: &str) -> Value {
    serde_json::to_value(tokens(access, refresh)).unwrap()
}

pub fn session_store() -> (SessionStore, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let session = SessionStore::new(store.clone(), &SessionConfig::default());
    (session, store)
}

/// Client over `backend` with a fresh in-memory session.
pub fn client(backend: &Arc<MockBackend>) -> (LensClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let client = LensClient::new(&LensConfig::default(), backend.clone(), store.clone());
    (client, store)
}

/// Client whose session already holds `T1`/`R1`.
pub fn signed_in_client(backend: &Arc<MockBackend>) -> (LensClient, Arc<MemoryStore>) {
    let (client, store) = client(backend);
    client
        .pipeline()
        .session()
        .save(&user(), &tokens("T1", "R1"));
    (client, store)
}
