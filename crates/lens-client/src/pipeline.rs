//! Dispatch, outcome classification, refresh-and-retry, and demo fallback.

use std::sync::Arc;

use lens_core::errors::{LensError, LensResult, TransportError};
use lens_core::models::Session;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::demo::StaticResponseProvider;
use crate::fallback::{FallbackMode, FallbackModeController};
use crate::headers::{build_headers, Headers};
use crate::ops::Operation;
use crate::refresh::{RefreshOutcome, TokenRefreshCoordinator};
use crate::session::SessionStore;
use crate::transport::{HttpResponse, HttpTransport};

/// What one attempt on the wire produced.
enum Exchange {
    Response(HttpResponse),
    Unreachable(String),
}

/// The process-wide client context: session, reachability flag, refresh
/// coordinator, and static provider, wired around one transport.
pub struct RequestPipeline {
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
    mode: FallbackModeController,
    refresher: TokenRefreshCoordinator,
    demo: StaticResponseProvider,
}

impl RequestPipeline {
    pub fn new(transport: Arc<dyn HttpTransport>, session: SessionStore) -> Self {
        let refresher = TokenRefreshCoordinator::new(Arc::clone(&transport), session.clone());
        Self {
            transport,
            session,
            mode: FallbackModeController::new(),
            refresher,
            demo: StaticResponseProvider::new(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn mode(&self) -> FallbackMode {
        self.mode.mode()
    }

    pub fn is_demo(&self) -> bool {
        self.mode.is_demo()
    }

    pub fn refresher(&self) -> &TokenRefreshCoordinator {
        &self.refresher
    }

    /// Run `op` and decode the body as `T`.
    pub async fn call<T: DeserializeOwned>(&self, op: &Operation) -> LensResult<T> {
        let value = self.dispatch(op).await?;
        serde_json::from_value(value).map_err(|e| LensError::Decode {
            reason: format!("{}: {e}", op.name()),
        })
    }

    /// Run `op` and return the raw JSON body.
    pub async fn dispatch(&self, op: &Operation) -> LensResult<Value> {
        if self.mode.is_demo() {
            debug!(op = op.name(), "pipeline: demo mode, serving static payload");
            return self.demo.respond(op);
        }

        let session = self.session.load();
        let sent_token = session.access_token().map(str::to_owned);

        let response = match self.exchange(op, &session).await? {
            Exchange::Response(r) => r,
            Exchange::Unreachable(reason) => return self.fall_back(op, &reason),
        };

        if response.is_unauthorized() && !op.is_auth_exchange() {
            return self.recover_unauthorized(op, sent_token.as_deref()).await;
        }

        self.finish(op, response)
    }

    /// One 401 recovery: renew the session (or notice a peer already did),
    /// then retry exactly once.
    async fn recover_unauthorized(
        &self,
        op: &Operation,
        sent_token: Option<&str>,
    ) -> LensResult<Value> {
        self.mode.mark_live();

        let current = self.session.load();
        let already_rotated = match (current.access_token(), sent_token) {
            (Some(now), Some(sent)) => now != sent,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if already_rotated {
            debug!(op = op.name(), "pipeline: token rotated by another request, retrying");
        } else {
            match self.refresher.refresh().await {
                RefreshOutcome::Refreshed => {
                    debug!(op = op.name(), "pipeline: retrying after refresh");
                }
                // The tokens were never rejected, only not checked. Keep the
                // session and degrade like any other transport failure.
                RefreshOutcome::Unreachable => {
                    return self.fall_back(op, "refresh endpoint unreachable");
                }
                outcome => {
                    warn!(op = op.name(), ?outcome, "pipeline: session expired");
                    self.session.clear();
                    return Err(LensError::SessionExpired);
                }
            }
        }

        let session = self.session.load();
        match self.exchange(op, &session).await? {
            Exchange::Response(r) => self.finish(op, r),
            Exchange::Unreachable(reason) => self.fall_back(op, &reason),
        }
    }

    async fn exchange(&self, op: &Operation, session: &Session) -> LensResult<Exchange> {
        let mut request = op.to_request(Headers::new())?;
        request.headers = if op.is_auth_exchange() {
            build_headers(&Session::anonymous(), request.body.kind())
        } else {
            build_headers(session, request.body.kind())
        };

        debug!(op = op.name(), method = request.method.as_str(), path = %request.path, "pipeline: dispatch");

        match self.transport.send(request).await {
            Ok(r) => Ok(Exchange::Response(r)),
            Err(TransportError::Unreachable { reason }) => Ok(Exchange::Unreachable(reason)),
            Err(TransportError::InvalidRequest { reason }) => {
                Err(LensError::InvalidRequest { reason })
            }
        }
    }

    /// Any HTTP answer proves the backend is up.
    fn finish(&self, op: &Operation, response: HttpResponse) -> LensResult<Value> {
        self.mode.mark_live();

        if !response.is_success() {
            debug!(op = op.name(), status = response.status, "pipeline: application error");
            return Err(LensError::api(response.status, &response.body));
        }
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        response.json::<Value>().map_err(|e| LensError::Decode {
            reason: format!("{}: {e}", op.name()),
        })
    }

    fn fall_back(&self, op: &Operation, reason: &str) -> LensResult<Value> {
        warn!(op = op.name(), "pipeline: transport failure ({reason}), serving static payload");
        self.mode.mark_demo();
        self.demo.respond(op)
    }
}

impl std::fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPipeline")
            .field("session", &self.session)
            .field("mode", &self.mode.mode())
            .field("refresher", &self.refresher)
            .finish_non_exhaustive()
    }
}
