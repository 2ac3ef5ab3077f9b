//! Refresh-token exchange with single-flight memoization.
//!
//! Backends that rotate refresh tokens accept each one exactly once. If two
//! requests hit a 401 together and both ran the exchange, the second would
//! present an already-spent token and the session would be revoked. The
//! exchange therefore runs in its own task, and every caller that arrives
//! while it is pending (including the one that started it) only watches for
//! its outcome. Dropping a caller never cancels or restarts the exchange. The
//! memo is cleared by the task as soon as the outcome is published, so a
//! later 401 starts a fresh one.

use std::sync::{Arc, Mutex, PoisonError};

use lens_core::models::{RefreshRequest, Session, TokenPair};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::headers::json_headers;
use crate::session::SessionStore;
use crate::transport::{HttpRequest, HttpTransport, Method, RequestBody};

pub const REFRESH_PATH: &str = "/auth/refresh";

/// Result of one refresh exchange, shared by every concurrent caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New tokens were persisted.
    Refreshed,
    /// No refresh token is stored. No request was made.
    NoRefreshToken,
    /// No usable tokens came back. `status` is `None` when the request could
    /// not be sent at all.
    Rejected { status: Option<u16> },
    /// The refresh endpoint could not be reached.
    Unreachable,
}

impl RefreshOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Refreshed)
    }
}

/// Receiving end of the pending exchange; `None` until it resolves.
type InFlight = watch::Receiver<Option<RefreshOutcome>>;
type Slot = Arc<Mutex<Option<InFlight>>>;

/// Exchanges the stored refresh token for a new pair, at most once at a time.
pub struct TokenRefreshCoordinator {
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
    in_flight: Slot,
}

impl TokenRefreshCoordinator {
    pub fn new(transport: Arc<dyn HttpTransport>, session: SessionStore) -> Self {
        Self {
            transport,
            session,
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Refresh the session, joining the pending exchange if there is one.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn refresh(&self) -> RefreshOutcome {
        let mut pending = {
            let mut slot = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            match slot.as_ref() {
                Some(pending) => {
                    debug!("refresh: joining in-flight exchange");
                    pending.clone()
                }
                None => {
                    let (tx, rx) = watch::channel(None);
                    *slot = Some(rx.clone());
                    tokio::spawn(run_exchange(
                        Arc::clone(&self.transport),
                        self.session.clone(),
                        Arc::clone(&self.in_flight),
                        tx,
                    ));
                    rx
                }
            }
        };

        let outcome = match pending.wait_for(Option::is_some).await {
            Ok(outcome) => *outcome,
            Err(_) => None,
        };
        outcome.unwrap_or_else(|| {
            warn!("refresh: exchange task ended without an outcome");
            RefreshOutcome::Rejected { status: None }
        })
    }

    /// Whether an exchange is currently pending.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

/// Run one exchange, then clear the memo and publish the outcome together so
/// no caller can join a resolved exchange.
async fn run_exchange(
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
    in_flight: Slot,
    tx: watch::Sender<Option<RefreshOutcome>>,
) {
    let outcome = exchange(transport.as_ref(), &session).await;

    let mut slot = in_flight.lock().unwrap_or_else(PoisonError::into_inner);
    if slot.as_ref().is_some_and(|pending| pending.same_channel(&tx.subscribe())) {
        *slot = None;
    }
    tx.send_replace(Some(outcome));
}

async fn exchange(transport: &dyn HttpTransport, session: &SessionStore) -> RefreshOutcome {
    let Session { user, tokens } = session.load();
    let (Some(user), Some(tokens)) = (user, tokens) else {
        debug!("refresh: no refresh token stored");
        return RefreshOutcome::NoRefreshToken;
    };

    let body = RefreshRequest {
        refresh_token: tokens.refresh_token,
    };
    let body = match serde_json::to_value(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!("refresh: failed to encode request: {e}");
            return RefreshOutcome::Rejected { status: None };
        }
    };
    let request = HttpRequest {
        method: Method::Post,
        path: REFRESH_PATH.to_string(),
        query: Vec::new(),
        headers: json_headers(&Session::anonymous()),
        body: RequestBody::Json(body),
    };

    let response = match transport.send(request).await {
        Ok(r) => r,
        Err(e) if e.is_unreachable() => {
            warn!("refresh: {e}");
            return RefreshOutcome::Unreachable;
        }
        Err(e) => {
            warn!("refresh: {e}");
            return RefreshOutcome::Rejected { status: None };
        }
    };

    if !response.is_success() {
        warn!(status = response.status, "refresh: rejected by backend");
        return RefreshOutcome::Rejected {
            status: Some(response.status),
        };
    }

    match response.json::<TokenPair>() {
        Ok(new_tokens) => {
            session.save(&user, &new_tokens);
            info!("refresh: session renewed");
            RefreshOutcome::Refreshed
        }
        Err(e) => {
            warn!("refresh: response is not a token pair: {e}");
            RefreshOutcome::Rejected {
                status: Some(response.status),
            }
        }
    }
}

impl std::fmt::Debug for TokenRefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRefreshCoordinator")
            .field("refreshing", &self.is_refreshing())
            .finish_non_exhaustive()
    }
}
