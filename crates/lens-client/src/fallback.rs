//! Backend reachability flag: `unknown -> live`, `unknown|live -> demo`.
//!
//! Demo is sticky for the life of the controller. Only a new client (a
//! process restart) starts again from `unknown`.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

const UNKNOWN: u8 = 0;
const LIVE: u8 = 1;
const DEMO: u8 = 2;

/// Observed reachability of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMode {
    /// No HTTP exchange has completed yet.
    Unknown,
    /// The backend answered at least once.
    Live,
    /// A transport failure was observed. Static data is served.
    Demo,
}

impl FallbackMode {
    fn from_raw(raw: u8) -> Self {
        match raw {
            LIVE => Self::Live,
            DEMO => Self::Demo,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unknown => "unknown",
            Self::Live => "live",
            Self::Demo => "demo",
        };
        f.write_str(s)
    }
}

/// Single source of truth for whether the backend is reachable.
#[derive(Debug)]
pub struct FallbackModeController {
    state: AtomicU8,
}

impl FallbackModeController {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(UNKNOWN),
        }
    }

    /// Record a completed HTTP exchange. No effect once in demo mode.
    pub fn mark_live(&self) {
        let changed = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| {
                (s == UNKNOWN).then_some(LIVE)
            })
            .is_ok();
        if changed {
            tracing::info!("fallback: backend reachable, live mode");
        }
    }

    /// Record a transport-level failure. Sticky.
    pub fn mark_demo(&self) {
        let previous = self.state.swap(DEMO, Ordering::AcqRel);
        if previous != DEMO {
            tracing::warn!(
                "fallback: backend unreachable, switching from {} to demo mode",
                FallbackMode::from_raw(previous)
            );
        }
    }

    pub fn is_demo(&self) -> bool {
        self.state.load(Ordering::Acquire) == DEMO
    }

    pub fn mode(&self) -> FallbackMode {
        FallbackMode::from_raw(self.state.load(Ordering::Acquire))
    }
}

impl Default for FallbackModeController {
    fn default() -> Self {
        Self::new()
    }
}
