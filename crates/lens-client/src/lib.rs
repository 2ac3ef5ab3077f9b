//! # lens-client
//!
//! Resilience layer between the LegalLens UI and its backend API.
//!
//! Every call goes through [`RequestPipeline`]: bearer headers are attached
//! from the persisted session, a 401 triggers one single-flight token refresh
//! and one retry, and a transport-level failure flips the client into demo
//! mode, where [`StaticResponseProvider`] answers every operation until the
//! process restarts.

pub mod client;
pub mod demo;
pub mod fallback;
pub mod headers;
pub mod logging;
pub mod ops;
pub mod pipeline;
pub mod refresh;
pub mod session;
pub mod transport;

pub use client::LensClient;
pub use demo::StaticResponseProvider;
pub use fallback::{FallbackMode, FallbackModeController};
pub use ops::Operation;
pub use pipeline::RequestPipeline;
pub use refresh::{RefreshOutcome, TokenRefreshCoordinator};
pub use session::{FileStore, MemoryStore, SessionStore};
pub use transport::{HttpTransport, ReqwestTransport};
