//! # lens-core
//!
//! Foundation crate for the LegalLens API client.
//! Defines the wire models, errors, config, constants, and the storage trait
//! that the resilience layer in `lens-client` is built on.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LensConfig;
pub use errors::{LensError, LensResult};
pub use models::{Session, TokenPair, UserProfile};
pub use traits::KeyValueStore;
