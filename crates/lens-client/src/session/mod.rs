//! Durable session persistence: user profile and token pair under two keys.

mod file_store;
mod memory_store;

use std::sync::Arc;

use lens_core::config::SessionConfig;
use lens_core::models::{Session, TokenPair, UserProfile};
use lens_core::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// Reads and writes the [`Session`] through a [`KeyValueStore`].
///
/// Never fails towards callers: write errors are logged, and missing or
/// corrupted entries load as absent.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    tokens_key: String,
    user_key: String,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &SessionConfig) -> Self {
        Self {
            store,
            tokens_key: config.tokens_key(),
            user_key: config.user_key(),
        }
    }

    /// Persist both halves of the session. The user is written first so an
    /// interrupted save never leaves tokens without a profile.
    pub fn save(&self, user: &UserProfile, tokens: &TokenPair) {
        self.write(&self.user_key, user);
        self.write(&self.tokens_key, tokens);
    }

    /// Load the session. Each key is decoded independently; a key that is
    /// missing, unreadable, or malformed comes back as `None`.
    pub fn load(&self) -> Session {
        let user: Option<UserProfile> = self.read(&self.user_key);
        let mut tokens: Option<TokenPair> = self.read(&self.tokens_key);

        if tokens.is_some() && user.is_none() {
            warn!("session: stored tokens have no user profile, ignoring them");
            tokens = None;
        }

        Session { user, tokens }
    }

    /// Remove both keys. Safe to call on an empty store.
    pub fn clear(&self) {
        for key in [&self.tokens_key, &self.user_key] {
            if let Err(e) = self.store.remove(key) {
                warn!(key = %key, "session: failed to clear entry: {e}");
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, "session: failed to serialize entry: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &raw) {
            warn!(key, "session: failed to persist entry: {e}");
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, "session: failed to read entry: {e}");
                return None;
            }
        };
        // A stored `null` is a valid "absent".
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, "session: discarding corrupted entry: {e}");
                None
            }
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("tokens_key", &self.tokens_key)
            .field("user_key", &self.user_key)
            .finish_non_exhaustive()
    }
}
