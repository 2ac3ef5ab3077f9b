use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{TOKENS_KEY_SUFFIX, USER_KEY_SUFFIX};

/// Where and under which keys the session is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key namespace. Keys are `<namespace>_tokens` and `<namespace>_user`.
    pub namespace: String,
    /// Profile directory for the file-backed store. `None` uses the platform data dir.
    pub profile_dir: Option<String>,
}

impl SessionConfig {
    /// Storage key of the serialized token pair.
    pub fn tokens_key(&self) -> String {
        format!("{}_{}", self.namespace, TOKENS_KEY_SUFFIX)
    }

    /// Storage key of the serialized user profile.
    pub fn user_key(&self) -> String {
        format!("{}_{}", self.namespace, USER_KEY_SUFFIX)
    }

    /// The explicit profile dir, else `<data dir>/<namespace>/profile`.
    /// `None` when the platform exposes no data directory.
    pub fn resolved_profile_dir(&self) -> Option<PathBuf> {
        match &self.profile_dir {
            Some(dir) => Some(PathBuf::from(dir)),
            None => dirs::data_dir().map(|d| {
                d.join(&self.namespace)
                    .join(defaults::DEFAULT_PROFILE_SUBDIR)
            }),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            namespace: defaults::DEFAULT_NAMESPACE.to_string(),
            profile_dir: None,
        }
    }
}
