// Single source of truth for all default values.

// --- API ---
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_USER_AGENT: &str = concat!("lens-client/", env!("CARGO_PKG_VERSION"));

// --- Session ---
pub const DEFAULT_NAMESPACE: &str = "legallens";
pub const DEFAULT_PROFILE_SUBDIR: &str = "profile";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Operation defaults ---
pub const DEFAULT_RECENT_SEARCH_LIMIT: u32 = 10;
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 20;
pub const DEFAULT_CLAUSE_TOP_K: u32 = 10;
