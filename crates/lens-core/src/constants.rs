/// Environment variable read by the tracing setup.
pub const LOG_ENV_VAR: &str = "LENS_LOG";

/// Suffix of the storage key holding the serialized token pair.
pub const TOKENS_KEY_SUFFIX: &str = "tokens";

/// Suffix of the storage key holding the serialized user profile.
pub const USER_KEY_SUFFIX: &str = "user";

/// Multipart field name the backend expects for document uploads.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Default token type when the backend omits it.
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";
