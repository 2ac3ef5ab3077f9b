//! Outgoing request headers derived from the current session.

use std::collections::BTreeMap;

use lens_core::models::Session;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header name to value, in a stable order.
pub type Headers = BTreeMap<String, String>;

/// Body encoding of the request the headers are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    /// The transport writes its own multipart `Content-Type` with the boundary.
    Multipart,
}

/// Headers for a request: JSON content type unless multipart, plus
/// `Authorization: Bearer <access_token>` when the session holds a token.
pub fn build_headers(session: &Session, kind: BodyKind) -> Headers {
    let mut headers = Headers::new();
    if kind == BodyKind::Json {
        headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
    }
    if let Some(token) = session.access_token() {
        headers.insert(AUTHORIZATION.to_string(), format!("Bearer {token}"));
    }
    headers
}

/// Shorthand for [`build_headers`] with [`BodyKind::Json`].
pub fn json_headers(session: &Session) -> Headers {
    build_headers(session, BodyKind::Json)
}

/// Shorthand for [`build_headers`] with [`BodyKind::Multipart`].
pub fn upload_headers(session: &Session) -> Headers {
    build_headers(session, BodyKind::Multipart)
}
