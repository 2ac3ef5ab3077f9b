//! Transport layer: the HTTP seam and its reqwest implementation.

pub mod http_client;
pub mod protocol;

use async_trait::async_trait;
use lens_core::errors::TransportError;

pub use http_client::ReqwestTransport;
pub use protocol::{FilePart, HttpRequest, HttpResponse, Method, RequestBody};

/// Sends one HTTP request and returns whatever the server answered.
///
/// Any HTTP status, including 4xx/5xx, is `Ok`. `Err` is reserved for
/// failures where no response was obtained or nothing could be sent.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
