//! reqwest-backed transport with timeouts and gzip.

use async_trait::async_trait;
use lens_core::config::ApiConfig;
use lens_core::constants::UPLOAD_FIELD_NAME;
use lens_core::errors::TransportError;
use reqwest::multipart::{Form, Part};

use super::protocol::{HttpRequest, HttpResponse, Method, RequestBody};
use super::HttpTransport;

/// Production [`HttpTransport`] over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .build()
            .map_err(|e| TransportError::InvalidRequest {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder errors mean nothing left the process; everything else is a
/// failure to obtain a response.
fn classify(e: reqwest::Error) -> TransportError {
    if e.is_builder() {
        TransportError::InvalidRequest {
            reason: e.to_string(),
        }
    } else {
        TransportError::Unreachable {
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url(&request.path);
        let mut req = self.client.request(request.method.into(), &url);

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.body(value.to_string()),
            RequestBody::Multipart(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.filename);
                if let Some(ct) = file.content_type.as_deref() {
                    part = part.mime_str(ct).map_err(|e| TransportError::InvalidRequest {
                        reason: format!("invalid content type {ct:?}: {e}"),
                    })?;
                }
                req.multipart(Form::new().part(UPLOAD_FIELD_NAME, part))
            }
        };

        tracing::trace!(method = request.method.as_str(), %url, "http: sending");

        let resp = req.send().await.map_err(classify)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(classify)?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
