//! Executes core `HttpRequest`s with ureq.
//!
//! Status codes are returned as data, not errors, so the core client decides
//! what a 404 or 500 means. Only connection-level failures become
//! `TransportError`.

use pet_gallery_core::{HttpMethod, HttpRequest, HttpResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ureq::Error,
    },
}

/// Blocking HTTP executor. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let failed = |source| TransportError::Request {
            url: req.url.clone(),
            source,
        };

        let mut builder = match req.method {
            HttpMethod::Get => self.agent.get(&req.url),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call().map_err(failed)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        // Images can exceed ureq's default in-memory body cap.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(failed)?;

        tracing::debug!(url = %req.url, status, bytes = body.len(), "request complete");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
