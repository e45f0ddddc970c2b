//! Executes the requests the core builds.
//!
//! # Design
//! `Transport` is the seam between the I/O-free core and the network. It is
//! synchronous; the runtime moves each call onto a blocking thread so the
//! event loop never waits on a socket.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

pub trait Transport: Send + Sync + 'static {
    /// Perform one HTTP round-trip. Error statuses come back as `Ok` data;
    /// only failures to get any response are `Err`.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `ureq`-backed transport. No retries, no timeout beyond ureq's defaults.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        // Status interpretation belongs to the core client.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let sent = match method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&path);
                for (key, value) in &headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&path);
                for (key, value) in &headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse::new(status, body))
    }
}
