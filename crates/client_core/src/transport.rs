use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::warn;
use serde::de::DeserializeOwned;
use shared::{
    domain::{PositionRecord, PositionUpdate},
    protocol::{get_current_position_route, set_position_route, SetPositionResponse},
};
use url::Url;

use crate::error::ClientError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Request/response access to the position store.
#[async_trait]
pub trait PositionTransport: Send + Sync {
    async fn get_current_position(&self) -> Result<PositionRecord, ClientError>;
    async fn set_position(&self, update: &PositionUpdate)
        -> Result<SetPositionResponse, ClientError>;
}

pub struct HttpTransport {
    http: Client,
    server_url: String,
}

impl HttpTransport {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(server_url, None)
    }

    /// Without a timeout a stalled server blocks the call indefinitely.
    pub fn with_timeout(server_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let server_url = normalize_server_url(server_url)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            server_url,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}{route}", self.server_url)
    }
}

#[async_trait]
impl PositionTransport for HttpTransport {
    async fn get_current_position(&self) -> Result<PositionRecord, ClientError> {
        let response = self
            .http
            .get(self.endpoint(get_current_position_route()))
            .send()
            .await?;
        decode_ok(response).await
    }

    async fn set_position(
        &self,
        update: &PositionUpdate,
    ) -> Result<SetPositionResponse, ClientError> {
        let response = self
            .http
            .post(self.endpoint(set_position_route()))
            .json(update)
            .send()
            .await?;
        let body = ensure_ok(response)?.bytes().await?;
        // A 200 is the acknowledgment; the body is informational.
        Ok(serde_json::from_slice(&body).unwrap_or_else(|error| {
            warn!(%error, "unexpected set_position acknowledgment body");
            SetPositionResponse::success()
        }))
    }
}

/// Anything other than 200 counts as failure.
fn ensure_ok(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(ClientError::Status(status.as_u16()));
    }
    Ok(response)
}

async fn decode_ok<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let body = ensure_ok(response)?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn normalize_server_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ClientError::InvalidServerUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_server_url() {
        let transport = HttpTransport::new("http://localhost:5000/").expect("transport");
        assert_eq!(transport.server_url(), "http://localhost:5000");
        assert_eq!(
            transport.endpoint(set_position_route()),
            "http://localhost:5000/set_position"
        );
    }

    #[test]
    fn rejects_non_http_server_urls() {
        for raw in ["localhost:5000", "ftp://localhost", "not a url"] {
            let err = HttpTransport::new(raw).err().expect("must fail");
            assert!(
                matches!(err, ClientError::InvalidServerUrl { .. }),
                "unexpected error for {raw}: {err}"
            );
        }
    }
}
