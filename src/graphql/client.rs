use reqwest::{
    header::{HeaderMap, HeaderValue, USER_AGENT},
    Client, StatusCode,
};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

use super::{GraphQlEnvelope, GraphQlError};
use crate::config::EndpointConfig;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

/// Posts GraphQL documents to a single endpoint.
#[derive(Clone)]
pub struct GraphQlClient {
    endpoint: String,
    client: Client,
}

impl GraphQlClient {
    pub fn new(cfg: &EndpointConfig) -> Result<Self, GraphQlError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&cfg.user_agent)
                .map_err(|_| GraphQlError::InvalidHeader("user-agent"))?,
        );
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = cfg.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(GraphQlError::Client)?;
        Ok(Self {
            endpoint: cfg.url.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `document` and collect the status and full body.
    ///
    /// `variables` is sent only when `Some`; the smoke documents inline their
    /// arguments and pass `None`.
    /// Non-2xx statuses are returned as-is; only transport failures error.
    /// `elapsed` spans dispatch through the last body byte.
    pub async fn execute(
        &self,
        document: &str,
        variables: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<GraphQlResponse, GraphQlError> {
        let mut request = self.client.post(&self.endpoint).json(&GraphQlRequest {
            query: document,
            variables,
        });
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        debug!(endpoint = %self.endpoint, authenticated = bearer.is_some(), "sending GraphQL request");

        let started = Instant::now();
        let resp = request.send().await.map_err(GraphQlError::Transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(GraphQlError::Transport)?;
        let elapsed = started.elapsed();

        debug!(
            %status,
            bytes = body.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "GraphQL response received"
        );

        Ok(GraphQlResponse {
            status,
            body,
            elapsed,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GraphQlResponse {
    pub status: StatusCode,
    pub body: String,
    pub elapsed: Duration,
}

impl GraphQlResponse {
    /// Exactly 200; other 2xx codes are not treated as success.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn json(&self) -> Result<GraphQlEnvelope, GraphQlError> {
        GraphQlEnvelope::parse(&self.body)
    }
}
