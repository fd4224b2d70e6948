use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphQlError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid {0} header value")]
    InvalidHeader(&'static str),

    #[error("GraphQL request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("response has no `data.{0}` field")]
    MissingData(&'static str),
}
