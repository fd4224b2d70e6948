use thiserror::Error;

use crate::config::ConfigError;
use crate::graphql::GraphQlError;

/// Everything that ends a run early.
#[derive(Debug, Error)]
pub enum SmokeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    GraphQl(#[from] GraphQlError),

    /// Already echoed to the console by the login step.
    #[error("login failed")]
    LoginRejected { response: serde_json::Value },

    #[error("failed to write console output: {0}")]
    Output(#[from] std::io::Error),
}

impl SmokeError {
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the console already shows the cause.
    pub fn is_reported(&self) -> bool {
        matches!(self, SmokeError::LoginRejected { .. })
    }
}
