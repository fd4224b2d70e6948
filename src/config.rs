use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/graphql";
pub const DEFAULT_EMAIL: &str = "al-hussein@papayatrading.com";
pub const DEFAULT_PASSWORD: &str = "TT%%oo77";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Optional TOML file read from the working directory.
pub const CONFIG_FILE: &str = "gixat-smoke.toml";
/// Environment prefix, nested keys split on `__` (e.g. `GIXAT_SMOKE__QUERY__PAGE_SIZE`).
pub const ENV_PREFIX: &str = "GIXAT_SMOKE__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub credentials: Credentials,
    pub query: QueryConfig,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    pub url: String,
    /// Unset means the HTTP client's default (no overall request timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

impl EndpointConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            user_agent: concat!("gixat-smoke/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

// Password stays out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Value of the `first:` pagination argument.
    pub page_size: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Latency tier boundaries in milliseconds. Both are exclusive upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Thresholds {
    pub excellent_ms: f64,
    pub good_ms: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            excellent_ms: 100.0,
            good_ms: 200.0,
        }
    }
}

impl Config {
    /// Defaults, then `gixat-smoke.toml`, then `GIXAT_SMOKE__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let cfg: Config = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.url.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint.url must not be empty".into()));
        }
        if self.query.page_size == 0 {
            return Err(ConfigError::Invalid("query.page_size must be at least 1".into()));
        }
        let t = &self.thresholds;
        if !(t.excellent_ms >= 0.0 && t.excellent_ms < t.good_ms) {
            return Err(ConfigError::Invalid(format!(
                "thresholds must satisfy 0 <= excellent_ms < good_ms (got {} / {})",
                t.excellent_ms, t.good_ms
            )));
        }
        Ok(())
    }
}
