pub mod config;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod report;
pub mod smoke;
pub mod telemetry;

pub use error::SmokeError;
