//! The smoke run: log in, time one customers query, report.

pub mod customers;
pub mod login;

pub use customers::*;
pub use login::*;

use std::io::Write;
use tracing::info;

use crate::config::Config;
use crate::domain::User;
use crate::error::SmokeError;
use crate::graphql::GraphQlClient;
use crate::report::Console;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub user: User,
    pub customers: CustomersOutcome,
}

/// Run both steps against `cfg.endpoint`, writing diagnostics to `out`.
///
/// Only a failed login or a fatal fault (transport, undecodable body) is an
/// `Err`; a failed customers query is reported inside [`RunReport`].
pub async fn run<W: Write>(cfg: &Config, out: W) -> Result<RunReport, SmokeError> {
    let client = GraphQlClient::new(&cfg.endpoint)?;
    let mut console = Console::new(out);

    info!(endpoint = client.endpoint(), page_size = cfg.query.page_size, "starting smoke run");

    let session = authenticate(&client, &cfg.credentials, &mut console).await?;
    let customers = query_customers(
        &client,
        &session,
        cfg.query.page_size,
        &cfg.thresholds,
        &mut console,
    )
    .await?;
    console.flush()?;

    Ok(RunReport {
        user: session.user,
        customers,
    })
}
