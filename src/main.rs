use anyhow::{Context, Result};
use gixat_smoke::{config::Config, smoke, telemetry::init_tracing, SmokeError};
use std::process::ExitCode;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let smoke_err = err.downcast_ref::<SmokeError>();
            if !smoke_err.is_some_and(SmokeError::is_reported) {
                error!(error = %err, "smoke run aborted");
                eprintln!("Error: {err:#}");
            }
            ExitCode::from(smoke_err.map_or(1, SmokeError::exit_code))
        }
    }
}

async fn try_main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load().map_err(SmokeError::from)?;
    smoke::run(&cfg, std::io::stdout())
        .await
        .context("smoke run failed")?;
    Ok(())
}
