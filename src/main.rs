use anyhow::Result;
use tommy_backend::{build_app, run_server, setup_logging, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    setup_logging(&config.log_filter);

    run_server(build_app(), &config).await?;
    Ok(())
}
