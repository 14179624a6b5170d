//! Terminal client entry point.
use anyhow::Result;
use steak_client::{CliApp, ClientConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    let log_file = logging::init(config.session_id.as_deref())?;
    println!("Logging to {}", log_file.display());

    CliApp::builder(config).build()?.run().await
}
