//! Terminal client entry point.
mod app;
mod config;
mod input;
mod logging;
mod net;
mod presentation;
mod state;

use anyhow::Result;

use app::App;
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    let _log_guard = logging::init(&config.log_file)?;

    App::new(&config)?.run().await
}
