use clap::Parser;
use file_gateway::server::{self, AppState};
use file_gateway::utils::logger;
use file_gateway::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_logger(args.verbose, args.json_logs);

    tracing::info!("Starting file-gateway");
    if let Some(path) = &args.config {
        tracing::debug!("Config file: {}", path.display());
    }

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::from_config(&config)?;
    server::serve(state, &config.bind_address()).await?;

    Ok(())
}
