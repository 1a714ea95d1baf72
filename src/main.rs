use clap::Parser;
use extenso::domain::ports::ConfigProvider;
use extenso::utils::logger;
use extenso::{CliConfig, ExtensoServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_logger(settings.verbose(), settings.log_format());

    tracing::info!("Starting extenso server");
    tracing::debug!("Settings: {:?}", settings);

    let server = ExtensoServer::new(settings);
    if let Err(e) = server.run().await {
        tracing::error!("❌ Server failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
