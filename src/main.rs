use anyhow::Result;
use clap::{Parser, Subcommand};

/// The Ad Foundry - Ideas that sell, stories that stay
#[derive(Parser)]
#[command(name = "adfoundry")]
#[command(about = "The Ad Foundry marketing site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load and validate configuration, then report missing EmailJS settings
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = adfoundry::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    adfoundry::observability::init_observability(
        "adfoundry",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => adfoundry::server::serve(config, host, port).await,
        Commands::CheckConfig => check_config(&config),
    }
}

fn check_config(config: &adfoundry::Config) -> Result<()> {
    let missing = config.emailjs.delivery().missing();

    if !missing.is_empty() {
        anyhow::bail!("missing EmailJS settings: {}", missing.join(", "));
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        emailjs = %config.emailjs.base_url,
        "Configuration is valid"
    );

    Ok(())
}
