use clap::Parser;
use geowrr_domain::CliOverrides;
use tokio::io::BufReader;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "geowrr")]
#[command(version)]
#[command(about = "GeoIP weighted round robin backend for the PowerDNS pipe protocol")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Zone map (YAML)
    #[arg(long, value_name = "FILE")]
    zones: Option<String>,

    /// Site map (YAML)
    #[arg(long, value_name = "FILE")]
    sites: Option<String>,

    /// MaxMind GeoIP2/GeoLite2 City database
    #[arg(long, value_name = "FILE")]
    geoip: Option<String>,

    /// Seed for weighted selection
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        zones: cli.zones,
        sites: cli.sites,
        geoip_database: cli.geoip,
        seed: cli.seed,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // stdout is the protocol channel, logs go to stderr
    bootstrap::init_logging(&config);

    info!("Starting geowrr v{}", env!("CARGO_PKG_VERSION"));

    let services = di::PipeServices::new(&config)?;

    server::serve_pipe(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        services.session(),
    )
    .await?;

    info!("Pipe closed, shutdown complete");
    Ok(())
}
