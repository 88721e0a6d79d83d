use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use plateproxy_config::{ProxyConfig, CONFIG_PATH_VAR};
use plateproxy_core::QueryParams;
use plateproxy_gateway::{lookup, start_server, GatewayState, LookupError, UpstreamClient};
use plateproxy_logging::{bootstrap_logger, init_logger};

#[derive(Parser)]
#[command(name = "plateproxy")]
#[command(about = "plateproxy — sanitizing vehicle registration lookup proxy")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, env = CONFIG_PATH_VAR)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP proxy server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run one lookup and print the response envelope
    Lookup {
        /// Vehicle registration number, e.g. KA04JW3068
        identifier: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = {
        let _bootstrap = bootstrap_logger();
        plateproxy_config::load(cli.config.as_deref()).await?
    };
    apply_cli_overrides(&mut config, &cli.command);
    let log_guard = init_logger(&config.log)?;
    plateproxy_config::check(&config)?;

    match cli.command {
        Commands::Serve { .. } => run_server(config).await?,
        Commands::Lookup { identifier } => {
            let upstream = UpstreamClient::new(&config.upstream);
            let params: QueryParams = [("num", identifier)].into_iter().collect();
            let result = match params.vehicle_identifier() {
                Some(identifier) => lookup(&upstream, &identifier).await,
                None => Err(LookupError::MissingIdentifier),
            };
            let envelope = result.unwrap_or_else(|e| e.envelope());
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            if !envelope.success {
                drop(log_guard);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Flags win over file and env values, and are validated with them.
fn apply_cli_overrides(config: &mut ProxyConfig, command: &Commands) {
    if let Commands::Serve { port: Some(port) } = command {
        config.port = *port;
    }
}

async fn run_server(config: ProxyConfig) -> Result<()> {
    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr()))?;

    info!(
        addr = %addr,
        upstream = %config.upstream.base_url,
        "Starting plateproxy"
    );

    let state = GatewayState::new(UpstreamClient::new(&config.upstream));
    start_server(addr, state).await
}
