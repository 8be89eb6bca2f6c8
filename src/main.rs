use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aria_gateway::api::ApiServer;
use aria_gateway::Config;

/// Aria - Voice assistant backend gateway
#[derive(Parser)]
#[command(name = "aria", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "ARIA_PORT")]
    port: Option<u16>,

    /// Directory of static frontend files to serve
    #[arg(long, env = "ARIA_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,aria_gateway=info",
        1 => "info,aria_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    // CLI flags override the layered config
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = cli.static_dir {
        config.server.static_dir = Some(dir);
    }

    tracing::info!(
        port = config.server.port,
        model = %config.llm.model,
        "starting aria gateway"
    );

    ApiServer::new(&config).run().await?;

    Ok(())
}
