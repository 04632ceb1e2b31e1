use anyhow::Context;
use astra_config::AstraConfig;
use astra_server::{AppState, create_router};
use clap::Parser;

/// Serve the Astra scientists/planets/missions API.
#[derive(Debug, Parser)]
#[command(name = "astra", version)]
struct Cli {
    /// IP address to bind (overrides `server.host`).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides `server.port`).
    #[arg(long, short)]
    port: Option<u16>,

    /// Database file or `:memory:` (overrides `database.path`).
    #[arg(long)]
    database: Option<String>,

    /// Log debug output.
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Log errors only.
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("astra error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = AstraConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(database) = cli.database {
        config.database.path = database;
    }

    let addr = config.server.bind_addr()?;
    let state = AppState::open(&config.database)
        .await
        .context("failed to open database")?;
    let scientists = state.service.count_scientists().await?;
    tracing::info!(scientists, "database ready");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ASTRA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
