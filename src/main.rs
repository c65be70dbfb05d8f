use advisor::logging::init_logging;
use advisor::metrics::{init_metrics, metrics_app, metrics_middleware};
use advisor::router::init_router;
use advisor::state::init_app_state;
use advisor_config::ServerConfig;
use anyhow::Context;
use axum::middleware;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "advisor")]
#[command(about = "Faculty Advisor API - role-based access gate", long_about = None)]
struct Cli {
    /// Interface to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(short = 'p', long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    init_logging();

    let mut server_config = ServerConfig::from_env();
    if let Some(host) = cli.host {
        server_config.host = host;
    }
    if let Some(port) = cli.port {
        server_config.port = port;
    }

    let state = match init_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to initialize application state");
            std::process::exit(1);
        }
    };
    info!(
        session_backend = state.session_store().backend_name(),
        "Session store ready"
    );

    let mut app = init_router(state);

    if let Some(handle) = init_metrics().context("failed to install metrics recorder")? {
        app = app
            .merge(metrics_app(handle))
            .layer(middleware::from_fn(metrics_middleware));
        info!("Prometheus metrics available at /metrics");
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{address}/docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
