use chicken_server::cli::{self, CliArgs};
use chicken_server::config::ServerConfig;
use chicken_server::error;
use chicken_server::leaderboard::Leaderboard;
use chicken_server::logging::{self, LogConfig};
use chicken_server::server::{create_router, AppState, ENDPOINTS};
use std::env;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli_args = CliArgs::parse(&args);

    if cli_args.help {
        cli::print_help();
        return Ok(());
    }

    if cli_args.version {
        cli::print_version();
        return Ok(());
    }

    // Keep the guard alive so the access log keeps flushing
    let _log_guard = logging::init_logging(&LogConfig::from_env())?;
    logging::log_platform_info();

    let config = cli_args.apply(ServerConfig::from_env());

    let leaderboard = Leaderboard::new();
    let state = AppState {
        leaderboard: leaderboard.clone(),
        trust_forwarded_for: config.trust_forwarded_for,
    };
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Chicken-as-a-Service listening on http://{}", addr);
    tracing::info!("Available endpoints: {}", ENDPOINTS.join(", "));
    if config.trust_forwarded_for {
        tracing::info!("Clients are identified by X-Forwarded-For when present");
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!(
        clients = leaderboard.len(),
        "Server stopped, leaderboard discarded"
    );

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
