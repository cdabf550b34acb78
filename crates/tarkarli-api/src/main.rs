//! Tarkarli travel assistant CLI and chat relay server entry point.
//!
//! Binary name: `tarkarli`
//!
//! Parses CLI arguments, loads configuration, wires the relay, then either
//! serves the HTTP API or runs a one-shot question.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;
use tarkarli_observe::tracing_setup::{default_filter, init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or tracing
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tarkarli", &mut std::io::stdout());
        return Ok(());
    }

    let enable_otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    init_tracing(enable_otel, default_filter(cli.verbose))
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let mut config = tarkarli_infra::config::load_config().await;

    match cli.command {
        Commands::Serve { port, host, .. } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }

            let state = AppState::from_config(&config)?;
            tracing::info!(
                provider = state.relay.upstream_name(),
                model = state.relay.model(),
                configured = state.upstream_configured,
                "chat relay ready"
            );
            let addr = format!("{}:{}", config.host, config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Tarkarli chat relay listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}/api/v1/chat")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Ask {
            message,
            location,
            json,
        } => {
            let state = AppState::from_config(&config)?;
            cli::ask::ask(&state, message, location, json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
