use anyhow::Result;
use clap::Parser;

use dblp_paper_list::cli::Cli;
use dblp_paper_list::dblp::DblpClient;
use dblp_paper_list::stdio::{self, PaperListServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr only; stdout carries the protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle list-tools flag
    if cli.list_tools {
        println!("Available tools:");
        for tool in stdio::available_tools() {
            println!("  - {tool}");
        }
        return Ok(());
    }

    let config = cli.dblp_config();
    log::info!("Using DBLP endpoint {}", config.api_url);
    let client = DblpClient::new(config)?;

    // Create cancellation token for graceful shutdown
    let shutdown_token = tokio_util::sync::CancellationToken::new();

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_token.cancel();
    });

    PaperListServer::new(client)
        .serve_stdio(shutdown_token)
        .await?;

    Ok(())
}

/// Resolves on ctrl-c, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Cannot listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::warn!("Cannot listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => log::info!("Received ctrl-c"),
        () = terminate => log::info!("Received SIGTERM"),
    }
}
