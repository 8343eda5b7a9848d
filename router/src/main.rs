use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;

use router::{app, AppState, Delay};

#[derive(Parser, Debug)]
struct Args {
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    #[clap(short, long, env = "PORT", default_value = "5000")]
    port: u16,
    /// Seconds `/multiply` and `/chatstate` wait before replying
    #[clap(short, long, env = "DELAY_SECS", default_value_t = Delay::DEFAULT_SECONDS)]
    delay_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!("args: {:?}", &args);

    let state = AppState::new(Delay::from_secs(args.delay_secs));

    let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server shutdown");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {:?}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl-C received, draining in-flight requests");
}
