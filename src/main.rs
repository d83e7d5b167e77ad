use clap::Parser;
use neonshot::server::{router, AppState};
use neonshot::RenderOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Neon sign preview renderer over headless Chrome
#[derive(Debug, Parser)]
#[command(name = "neonshot", about = "Serve neon sign previews rendered via headless Chrome")]
struct Cli {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: String,

    /// Path to a Chrome/Chromium executable (auto-detected when omitted)
    #[arg(long, value_name = "PATH")]
    chrome: Option<PathBuf>,

    /// Settle delay in milliseconds applied after readiness before capture
    #[arg(long, default_value_t = 1000)]
    settle_ms: u64,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let base = RenderOptions {
        settle_delay_ms: cli.settle_ms,
        chrome_path: cli.chrome,
        ..Default::default()
    };

    let app = router(AppState::new(base));
    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
