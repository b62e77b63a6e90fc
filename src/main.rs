use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vizbridge::{create_router, AppState, Config, Dispatcher, DispatcherConfig, TraceRenderer};

#[derive(Parser)]
#[command(name = "vizbridge")]
#[command(about = "Bridges conversational-assistant events to visual renderers")]
struct Args {
    /// Config file path, without extension (any format the config crate supports)
    #[arg(short, long, default_value = "config/vizbridge")]
    config: String,

    /// Override the bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("{} v{} starting", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let renderer = Arc::new(TraceRenderer::new());
    let dispatcher = Arc::new(Dispatcher::new(
        renderer,
        DispatcherConfig {
            spectrum_bands: cfg.visuals.spectrum_bands,
            burst_revert: Duration::from_millis(cfg.visuals.burst_revert_ms),
        },
    ));

    let app = create_router(AppState::new(dispatcher));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("listening on {} (event stream at /ws)", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
