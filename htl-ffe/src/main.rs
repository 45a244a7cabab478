//! ffe, short for femto front-end
//!
//! A minimal server for static resources from one or more directories.
//! Files with the `.htl` extension are served as rendered HTML.
//!
//! Usage:
//!   ffe --dirs static:overrides --index /index.htl
//!   ffe --dev --port localhost:8080
//!
//! Logging is controlled by the `LOG` environment variable (default `info`).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use htl_static::{handlers_from_dirs, router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// This environment variable is used to control logs.
const LOG_ENV_VAR: &str = "LOG";

#[derive(Parser)]
#[command(name = "ffe", version, about = "Serve static resources, rendering .htl files as HTML")]
struct Args {
    /// Port, and maybe hostname, to listen to
    #[arg(long, default_value = ":8000")]
    port: String,

    /// Dev mode: reload and re-render every file on each request
    #[arg(long)]
    dev: bool,

    /// Colon-separated directories containing static resources such as htl,
    /// javascript, and css files. Latter directories win when there are
    /// duplicate files.
    #[arg(long, default_value = "static", value_delimiter = ':')]
    dirs: Vec<PathBuf>,

    /// Default file, also served at `/`
    #[arg(long, default_value = "/index.htl")]
    index: String,
}

/// A bare `:PORT` listens on all interfaces.
fn listen_address(port: &str) -> String {
    if port.starts_with(':') {
        format!("0.0.0.0{port}")
    } else {
        port.to_string()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var(LOG_ENV_VAR)
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    let handlers =
        handlers_from_dirs(&args.dirs, args.dev).context("failed to load static resources")?;
    let app = router(handlers, &args.index).layer(TraceLayer::new_for_http());

    let address = listen_address(&args.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, dev = args.dev, "listening");

    axum::serve(listener, app)
        .await
        .context("error running HTTP server")?;

    Ok(())
}
