//! Serves the message API and the built front-end.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[clap(short, long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Directory holding the built front-end (trunk's dist output)
    #[clap(long, env = "STATIC_DIR", default_value = "frontend/dist")]
    static_dir: PathBuf,

    /// Comma-separated list of origins allowed for CORS; unset disables CORS
    #[clap(long, env = "CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = message_api::app(&args.static_dir, &args.cors_origins)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    info!("serving static assets from {}", args.static_dir.display());
    axum::serve(listener, app).await?;

    Ok(())
}
