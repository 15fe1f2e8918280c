//! kvsync - Main Entry Point
//!
//! Usage:
//!     kvsync --store Todos create '{"title":"a"}'
//!     kvsync --store Todos list
//!     kvsync --db app.db --store Todos --max-bytes 5242880 update '{"id":"1","done":true}'

use clap::Parser;
use kvsync_cli::{logging, Args, CliConfig, Session};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = CliConfig::from_args(&args);

    logging::init_with_filter(&config.log_level);
    info!("kvsync {} on {:?}", env!("CARGO_PKG_VERSION"), config.backend);

    let session = Session::open(&config)?;
    let output = session.run(&args.command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
