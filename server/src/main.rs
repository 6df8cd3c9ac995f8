use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};

mod config;
mod http;

use config::read_config;
use http::svc::HttpService;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/portfolio/config.toml")]
    config: String,

    /// log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(level).init();

    info!("portfolio server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!(
        doc_root = %config.server.doc_root.display(),
        content = %config.server.content.display(),
        "starting http service"
    );

    let http_svc = HttpService::create(config);
    http_svc.serve().await
}
