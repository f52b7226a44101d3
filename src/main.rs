use anyhow::Result;
use clap::Parser;
use pageview_analyzer::config;
use tracing_subscriber::EnvFilter;

/// Wikipedia pageview analyzer web server.
#[derive(Parser)]
#[command(name = "pageview-analyzer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Accept connections from other hosts, overrides `SHARE`
    #[arg(long)]
    share: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    config.share |= cli.share;

    init_tracing(&config.log_level, &config.log_format);
    config.validate()?;
    config.print_summary();

    pageview_analyzer::server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
