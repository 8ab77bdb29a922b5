use anyhow::{Result, bail};
use clap::Parser;
use parity::{config::Settings, server::start_server, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "(Optional) Sets the config file path.", required = false)]
    pub config: Option<String>,

    #[arg(long, help = "(Optional) Overrides the listening port.", required = false)]
    pub port: Option<u16>,

    #[arg(
        long,
        help = "(Optional) Overrides the PPP ratio table path.",
        required = false
    )]
    pub ratio_table: Option<String>,

    #[arg(
        long,
        help = "(Optional) Validates configuration, ratio table and price ids, then exits.",
        required = false
    )]
    pub check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    info!("Starting");

    let mut settings = Settings::load(&args.config)?;
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(ratio_table) = args.ratio_table {
        settings.ratio_table = ratio_table;
    }

    let state = AppState::load(settings)?;

    if args.check {
        let missing = state.settings.missing_skus();
        if !missing.is_empty() {
            bail!(
                "{} discount steps have no price or coupon id configured",
                missing.len()
            );
        }
        info!(
            "Configuration OK: {} country ratios, {} workshops",
            state.ratios.len(),
            state.settings.workshops.len()
        );
        return Ok(());
    }

    start_server(state).await
}
