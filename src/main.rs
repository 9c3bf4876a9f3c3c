//! Pitwall - a terminal dashboard for Formula 1 race analytics.

use pitwall::catalog::QueryCatalog;
use pitwall::cli::Cli;
use pitwall::config::Config;
use pitwall::db::SqliteGateway;
use pitwall::error::Result;
use pitwall::{headless, logging, tui};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // File logging in TUI mode keeps the terminal clean; headless mode
    // logs to stderr so stdout stays machine-readable.
    if cli.is_headless() {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    if let Err(e) = run(cli).await {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let catalog = QueryCatalog::builtin();

    if cli.list {
        for name in catalog.list_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let db_path = cli.resolve_database(&config);
    info!("Using database: {}", db_path.display());
    let gateway = SqliteGateway::new(&db_path);

    if let Some(name) = &cli.query {
        let format = cli.parse_output_format()?;
        let output = headless::run_query(&gateway, &catalog, name, format).await?;
        println!("{output}");
        return Ok(());
    }

    tui::run(&gateway, &catalog, &db_path.display().to_string()).await
}
