use clap::Parser;
use std::{io, path::PathBuf};
use tracing_subscriber::EnvFilter;

use projects::{InputReader, Menu, ProjectDb, ProjectService};

#[derive(Parser)]
#[command(name = "projects")]
#[command(about = "Create, list, select, update and delete projects from an interactive menu")]
struct Cli {
    /// SQLite database file holding the project table (created if missing)
    #[arg(long, value_name = "PATH", env = "PROJECTS_DB_FILE", default_value = "projects.db")]
    db_file: PathBuf,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();
    init_logging(args.verbose);

    let db = ProjectDb::new(&args.db_file).await?;
    let stdin = io::stdin();
    let input = InputReader::new(stdin.lock(), io::stdout());
    let mut menu = Menu::new(ProjectService::new(db), input);

    let result = menu.run().await;
    let (service, _, _) = menu.into_parts();
    service.into_repository().close().await?;
    Ok(result?)
}
