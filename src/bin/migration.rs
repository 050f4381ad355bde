use anyhow::Context;
use clap::{Parser, Subcommand};
use migrations::{Migrator, MigratorTrait};
use tracing::info;

use inventory_api::{config, db};

/// Applies or reverts the schema history of the inventory database
#[derive(Debug, Parser)]
#[command(name = "migration", version)]
struct Cli {
    /// Overrides the configured database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending migrations (default)
    Up {
        /// Apply at most this many
        #[arg(short, long)]
        num: Option<u32>,
    },
    /// Revert applied migrations, newest first
    Down {
        /// How many to revert
        #[arg(default_value_t = 1)]
        num: u32,
    },
    /// List applied and pending migrations
    Status,
    /// Drop every table and re-apply the full history
    Fresh,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    config::init_tracing("info", false);

    let database_url = match cli.database_url {
        Some(url) => url,
        None => {
            config::load_config()
                .context("no --database-url given and the configuration did not load")?
                .database_url
        }
    };

    let pool = db::establish_connection(&database_url).await?;

    match cli.command.unwrap_or(Command::Up { num: None }) {
        Command::Up { num } => {
            Migrator::up(&pool, num).await?;
            info!("Migrations applied");
        }
        Command::Down { num } => {
            Migrator::down(&pool, Some(num)).await?;
            info!(reverted = num, "Migrations reverted");
        }
        Command::Status => {
            for migration in Migrator::get_applied_migrations(&pool).await? {
                println!("applied  {}", migration.name());
            }
            for migration in Migrator::get_pending_migrations(&pool).await? {
                println!("pending  {}", migration.name());
            }
        }
        Command::Fresh => {
            Migrator::fresh(&pool).await?;
            info!("Schema rebuilt from scratch");
        }
    }

    Ok(())
}
