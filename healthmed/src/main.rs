use clap::{Parser, Subcommand};
use healthmed::config::ServiceConfig;
use healthmed::store::doctors;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser)]
#[command(name = "healthmed", about = "HealthMed scheduling store maintenance")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply, revert or inspect schema migrations (default: up)
    Migrate {
        #[command(subcommand)]
        action: Option<MigrateAction>,
    },
    /// Inspect or remove doctors
    Doctor {
        #[command(subcommand)]
        action: DoctorAction,
    },
}

#[derive(Subcommand)]
enum MigrateAction {
    /// Apply all pending migrations
    Up,
    /// Revert applied migrations, newest first
    Down {
        /// How many to revert; all when omitted
        #[arg(long)]
        steps: Option<u32>,
    },
    /// List applied and pending migrations
    Status,
    /// Drop every table and re-apply all migrations
    Fresh,
}

#[derive(Subcommand)]
enum DoctorAction {
    /// List all doctors
    List,
    /// Delete a doctor together with its appointments and work times
    Delete {
        #[arg(long)]
        id: i32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Init structured logging (respects RUST_LOG; defaults to info)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env()?;

    tracing::info!(database = %config.redacted_database_url(), "connecting to database");
    let db = Database::connect(&config.database_url).await?;

    match cli.command {
        None => migrate(&db, MigrateAction::Up).await?,
        Some(Commands::Migrate { action }) => {
            migrate(&db, action.unwrap_or(MigrateAction::Up)).await?
        }
        Some(Commands::Doctor { action }) => {
            Migrator::up(&db, None).await?;
            handle_doctor_action(&db, action).await?;
        }
    }

    Ok(())
}

async fn migrate(
    db: &DatabaseConnection,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MigrateAction::Up => {
            let pending = Migrator::get_pending_migrations(db).await?.len();
            Migrator::up(db, None).await?;
            tracing::info!(applied = pending, "database up to date");
        }
        MigrateAction::Down { steps } => {
            Migrator::down(db, steps).await?;
            tracing::info!(steps = ?steps, "migrations reverted");
        }
        MigrateAction::Status => {
            for m in Migrator::get_applied_migrations(db).await? {
                tracing::info!(migration = %m.name(), "applied");
            }
            for m in Migrator::get_pending_migrations(db).await? {
                tracing::info!(migration = %m.name(), "pending");
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("dropping all tables and re-applying migrations");
            Migrator::fresh(db).await?;
        }
    }
    Ok(())
}

async fn handle_doctor_action(
    db: &DatabaseConnection,
    action: DoctorAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DoctorAction::List => {
            for d in doctors::list(db).await? {
                println!("{}\t{}\t{}\t{}", d.id, d.crm, d.name, d.email);
            }
        }
        DoctorAction::Delete { id } => {
            doctors::delete(db, id).await?;
            tracing::info!(doctor_id = id, "deleted doctor and dependent rows");
        }
    }
    Ok(())
}
