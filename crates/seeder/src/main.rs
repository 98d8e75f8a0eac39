use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triplog_core::catalog::seed::WORLD_DESTINATIONS;
use uuid::Uuid;

mod demo;

#[derive(Debug, Parser)]
#[command(name = "triplog_seeder")]
struct Args {
    /// Validate the built-in corpus without touching the database.
    #[arg(long)]
    dry_run: bool,

    /// Also give this user three demo trips (skipped if they already have trips).
    #[arg(long)]
    demo_user: Option<Uuid>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = triplog_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if args.dry_run {
        for seed in WORLD_DESTINATIONS {
            seed.to_destination().validate()?;
        }
        let demo_len = demo::demo_trips()?.len();
        tracing::info!(
            dry_run = true,
            destinations = WORLD_DESTINATIONS.len(),
            demo_trips = demo_len,
            "seed corpus validated"
        );
        return Ok(());
    }

    let db_url = settings.require_database_url()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await
        .context("connect DATABASE_URL failed")?;

    triplog_core::storage::migrate(&pool).await?;

    if let Err(err) = run(&pool, &args).await {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "seeding failed");
        return Err(err);
    }

    Ok(())
}

async fn run(pool: &sqlx::PgPool, args: &Args) -> anyhow::Result<()> {
    let inserted =
        triplog_core::storage::destinations::seed_destinations(pool, WORLD_DESTINATIONS).await?;
    let total = triplog_core::storage::destinations::count(pool).await?;
    tracing::info!(inserted, total, "destinations seeded");

    if let Some(user_id) = args.demo_user {
        let inserted = demo::seed_demo_trips(pool, user_id).await?;
        tracing::info!(%user_id, inserted, "demo trips seeded");
    }

    Ok(())
}

fn init_sentry(settings: &triplog_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
