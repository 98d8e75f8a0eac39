use crate::catalog::seed::SeedDestination;
use crate::catalog::DestinationCatalog;
use crate::domain::destination::Destination;
use anyhow::Context;

/// Loads the whole catalog in insertion order.
pub async fn load_catalog(pool: &sqlx::PgPool) -> anyhow::Result<DestinationCatalog> {
    let rows = sqlx::query_as::<_, (String, f64, f64, i32)>(
        "SELECT name, avg_budget, avg_rating, popularity \
         FROM destinations \
         ORDER BY id ASC",
    )
    .persistent(false)
    .fetch_all(pool)
    .await
    .context("select destinations failed")?;

    let mut out = Vec::with_capacity(rows.len());
    for (name, avg_budget, avg_rating, popularity) in rows {
        let destination = Destination::new(name, avg_budget, avg_rating, popularity);
        destination.validate()?;
        out.push(destination);
    }

    Ok(DestinationCatalog::new(out))
}

pub async fn count(pool: &sqlx::PgPool) -> anyhow::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM destinations")
        .persistent(false)
        .fetch_one(pool)
        .await
        .context("count destinations failed")
}

/// Inserts the seed rows, skipping names that already exist.
pub async fn seed_destinations(
    pool: &sqlx::PgPool,
    seeds: &[SeedDestination],
) -> anyhow::Result<u64> {
    anyhow::ensure!(!seeds.is_empty(), "seeds must be non-empty");
    for seed in seeds {
        seed.to_destination().validate()?;
    }

    let mut tx = pool.begin().await.context("begin transaction failed")?;

    let mut qb = sqlx::QueryBuilder::new(
        "INSERT INTO destinations (name, country, avg_budget, avg_rating, popularity, description) ",
    );
    qb.push_values(seeds, |mut b, seed| {
        b.push_bind(seed.name)
            .push_bind(seed.country)
            .push_bind(seed.avg_budget)
            .push_bind(seed.avg_rating)
            .push_bind(seed.popularity)
            .push_bind(seed.description);
    });
    qb.push(" ON CONFLICT (name) DO NOTHING");

    let res = qb
        .build()
        .persistent(false)
        .execute(&mut *tx)
        .await
        .context("insert destinations failed")?;

    tx.commit().await.context("commit transaction failed")?;
    Ok(res.rows_affected())
}
