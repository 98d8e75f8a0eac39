use anyhow::Context;
use chrono::NaiveDate;
use triplog_core::domain::trip::NewTrip;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid demo date {y}-{m}-{d}"))
}

/// Enough history to take the personalized path.
pub fn demo_trips() -> anyhow::Result<Vec<NewTrip>> {
    let raw = [
        ("Paris", date(2024, 4, 12)?, date(2024, 4, 19)?, 5000.0, 4.9),
        ("Rome", date(2024, 9, 3)?, date(2024, 9, 10)?, 4800.0, 4.7),
        ("Tokyo", date(2025, 3, 22)?, date(2025, 4, 2)?, 6000.0, 4.5),
    ];

    raw.into_iter()
        .map(|(destination, start_date, end_date, budget, rating)| {
            NewTrip {
                destination: destination.to_string(),
                start_date,
                end_date,
                budget,
                rating,
            }
            .validate()
        })
        .collect()
}

/// Inserts the demo trips unless the user already has history.
pub async fn seed_demo_trips(pool: &sqlx::PgPool, user_id: Uuid) -> anyhow::Result<u64> {
    let trips = demo_trips()?;

    let mut tx = pool.begin().await.context("begin transaction failed")?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trips WHERE user_id = $1")
        .persistent(false)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .context("count trips failed")?;
    if existing > 0 {
        tracing::info!(%user_id, existing, "user already has trips; skipping demo seed");
        return Ok(0);
    }

    let mut inserted: u64 = 0;
    for trip in &trips {
        let res = sqlx::query(
            "INSERT INTO trips (id, user_id, destination, start_date, end_date, budget, rating) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .persistent(false)
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&trip.destination)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(trip.budget)
        .bind(trip.rating)
        .execute(&mut *tx)
        .await
        .context("insert demo trip failed")?;

        inserted += res.rows_affected();
    }

    tx.commit().await.context("commit transaction failed")?;
    Ok(inserted)
}
