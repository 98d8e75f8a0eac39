use crate::domain::trip::{NewTrip, Trip, TripRecord};
use crate::history::TripHistory;
use crate::provider::TripProvider;
use anyhow::Context;
use chrono::NaiveDate;
use uuid::Uuid;

type TripRow = (Uuid, String, NaiveDate, NaiveDate, f64, f64);

fn into_record((id, destination, start_date, end_date, budget, rating): TripRow) -> TripRecord {
    TripRecord {
        id,
        destination,
        start_date,
        end_date,
        budget,
        rating,
    }
}

#[derive(Debug, Clone)]
pub struct PgTripStore {
    pool: sqlx::PgPool,
}

impl PgTripStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Stores an already validated trip and returns its id.
    pub async fn insert(&self, user_id: Uuid, trip: &NewTrip) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO trips (id, user_id, destination, start_date, end_date, budget, rating) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .persistent(false)
        .bind(id)
        .bind(user_id)
        .bind(&trip.destination)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(trip.budget)
        .bind(trip.rating)
        .execute(&self.pool)
        .await
        .context("insert trips failed")?;

        tracing::debug!(%user_id, trip_id = %id, destination = %trip.destination, "trip stored");
        Ok(id)
    }

    /// Most recent trips first.
    pub async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<TripRecord>> {
        let rows = sqlx::query_as::<_, TripRow>(
            "SELECT id, destination, start_date, end_date, budget, rating \
             FROM trips \
             WHERE user_id = $1 \
             ORDER BY start_date DESC, created_at DESC",
        )
        .persistent(false)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("select trips failed (user_id={user_id})"))?;

        Ok(rows.into_iter().map(into_record).collect())
    }

    pub async fn get_for_user(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
    ) -> anyhow::Result<Option<TripRecord>> {
        let row = sqlx::query_as::<_, TripRow>(
            "SELECT id, destination, start_date, end_date, budget, rating \
             FROM trips \
             WHERE id = $1 AND user_id = $2 \
             LIMIT 1",
        )
        .persistent(false)
        .bind(trip_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("select trip failed (trip_id={trip_id})"))?;

        Ok(row.map(into_record))
    }
}

#[async_trait::async_trait]
impl TripProvider for PgTripStore {
    async fn trips_for_user(&self, user_id: Uuid) -> anyhow::Result<TripHistory> {
        let rows = sqlx::query_as::<_, (String, f64, f64)>(
            "SELECT destination, budget, rating \
             FROM trips \
             WHERE user_id = $1 \
             ORDER BY rating DESC, created_at ASC",
        )
        .persistent(false)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("select trip history failed (user_id={user_id})"))?;

        let trips = rows
            .into_iter()
            .map(|(destination, budget, rating)| Trip::new(destination, budget, rating))
            .collect();
        Ok(TripHistory::from_rating_desc(trips))
    }
}
