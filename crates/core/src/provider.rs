use crate::catalog::DestinationCatalog;
use crate::domain::destination::Destination;
use crate::domain::recommendation::RecommendationSet;
use crate::engine::RecommendationEngine;
use crate::history::TripHistory;
use anyhow::Result;
use uuid::Uuid;

#[async_trait::async_trait]
pub trait TripProvider: Send + Sync {
    /// The user's trips, highest rating first.
    async fn trips_for_user(&self, user_id: Uuid) -> Result<TripHistory>;
}

#[async_trait::async_trait]
pub trait DestinationProvider: Send + Sync {
    async fn all(&self) -> Result<DestinationCatalog>;

    async fn top_by_popularity(&self, limit: usize) -> Result<Vec<Destination>>;
}

#[async_trait::async_trait]
impl DestinationProvider for DestinationCatalog {
    async fn all(&self) -> Result<DestinationCatalog> {
        Ok(self.clone())
    }

    async fn top_by_popularity(&self, limit: usize) -> Result<Vec<Destination>> {
        Ok(DestinationCatalog::top_by_popularity(self, limit)
            .into_iter()
            .cloned()
            .collect())
    }
}

/// Reads one snapshot from each collaborator and ranks it.
pub async fn recommend_for_user(
    engine: &RecommendationEngine,
    trips: &dyn TripProvider,
    destinations: &dyn DestinationProvider,
    user_id: Uuid,
) -> Result<RecommendationSet> {
    let history = trips.trips_for_user(user_id).await?;
    let catalog = destinations.all().await?;

    let set = engine.recommend(&history, &catalog);
    tracing::info!(
        %user_id,
        trips = history.len(),
        returned = set.recommendations.len(),
        cold_start = set.message.is_some(),
        "recommendations computed"
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trip::Trip;
    use std::collections::HashMap;

    struct InMemoryTrips(HashMap<Uuid, Vec<Trip>>);

    #[async_trait::async_trait]
    impl TripProvider for InMemoryTrips {
        async fn trips_for_user(&self, user_id: Uuid) -> Result<TripHistory> {
            let trips = self.0.get(&user_id).cloned().unwrap_or_default();
            Ok(TripHistory::from_unordered(trips))
        }
    }

    struct FailingTrips;

    #[async_trait::async_trait]
    impl TripProvider for FailingTrips {
        async fn trips_for_user(&self, _user_id: Uuid) -> Result<TripHistory> {
            anyhow::bail!("trip store unavailable")
        }
    }

    fn catalog() -> DestinationCatalog {
        DestinationCatalog::new(vec![
            Destination::new("Bangkok", 2600.0, 4.8, 92),
            Destination::new("Vienna", 5000.0, 4.8, 87),
            Destination::new("Naples", 1800.0, 4.4, 74),
        ])
    }

    #[tokio::test]
    async fn unknown_user_gets_cold_start() {
        let trips = InMemoryTrips(HashMap::new());
        let engine = RecommendationEngine::default();
        let set = recommend_for_user(&engine, &trips, &catalog(), Uuid::new_v4())
            .await
            .unwrap();
        assert!(set.message.is_some());
        assert_eq!(set.recommendations.len(), 3);
        assert_eq!(set.recommendations[0].destination, "Bangkok");
    }

    #[tokio::test]
    async fn provider_order_is_normalized_before_ranking() {
        let user_id = Uuid::new_v4();
        let trips = InMemoryTrips(HashMap::from([(
            user_id,
            vec![
                Trip::new("Tokyo", 6000.0, 4.5),
                Trip::new("Paris", 5000.0, 4.9),
                Trip::new("Rome", 4800.0, 4.7),
            ],
        )]));
        let engine = RecommendationEngine::default();
        let set = recommend_for_user(&engine, &trips, &catalog(), user_id)
            .await
            .unwrap();
        assert!(set.message.is_none());
        assert_eq!(set.recommendations[0].destination, "Vienna");
        assert!(set.recommendations[0].reason.ends_with("trip to Paris."));
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let engine = RecommendationEngine::default();
        let res = recommend_for_user(&engine, &FailingTrips, &catalog(), Uuid::new_v4()).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn catalog_serves_popular_destinations() {
        let top = DestinationProvider::top_by_popularity(&catalog(), 2).await.unwrap();
        let names: Vec<_> = top.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Bangkok", "Vienna"]);
    }
}
