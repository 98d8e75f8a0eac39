pub mod distance;
pub mod features;

use crate::catalog::DestinationCatalog;
use crate::domain::recommendation::{Recommendation, RecommendationSet, COLD_START_MESSAGE};
use crate::history::TripHistory;
use distance::distance;
use features::{vectorize, TripLike};
use std::collections::HashSet;

const DEFAULT_NEIGHBORS: usize = 3;
const DEFAULT_COLD_START_THRESHOLD: usize = 3;
const DEFAULT_COLD_START_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How many nearest neighbors the personalized path returns.
    pub neighbors: usize,

    /// Users with fewer trips than this get the popularity fallback.
    pub cold_start_threshold: usize,

    /// How many popular destinations the fallback returns.
    pub cold_start_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            cold_start_threshold: DEFAULT_COLD_START_THRESHOLD,
            cold_start_size: DEFAULT_COLD_START_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let mut out = Self::default();

        if let Some(n) = env_usize("RECOMMEND_NEIGHBORS") {
            out.neighbors = n;
        }

        if let Some(n) = env_usize("RECOMMEND_COLD_START_THRESHOLD") {
            out.cold_start_threshold = n;
        }

        if let Some(n) = env_usize("RECOMMEND_COLD_START_SIZE") {
            out.cold_start_size = n;
        }

        out
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.neighbors >= 1,
            "RECOMMEND_NEIGHBORS must be >= 1 (got {})",
            self.neighbors
        );
        Ok(())
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|s| s.trim().parse::<usize>().ok())
}

/// Weighted nearest-neighbor recommender over a trip/catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

struct Candidate<'a> {
    destination: &'a str,
    budget: f64,
    rating: f64,
    is_new: bool,
    distance: f64,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn recommend(
        &self,
        history: &TripHistory,
        catalog: &DestinationCatalog,
    ) -> RecommendationSet {
        if history.len() < self.config.cold_start_threshold {
            return self.cold_start(history, catalog);
        }
        self.personalized(history, catalog)
    }

    fn cold_start(
        &self,
        history: &TripHistory,
        catalog: &DestinationCatalog,
    ) -> RecommendationSet {
        let recommendations: Vec<Recommendation> = catalog
            .top_by_popularity(self.config.cold_start_size)
            .into_iter()
            .map(|d| Recommendation::popular(d.name.clone(), d.avg_budget, d.avg_rating))
            .collect();

        tracing::debug!(
            trips = history.len(),
            catalog_len = catalog.len(),
            returned = recommendations.len(),
            "cold-start recommendations"
        );

        RecommendationSet {
            recommendations,
            message: Some(COLD_START_MESSAGE.to_string()),
        }
    }

    fn personalized(
        &self,
        history: &TripHistory,
        catalog: &DestinationCatalog,
    ) -> RecommendationSet {
        let trips = history.trips();
        let Some((target, rest)) = trips.split_first() else {
            // Only reachable with a zero threshold.
            return RecommendationSet::default();
        };

        let visited: HashSet<&str> = trips.iter().map(|t| t.destination.as_str()).collect();
        let target_vec = vectorize(target);

        // Unvisited catalog entries come first so they win distance ties.
        let unvisited = catalog
            .all()
            .iter()
            .filter(|d| !visited.contains(d.name.as_str()))
            .map(|d| d as &dyn TripLike);
        let own = rest.iter().map(|t| t as &dyn TripLike);

        let mut candidates: Vec<Candidate<'_>> = unvisited
            .chain(own)
            .map(|c| Candidate {
                destination: c.destination(),
                budget: c.budget(),
                rating: c.rating(),
                is_new: !visited.contains(c.destination()),
                distance: distance(target_vec, vectorize(c)),
            })
            .collect();

        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        candidates.truncate(self.config.neighbors);

        tracing::debug!(
            trips = trips.len(),
            target = %target.destination,
            returned = candidates.len(),
            "personalized recommendations"
        );

        let recommendations = candidates
            .into_iter()
            .map(|c| {
                Recommendation::similar_to(
                    c.destination,
                    c.budget,
                    c.rating,
                    c.is_new,
                    &target.destination,
                )
            })
            .collect();

        RecommendationSet {
            recommendations,
            message: None,
        }
    }
}
