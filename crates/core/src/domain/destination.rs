use crate::domain::trip::{MAX_RATING, MIN_RATING};
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// A catalog entry with aggregate budget/rating and a popularity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub avg_budget: f64,
    pub avg_rating: f64,
    pub popularity: i32,
}

impl Destination {
    pub fn new(
        name: impl Into<String>,
        avg_budget: f64,
        avg_rating: f64,
        popularity: i32,
    ) -> Self {
        Self {
            name: name.into(),
            avg_budget,
            avg_rating,
            popularity,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.name.trim().is_empty(),
            "destination name must be non-empty"
        );
        ensure!(
            self.avg_budget.is_finite() && self.avg_budget >= 0.0,
            "avg_budget must be non-negative for {} (got {})",
            self.name,
            self.avg_budget
        );
        ensure!(
            (MIN_RATING..=MAX_RATING).contains(&self.avg_rating),
            "avg_rating must be between 0 and 5 for {} (got {})",
            self.name,
            self.avg_rating
        );
        ensure!(
            self.popularity >= 0,
            "popularity must be non-negative for {} (got {})",
            self.name,
            self.popularity
        );
        Ok(())
    }
}
