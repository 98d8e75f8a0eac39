use anyhow::ensure;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// The slice of a trip the recommendation engine looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub destination: String,
    pub budget: f64,
    pub rating: f64,
}

impl Trip {
    pub fn new(destination: impl Into<String>, budget: f64, rating: f64) -> Self {
        Self {
            destination: destination.into(),
            budget,
            rating,
        }
    }
}

/// A stored trip as the persistence layer returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: Uuid,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub rating: f64,
}

/// Request body for logging a new trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrip {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub rating: f64,
}

impl NewTrip {
    /// Checks the trip invariants and normalizes the destination name.
    pub fn validate(self) -> anyhow::Result<Self> {
        let destination = self.destination.trim().to_string();
        ensure!(!destination.is_empty(), "destination must be non-empty");
        ensure!(
            self.end_date >= self.start_date,
            "end date cannot be before start date ({} < {})",
            self.end_date,
            self.start_date
        );
        ensure!(
            self.budget.is_finite() && self.budget >= 0.0,
            "budget must be a non-negative number (got {})",
            self.budget
        );
        ensure!(
            (MIN_RATING..=MAX_RATING).contains(&self.rating),
            "rating must be between 0 and 5 (got {})",
            self.rating
        );

        Ok(Self {
            destination,
            ..self
        })
    }
}
