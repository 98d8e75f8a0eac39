use crate::domain::trip::TripRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const FAVORITE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationCount {
    pub destination: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripStats {
    pub trips_by_month: BTreeMap<String, usize>,
    pub favorite_destinations: Vec<DestinationCount>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpendingSummary {
    pub total: f64,
    pub average: f64,
}

pub fn trip_stats(trips: &[TripRecord]) -> TripStats {
    let mut trips_by_month = BTreeMap::new();
    for trip in trips {
        let month = trip.start_date.format("%Y-%m").to_string();
        *trips_by_month.entry(month).or_insert(0) += 1;
    }

    TripStats {
        trips_by_month,
        favorite_destinations: favorite_destinations(trips, FAVORITE_LIMIT),
    }
}

/// Most visited destinations; ties keep first-seen order.
fn favorite_destinations(trips: &[TripRecord], limit: usize) -> Vec<DestinationCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<DestinationCount> = Vec::new();
    for trip in trips {
        match index.get(trip.destination.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(trip.destination.as_str(), counts.len());
                counts.push(DestinationCount {
                    destination: trip.destination.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

pub fn spending_summary(trips: &[TripRecord]) -> SpendingSummary {
    let total: f64 = trips.iter().map(|t| t.budget).sum();
    let average = if trips.is_empty() {
        0.0
    } else {
        total / trips.len() as f64
    };
    SpendingSummary { total, average }
}
