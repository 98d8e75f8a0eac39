use crate::domain::trip::Trip;

/// One user's trips, highest rating first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripHistory {
    trips: Vec<Trip>,
}

impl TripHistory {
    /// Wraps trips the provider already ordered by rating descending.
    pub fn from_rating_desc(trips: Vec<Trip>) -> Self {
        debug_assert!(
            trips.windows(2).all(|w| w[0].rating >= w[1].rating),
            "trip history must be sorted by rating descending"
        );
        Self { trips }
    }

    /// Orders trips by rating descending; equal ratings keep their input order.
    pub fn from_unordered(mut trips: Vec<Trip>) -> Self {
        trips.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Self { trips }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_input_is_sorted_stably() {
        let history = TripHistory::from_unordered(vec![
            Trip::new("Oslo", 100.0, 3.0),
            Trip::new("Rome", 100.0, 4.7),
            Trip::new("Lima", 100.0, 3.0),
            Trip::new("Paris", 100.0, 4.9),
        ]);
        let names: Vec<_> = history.trips().iter().map(|t| t.destination.as_str()).collect();
        assert_eq!(names, ["Paris", "Rome", "Oslo", "Lima"]);
    }

    #[test]
    fn empty_history_is_empty() {
        let history = TripHistory::default();
        assert!(history.is_empty());
        assert!(history.trips().is_empty());
    }
}
