use crate::domain::destination::Destination;
use crate::domain::trip::Trip;

/// Spending capacity dominates the match; rating is the secondary signal.
pub const BUDGET_WEIGHT: f64 = 2.0;
pub const RATING_WEIGHT: f64 = 1.0;
const RATING_SCALE: f64 = 5.0;

/// Anything with a destination name, a budget and a rating.
pub trait TripLike {
    fn destination(&self) -> &str;
    fn budget(&self) -> f64;
    fn rating(&self) -> f64;
}

impl TripLike for Trip {
    fn destination(&self) -> &str {
        &self.destination
    }

    fn budget(&self) -> f64 {
        self.budget
    }

    fn rating(&self) -> f64 {
        self.rating
    }
}

impl TripLike for Destination {
    fn destination(&self) -> &str {
        &self.name
    }

    fn budget(&self) -> f64 {
        self.avg_budget
    }

    fn rating(&self) -> f64 {
        self.avg_rating
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub budget: f64,
    pub rating: f64,
}

impl FeatureVector {
    pub fn new(budget: f64, rating: f64) -> Self {
        Self { budget, rating }
    }
}

pub fn vectorize<T: TripLike + ?Sized>(record: &T) -> FeatureVector {
    let budget = record.budget();
    let rating = record.rating();
    // Inputs are validated upstream; anything else is a caller bug.
    debug_assert!(
        budget.is_finite() && budget >= 0.0,
        "budget must be non-negative (got {budget})"
    );
    debug_assert!(
        (0.0..=RATING_SCALE).contains(&rating),
        "rating must be within 0..=5 (got {rating})"
    );

    FeatureVector {
        budget: budget.ln_1p() * BUDGET_WEIGHT,
        rating: rating / RATING_SCALE * RATING_WEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn vectorizes_paris_trip() {
        let v = vectorize(&Trip::new("Paris", 5000.0, 4.9));
        assert!(approx(v.budget, 17.034), "budget component {}", v.budget);
        assert!(approx(v.rating, 0.98), "rating component {}", v.rating);
    }

    #[test]
    fn zero_budget_is_a_valid_component() {
        let v = vectorize(&Trip::new("Home", 0.0, 0.0));
        assert_eq!(v, FeatureVector::new(0.0, 0.0));
    }

    #[test]
    fn monotonic_in_budget_and_rating() {
        let budgets = [0.0, 1.0, 50.0, 900.0, 5000.0, 85_000.0];
        for pair in budgets.windows(2) {
            let lo = vectorize(&Trip::new("X", pair[0], 3.0));
            let hi = vectorize(&Trip::new("X", pair[1], 3.0));
            assert!(hi.budget > lo.budget);
            assert_eq!(hi.rating, lo.rating);
        }

        let ratings = [0.0, 0.5, 2.5, 4.9, 5.0];
        for pair in ratings.windows(2) {
            let lo = vectorize(&Trip::new("X", 1200.0, pair[0]));
            let hi = vectorize(&Trip::new("X", 1200.0, pair[1]));
            assert!(hi.rating > lo.rating);
            assert_eq!(hi.budget, lo.budget);
        }
    }

    #[test]
    fn destinations_use_their_averages() {
        let d = Destination::new("Bangkok", 2600.0, 4.8, 92);
        assert_eq!(vectorize(&d), vectorize(&Trip::new("Bangkok", 2600.0, 4.8)));
    }
}
