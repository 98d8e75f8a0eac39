use serde::{Deserialize, Serialize};

pub const POPULAR_REASON: &str = "Popular destination worldwide";
pub const COLD_START_MESSAGE: &str = "Add trips to get personalized recommendations.";

const NEW_MARKER: &str = "✨ NEW - ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub destination: String,
    pub budget: f64,
    pub rating: f64,
    pub is_new: bool,
    pub reason: String,
}

impl Recommendation {
    pub fn popular(destination: impl Into<String>, budget: f64, rating: f64) -> Self {
        Self {
            destination: destination.into(),
            budget,
            rating,
            is_new: true,
            reason: POPULAR_REASON.to_string(),
        }
    }

    /// A neighbor of the user's top-rated trip to `target`.
    pub fn similar_to(
        destination: impl Into<String>,
        budget: f64,
        rating: f64,
        is_new: bool,
        target: &str,
    ) -> Self {
        Self {
            destination: destination.into(),
            budget,
            rating,
            is_new,
            reason: similarity_reason(budget, rating, target, is_new),
        }
    }
}

fn similarity_reason(budget: f64, rating: f64, target: &str, is_new: bool) -> String {
    let marker = if is_new { NEW_MARKER } else { "" };
    format!(
        "{marker}Similar budget (${budget}) and rating ({rating}) to your top-rated trip to {target}."
    )
}

/// Engine output, serialized as the `/recommendations` body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_marker_only_decorates_reason() {
        let fresh = Recommendation::similar_to("Vienna", 5000.0, 4.8, true, "Paris");
        let seen = Recommendation::similar_to("Vienna", 5000.0, 4.8, false, "Paris");
        assert!(fresh.reason.starts_with(NEW_MARKER));
        assert_eq!(fresh.reason.trim_start_matches(NEW_MARKER), seen.reason);
        assert_eq!(
            seen.reason,
            "Similar budget ($5000) and rating (4.8) to your top-rated trip to Paris."
        );
    }

    #[test]
    fn reason_keeps_fractional_amounts_and_drops_trailing_zero() {
        let r = Recommendation::similar_to("Hoi An", 1234.5, 4.25, false, "Hanoi");
        assert_eq!(
            r.reason,
            "Similar budget ($1234.5) and rating (4.25) to your top-rated trip to Hanoi."
        );
        let whole = Recommendation::similar_to("Hoi An", 900.0, 4.0, false, "Hanoi");
        assert!(whole.reason.contains("($900)"), "{}", whole.reason);
        assert!(whole.reason.contains("(4)"), "{}", whole.reason);
    }

    #[test]
    fn message_is_omitted_when_absent() {
        let set = RecommendationSet {
            recommendations: vec![Recommendation::popular("Paris", 5500.0, 4.9)],
            message: None,
        };
        let v = serde_json::to_value(&set).unwrap();
        assert!(v.get("message").is_none());
        assert_eq!(v["recommendations"][0]["is_new"], true);
        assert_eq!(v["recommendations"][0]["reason"], POPULAR_REASON);
    }
}
