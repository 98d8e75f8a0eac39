use crate::engine::features::FeatureVector;

/// Plain Euclidean distance; weights are already applied by the vectorizer.
pub fn distance(a: FeatureVector, b: FeatureVector) -> f64 {
    (a.budget - b.budget).hypot(a.rating - b.rating)
}
