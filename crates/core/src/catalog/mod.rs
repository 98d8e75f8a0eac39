pub mod seed;

use crate::domain::destination::Destination;
use std::sync::Arc;

/// Read-only destination corpus shared across requests.
#[derive(Debug, Clone, Default)]
pub struct DestinationCatalog {
    entries: Arc<[Destination]>,
}

impl DestinationCatalog {
    pub fn new(entries: Vec<Destination>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn all(&self) -> &[Destination] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest popularity first; equal popularity keeps catalog order.
    pub fn top_by_popularity(&self, limit: usize) -> Vec<&Destination> {
        let mut ranked: Vec<&Destination> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        ranked.truncate(limit);
        ranked
    }
}

impl FromIterator<Destination> for DestinationCatalog {
    fn from_iter<T: IntoIterator<Item = Destination>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
