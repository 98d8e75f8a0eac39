pub mod destination;
pub mod recommendation;
pub mod stats;
pub mod trip;
