pub mod aggregator;
pub mod tolerance;
