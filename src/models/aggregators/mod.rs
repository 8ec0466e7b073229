pub mod score_accumulator;

pub use score_accumulator::ScoreAccumulator;
