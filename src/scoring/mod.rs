pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use config::ScoreWeights;
pub use factors::HourWindow;
pub use engine::{
    rank_pairings, rank_pairings_with, score_pairing, Contribution, ScoreResult, ScoredPairing,
};
pub use validation::validate_preferences;
