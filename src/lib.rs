pub mod analyzer;
pub mod config;
pub mod load;
pub mod output;
pub mod pairings;
pub mod scoring;

pub use analyzer::analyze_schedule;
pub use pairings::{Pairing, Preference, PreferenceKind};
pub use scoring::{rank_pairings, ScoredPairing};
