use anyhow::{Context, Result};
use crate::config::Config;
use crate::pairings::{filter_pairings, load_pairings};
use crate::scoring::{rank_pairings_with, ScoredPairing};
use std::path::{Path, PathBuf};

/// Resolve which bid package to read: the explicit path wins, then the
/// config's `pairings_file`.
pub fn resolve_pairings_path(explicit: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    explicit
        .or_else(|| config.pairings_file.as_ref().map(PathBuf::from))
        .context("No pairings file given. Pass --pairings or set pairings_file in the config")
}

/// Load the bid package, apply the configured filter, and rank what is left
/// by the configured preferences. The result is sorted by score descending.
pub fn load_and_rank_pairings(path: &Path, config: &Config) -> Result<Vec<ScoredPairing>> {
    let pairings = load_pairings(path)?;
    let loaded = pairings.len();

    let pairings = match &config.filter {
        Some(filter) if !filter.is_empty() => filter_pairings(pairings, filter),
        _ => pairings,
    };
    tracing::info!(loaded, kept = pairings.len(), "filtered pairings");

    let weights = config.effective_weights();
    Ok(rank_pairings_with(pairings, &config.preferences, &weights))
}
