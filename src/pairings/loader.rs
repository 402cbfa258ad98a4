use super::types::Pairing;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a bid package: a JSON array of pairings.
///
/// Pairings whose arrival precedes their departure are kept (the ranking
/// rules still apply to them) but logged, since every day-based rule will
/// see an empty set of flight days.
pub fn load_pairings(path: &Path) -> Result<Vec<Pairing>> {
    if !path.exists() {
        anyhow::bail!("Pairings file not found at {}", path.display());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open pairings file at {}", path.display()))?;

    let pairings: Vec<Pairing> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse pairings: invalid JSON in {}", path.display()))?;

    for pairing in &pairings {
        if pairing.arrival_time < pairing.departure_time {
            tracing::warn!(
                pairing = %pairing.pairing_number,
                "arrival precedes departure"
            );
        }
    }

    tracing::debug!(count = pairings.len(), path = %path.display(), "loaded pairings");
    Ok(pairings)
}
