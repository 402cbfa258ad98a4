use super::types::Pairing;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hard filters applied before ranking. Every criterion is optional; a
/// pairing must pass all configured ones.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PairingFilter {
    /// Earliest allowed departure date
    #[serde(default)]
    pub from: Option<NaiveDate>,

    /// Latest allowed arrival date
    #[serde(default)]
    pub to: Option<NaiveDate>,

    /// Longest trip to keep, in days
    #[serde(default)]
    pub max_days: Option<f64>,

    /// Minimum block hours to keep
    #[serde(default)]
    pub min_block_hours: Option<f64>,
}

impl PairingFilter {
    pub fn is_empty(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.max_days.is_none()
            && self.min_block_hours.is_none()
    }

    pub fn accepts(&self, pairing: &Pairing) -> bool {
        if let Some(from) = self.from {
            if pairing.departure_time.date() < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if pairing.arrival_time.date() > to {
                return false;
            }
        }
        if let Some(max_days) = self.max_days {
            if pairing.duration > max_days {
                return false;
            }
        }
        if let Some(min_block) = self.min_block_hours {
            if pairing.block_hours_decimal < min_block {
                return false;
            }
        }
        true
    }
}

/// Keep only pairings accepted by the filter, preserving input order.
pub fn filter_pairings(pairings: Vec<Pairing>, filter: &PairingFilter) -> Vec<Pairing> {
    pairings
        .into_iter()
        .filter(|pairing| filter.accepts(pairing))
        .collect()
}
