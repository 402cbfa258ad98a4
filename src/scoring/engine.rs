use super::config::ScoreWeights;
use super::factors::{lenient_date, lenient_int, HourWindow};
use crate::pairings::types::{Pairing, Preference, PreferenceKind};
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Last arrival hour (inclusive) that still counts as a red-eye.
const RED_EYE_LAST_HOUR: u32 = 7;

/// Block hours above which a trip is flagged as high earning.
const HIGH_EARNINGS_BLOCK_HOURS: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub kind: PreferenceKind,
    pub delta: i64,
    pub note: String, // e.g. "Route includes CDG", "12.5 block hrs x2"
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: i64,
    pub matches: Vec<String>,
    pub breakdown: Vec<Contribution>,
}

/// A pairing enriched with its score. Serializes as the pairing's own
/// fields plus `score`, `matches` and (when non-empty) `breakdown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPairing {
    #[serde(flatten)]
    pub pairing: Pairing,
    pub score: i64,
    pub matches: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<Contribution>,
}

/// Rank with the default weight table.
pub fn rank_pairings(pairings: Vec<Pairing>, preferences: &[Preference]) -> Vec<ScoredPairing> {
    rank_pairings_with(pairings, preferences, &ScoreWeights::default())
}

/// Score every pairing and sort by score descending.
///
/// The output always has one entry per input pairing. The sort is stable,
/// so pairings with equal scores keep their input order.
pub fn rank_pairings_with(
    pairings: Vec<Pairing>,
    preferences: &[Preference],
    weights: &ScoreWeights,
) -> Vec<ScoredPairing> {
    let mut scored: Vec<ScoredPairing> = pairings
        .into_iter()
        .map(|pairing| {
            let result = score_pairing(&pairing, preferences, weights);
            tracing::trace!(
                pairing = %pairing.pairing_number,
                score = result.score,
                "scored pairing"
            );
            ScoredPairing {
                pairing,
                score: result.score,
                matches: result.matches,
                breakdown: result.breakdown,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        pairings = scored.len(),
        preferences = preferences.len(),
        "ranked pairings"
    );
    scored
}

pub fn score_pairing(
    pairing: &Pairing,
    preferences: &[Preference],
    weights: &ScoreWeights,
) -> ScoreResult {
    let mut score: i64 = 0;
    let mut matches = Vec::new();
    let mut breakdown = Vec::new();

    let flight_days = pairing.flight_days();

    for pref in preferences {
        let mut apply = |delta: i64, note: String, matched: bool| {
            score = score.saturating_add(delta);
            if matched {
                matches.push(note.clone());
            }
            if delta != 0 {
                breakdown.push(Contribution {
                    kind: pref.kind,
                    delta,
                    note,
                });
            }
        };

        match pref.kind {
            PreferenceKind::StrategyMoney => {
                // Float-to-int casts saturate
                let points =
                    (pairing.block_hours_decimal * weights.money_multiplier).round() as i64;
                if pairing.block_hours_decimal > HIGH_EARNINGS_BLOCK_HOURS {
                    apply(points, "High Earnings ($$$)".to_string(), true);
                } else {
                    let note = format!(
                        "{} block hrs x{}",
                        pairing.block_hours_decimal, weights.money_multiplier
                    );
                    apply(points, note, false);
                }
            }

            PreferenceKind::SpecificDateOff => {
                if let Some(date_off) = lenient_date(&pref.value) {
                    if flight_days.contains(&date_off) {
                        let note =
                            format!("Conflicts with {} (Violated)", date_off.format("%b %d"));
                        apply(weights.date_conflict, note, true);
                    }
                }
            }

            PreferenceKind::DayOfWeekOff => {
                // 0 = Sunday .. 6 = Saturday; an unreadable index never conflicts
                let day_off = lenient_int(&pref.value);
                let conflict = day_off.is_some_and(|d| {
                    flight_days
                        .iter()
                        .any(|day| i64::from(day.weekday().num_days_from_sunday()) == d)
                });
                if conflict {
                    apply(
                        weights.weekday_conflict,
                        "Works on a requested Day Off (Violated)".to_string(),
                        true,
                    );
                } else {
                    apply(
                        weights.weekday_free,
                        "Keeps preferred weekday free".to_string(),
                        true,
                    );
                }
            }

            PreferenceKind::AvoidRedEye => {
                let arrival_hour = pairing.arrival_time.hour();
                if arrival_hour <= RED_EYE_LAST_HOUR {
                    apply(
                        weights.red_eye,
                        format!("Red Eye Arrival ({}:00)", arrival_hour),
                        true,
                    );
                }
            }

            PreferenceKind::MaxLegsPerDay => {
                let legs_per_day = pairing.leg_count() as f64 / pairing.duration;
                if let Some(max_legs) = lenient_int(&pref.value) {
                    if legs_per_day <= max_legs as f64 {
                        let note = format!("Low workload (~{} legs/day)", legs_per_day.ceil());
                        apply(weights.max_legs, note, true);
                    }
                }
            }

            PreferenceKind::Route => {
                if contains_ignore_case(&pairing.details, &pref.value) {
                    apply(weights.route, format!("Route includes {}", pref.value), true);
                }
            }

            PreferenceKind::TimeWindow => {
                if let Some(window) = HourWindow::parse_lenient(&pref.value) {
                    if window.contains(pairing.departure_time.hour()) {
                        let note = format!(
                            "Departure between {}:00-{}:00",
                            window.start, window.end
                        );
                        apply(weights.time_window, note, true);
                    }
                }
            }

            PreferenceKind::MaxDuration => {
                if let Some(max_days) = lenient_int(&pref.value) {
                    if pairing.duration <= max_days as f64 {
                        let note = format!("Duration under {} days", max_days);
                        apply(weights.max_duration, note, true);
                    }
                }
            }

            PreferenceKind::AvoidAirport => {
                if contains_ignore_case(&pairing.details, &pref.value) {
                    apply(
                        weights.avoid_airport,
                        format!("Avoids {} (Violated)", pref.value),
                        true,
                    );
                }
            }

            PreferenceKind::Other => {}
        }
    }

    ScoreResult {
        score,
        matches: dedup_preserving_order(matches),
        breakdown,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_uppercase().contains(&needle.to_uppercase())
}

fn dedup_preserving_order(matches: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}
