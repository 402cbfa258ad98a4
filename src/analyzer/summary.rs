use super::error::AnalyzeError;
use crate::output::format_timestamp;
use crate::scoring::ScoredPairing;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

pub const EMPTY_LIST_MESSAGE: &str = "There are no pairings in the current filtered list. Try widening your filters (dates, aircraft, or duration) to get more results.";

pub const CLOSE_SCORES_NOTE: &str = "Note: Scores are close across pairings — consider tightening preferences or adding a strategy (e.g., Maximize Earnings) to make clearer distinctions.";

pub const NO_EUROPE_MESSAGE: &str = "I couldn't find obvious European trips in the filtered list.";

/// Airport/city codes that mark a trip as European.
const EUROPE_MARKERS: &str = "LON|CDG|FRA|MAD|BCN|AMS|ZRH|MXP|FCO|VIE";

fn europe_markers() -> &'static Regex {
    static EUROPE_RE: OnceLock<Regex> = OnceLock::new();
    EUROPE_RE.get_or_init(|| {
        RegexBuilder::new(EUROPE_MARKERS)
            .case_insensitive(true)
            .build()
            .expect("European marker pattern is a fixed alternation")
    })
}

const TOP_PICKS: usize = 5;
const MATCHES_SHOWN: usize = 3;
const EUROPE_LISTED: usize = 5;

/// Spread below which scores are considered indistinguishable.
const CLOSE_SCORE_SPREAD: i64 = 20;

/// Keyword cues picked out of a question. Cues are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCues {
    pub wants_longest: bool,
    pub wants_europe: bool,
    pub wants_max_block: bool,
}

impl QueryCues {
    pub fn detect(query: &str) -> Self {
        let q = query.to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|w| q.contains(w));
        Self {
            wants_longest: has_any(&["longest", "long layover", "long layovers"]),
            wants_europe: has_any(&["europe", "europ"]),
            wants_max_block: has_any(&["block", "earn", "money", "hours"]),
        }
    }
}

/// Build the text answer for `query` over an already ranked list.
///
/// Paragraph order is fixed: longest layovers, Europe, block hours, then the
/// top picks, which are always present.
pub fn summarize(pairings: &[ScoredPairing], query: &str) -> Result<String, AnalyzeError> {
    if pairings.is_empty() {
        return Ok(EMPTY_LIST_MESSAGE.to_string());
    }

    let cues = QueryCues::detect(query);
    tracing::debug!(?cues, pairings = pairings.len(), "summarizing schedule");

    // Own ordering: the input is expected sorted but isn't trusted to be
    let mut ranked: Vec<&ScoredPairing> = pairings.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let mut lines = vec![
        format!(
            "I've reviewed {} filtered pairings and here are highlights based on your query: \"{}\".",
            pairings.len(),
            query
        ),
        String::new(),
    ];

    if cues.wants_longest {
        if let Some(pick) = most_layovers(pairings) {
            lines.push(format!(
                "Longest layovers (approx): Pairing {} • {} layovers — {}",
                pick.pairing.pairing_number,
                pick.pairing.layovers.len(),
                time_window(pick)?
            ));
            lines.push(String::new());
        }
    }

    if cues.wants_europe {
        let markers = europe_markers();
        let european: Vec<String> = pairings
            .iter()
            .filter(|p| markers.is_match(&p.pairing.details))
            .take(EUROPE_LISTED)
            .map(|p| format!("Pairing {}", p.pairing.pairing_number))
            .collect();
        if european.is_empty() {
            lines.push(NO_EUROPE_MESSAGE.to_string());
        } else {
            lines.push(format!(
                "Trips mentioning common European airports: {}.",
                european.join(", ")
            ));
        }
        lines.push(String::new());
    }

    if cues.wants_max_block {
        if let Some(pick) = most_block_hours(pairings)? {
            lines.push(format!(
                "Highest block hours: Pairing {} • {} BH ({:.1} hrs) — Score: {}",
                pick.pairing.pairing_number,
                pick.pairing.block_hours,
                pick.pairing.block_hours_decimal,
                pick.score
            ));
            lines.push(String::new());
        }
    }

    lines.push("Top picks (by computed score):".to_string());
    for (idx, p) in ranked.iter().take(TOP_PICKS).enumerate() {
        let mut line = format!(
            "{}. Pairing {} • Score: {} • {} • {} BH",
            idx + 1,
            p.pairing.pairing_number,
            p.score,
            time_window(p)?,
            p.pairing.block_hours
        );
        if !p.matches.is_empty() {
            let shown: Vec<&str> = p
                .matches
                .iter()
                .take(MATCHES_SHOWN)
                .map(String::as_str)
                .collect();
            line.push_str(&format!(" • Matches: {}", shown.join("; ")));
        }
        lines.push(line);
    }

    let max = pairings.iter().map(|p| p.score).max();
    let min = pairings.iter().map(|p| p.score).min();
    if let (Some(max), Some(min)) = (max, min) {
        // Extreme scores can overflow the spread; such a spread is never close
        let close = max
            .checked_sub(min)
            .is_some_and(|spread| spread < CLOSE_SCORE_SPREAD);
        if close {
            lines.push(String::new());
            lines.push(CLOSE_SCORES_NOTE.to_string());
        }
    }

    Ok(lines.join("\n"))
}

/// "Jan 05 14:30 → Jan 08 09:15"
fn time_window(p: &ScoredPairing) -> Result<String, AnalyzeError> {
    let pairing = &p.pairing;
    let departure = format_timestamp(&pairing.departure_time);
    let arrival = format_timestamp(&pairing.arrival_time);
    if pairing.arrival_time < pairing.departure_time {
        return Err(AnalyzeError::InvalidWindow {
            pairing: pairing.pairing_number.clone(),
            departure,
            arrival,
        });
    }
    Ok(format!("{} → {}", departure, arrival))
}

/// First pairing with the highest layover count.
fn most_layovers(pairings: &[ScoredPairing]) -> Option<&ScoredPairing> {
    let mut best: Option<&ScoredPairing> = None;
    for p in pairings {
        if best.map_or(true, |b| p.pairing.layovers.len() > b.pairing.layovers.len()) {
            best = Some(p);
        }
    }
    best
}

/// First pairing with the highest decimal block hours.
fn most_block_hours(pairings: &[ScoredPairing]) -> Result<Option<&ScoredPairing>, AnalyzeError> {
    let mut best: Option<&ScoredPairing> = None;
    for p in pairings {
        if !p.pairing.block_hours_decimal.is_finite() {
            return Err(AnalyzeError::NonFiniteBlockHours(p.pairing.pairing_number.clone()));
        }
        if best.map_or(true, |b| p.pairing.block_hours_decimal > b.pairing.block_hours_decimal) {
            best = Some(p);
        }
    }
    Ok(best)
}
