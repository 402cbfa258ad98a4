use std::io::IsTerminal;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::ScoredPairing;

/// Render a timestamp the way bid sheets show it: "Jan 05 14:30"
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format("%b %d %H:%M").to_string()
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score in compact notation (1.5k, -500, 42)
pub fn format_score(score: i64) -> String {
    let magnitude = score.unsigned_abs() as f64;
    let sign = if score < 0 { "-" } else { "" };
    if magnitude >= 1_000_000.0 {
        format!("{}{:.1}M", sign, magnitude / 1_000_000.0).replace(".0M", "M")
    } else if magnitude >= 10_000.0 {
        format!("{}{:.1}k", sign, magnitude / 1_000.0).replace(".0k", "k")
    } else {
        score.to_string()
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked pairings as a table: Index, Score, Pairing, Window, Block, Matches.
/// No headers. The matches column is truncated to the terminal width.
pub fn format_scored_table(pairings: &[ScoredPairing], use_colors: bool) -> String {
    if pairings.is_empty() {
        return "No pairings found.".to_string();
    }

    let term_width = get_terminal_width();

    let score_width = 6;
    let number_width = pairings
        .iter()
        .map(|p| p.pairing.pairing_number.chars().count())
        .max()
        .unwrap_or(0);
    let separator = "  ";

    pairings
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!(
                "{:>width$}",
                format_score(scored.score),
                width = score_width
            );
            let number_padded = format!(
                "{:<width$}",
                scored.pairing.pairing_number,
                width = number_width
            );
            let window = format!(
                "{} -> {}",
                format_timestamp(&scored.pairing.departure_time),
                format_timestamp(&scored.pairing.arrival_time)
            );
            let block = format!("{:>6} BH", scored.pairing.block_hours);

            let fixed_width = index_str.len()
                + 1
                + score_width
                + number_width
                + window.chars().count()
                + block.len()
                + separator.len() * 4;

            let matches = scored.matches.join("; ");
            let matches = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_text(&matches, width - fixed_width)
                }
                Some(_) => truncate_text(&matches, 20),
                None => matches,
            };

            if use_colors {
                let score_colored = if scored.score < 0 {
                    score_padded.red().bold().to_string()
                } else {
                    score_padded.green().bold().to_string()
                };
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_colored,
                    separator,
                    number_padded.cyan(),
                    separator,
                    window,
                    separator,
                    block.yellow(),
                    separator,
                    matches.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str,
                    score_padded,
                    separator,
                    number_padded,
                    separator,
                    window,
                    separator,
                    block,
                    separator,
                    matches
                )
                .trim_end()
                .to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked pairings as tab-separated values for scripting
/// Columns: score, pairing, departure, arrival, block hours, matches (no headers, no colors)
pub fn format_tsv(pairings: &[ScoredPairing]) -> String {
    if pairings.is_empty() {
        return String::new();
    }

    pairings
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                scored.score,
                scored.pairing.pairing_number,
                scored.pairing.departure_time.format("%Y-%m-%dT%H:%M"),
                scored.pairing.arrival_time.format("%Y-%m-%dT%H:%M"),
                scored.pairing.block_hours,
                scored.matches.join("; ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON array of ranked pairings
pub fn format_json(pairings: &[ScoredPairing]) -> Result<String> {
    serde_json::to_string_pretty(pairings).context("Failed to serialize ranked pairings")
}

/// Format a single pairing with its score breakdown (for verbose mode)
pub fn format_pairing_detail(scored: &ScoredPairing, use_colors: bool) -> String {
    let pairing = &scored.pairing;
    let mut lines = Vec::new();

    let header = format!("Pairing {}", pairing.pairing_number);
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }
    lines.push(format!(
        "  Window: {} -> {} ({} days)",
        format_timestamp(&pairing.departure_time),
        format_timestamp(&pairing.arrival_time),
        pairing.duration
    ));
    lines.push(format!(
        "  Block: {} ({:.1} hrs), {} layovers",
        pairing.block_hours,
        pairing.block_hours_decimal,
        pairing.layovers.len()
    ));
    if !pairing.details.is_empty() {
        lines.push(format!("  Route: {}", pairing.details));
    }
    for contribution in &scored.breakdown {
        lines.push(format!(
            "  {:>+5}  {}: {}",
            contribution.delta,
            contribution.kind.label(),
            contribution.note
        ));
    }
    lines.push(format!("  Score: {}", scored.score));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairings::types::{Pairing, PreferenceKind};
    use crate::scoring::Contribution;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn sample_scored(number: &str, score: i64) -> ScoredPairing {
        ScoredPairing {
            pairing: Pairing {
                pairing_number: number.to_string(),
                departure_time: at("2024-01-05 14:30"),
                arrival_time: at("2024-01-08 09:15"),
                duration: 4.0,
                layovers: vec![],
                block_hours: "12:30".to_string(),
                block_hours_decimal: 12.5,
                details: "JFK-CDG-JFK".to_string(),
            },
            score,
            matches: vec!["Route includes CDG".to_string()],
            breakdown: vec![Contribution {
                kind: PreferenceKind::Route,
                delta: 30,
                note: "Route includes CDG".to_string(),
            }],
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&at("2024-01-05 14:30")), "Jan 05 14:30");
        assert_eq!(format_timestamp(&at("2024-12-25 03:05")), "Dec 25 03:05");
    }

    #[test]
    fn test_format_score_small() {
        assert_eq!(format_score(30), "30");
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(-500), "-500");
    }

    #[test]
    fn test_format_score_large() {
        assert_eq!(format_score(15_000), "15k");
        assert_eq!(format_score(12_500), "12.5k");
        assert_eq!(format_score(-2_300_000), "-2.3M");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Short", 20), "Short");
        assert_eq!(truncate_text("This is a very long match", 15), "This is a ve...");
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_scored_table_empty() {
        assert_eq!(format_scored_table(&[], false), "No pairings found.");
    }

    #[test]
    fn test_format_scored_table_rows() {
        let rows = vec![sample_scored("A1", 45), sample_scored("B22", -455)];
        let result = format_scored_table(&rows, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("45"));
        assert!(lines[0].contains("A1 "));
        assert!(lines[0].contains("Jan 05 14:30 -> Jan 08 09:15"));
        assert!(lines[0].contains("12:30 BH"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("-455"));
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_tsv_single() {
        let result = format_tsv(&[sample_scored("A1", 45)]);
        assert_eq!(
            result,
            "45\tA1\t2024-01-05T14:30\t2024-01-08T09:15\t12:30\tRoute includes CDG"
        );
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&[sample_scored("A1", 45)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["pairingNumber"], "A1");
        assert_eq!(value[0]["score"], 45);
    }

    #[test]
    fn test_format_pairing_detail() {
        let result = format_pairing_detail(&sample_scored("A1", 30), false);
        assert!(result.starts_with("Pairing A1"));
        assert!(result.contains("Window: Jan 05 14:30 -> Jan 08 09:15 (4 days)"));
        assert!(result.contains("Block: 12:30 (12.5 hrs), 0 layovers"));
        assert!(result.contains("Route: JFK-CDG-JFK"));
        assert!(result.contains("  +30  Route: Route includes CDG"));
        assert!(result.ends_with("Score: 30"));
    }
}
