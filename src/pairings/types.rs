use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A multi-day crew trip as published in the bid package.
///
/// Times are local wall-clock times; the ranking rules (red-eye arrival,
/// departure window, days off) are all about the crew member's local day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub pairing_number: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub duration: f64,              // Days spanned, may be fractional
    #[serde(default)]
    pub layovers: Vec<Layover>,
    pub block_hours: String,        // Display form, e.g. "12:30"
    pub block_hours_decimal: f64,
    #[serde(default)]
    pub details: String,            // Route / airport description
}

impl Pairing {
    /// Every calendar day touched by the trip, departure and arrival day included.
    pub fn flight_days(&self) -> Vec<NaiveDate> {
        let first = self.departure_time.date();
        let last = self.arrival_time.date();
        first.iter_days().take_while(|day| *day <= last).collect()
    }

    /// Flight legs implied by the layovers (one more leg than rest stops).
    pub fn leg_count(&self) -> usize {
        self.layovers.len() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layover {
    pub airport: String,
    #[serde(default)]
    pub rest_hours: Option<f64>,
}

/// A single scoring rule picked by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    #[serde(rename = "type")]
    pub kind: PreferenceKind,
    #[serde(default)]
    pub value: String,
}

impl Preference {
    pub fn new(kind: PreferenceKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceKind {
    StrategyMoney,
    SpecificDateOff,
    DayOfWeekOff,
    AvoidRedEye,
    MaxLegsPerDay,
    Route,
    TimeWindow,
    MaxDuration,
    AvoidAirport,
    /// Any tag this build does not know; carried through but never scored.
    #[serde(other)]
    Other,
}

impl PreferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceKind::StrategyMoney => "Maximize earnings",
            PreferenceKind::SpecificDateOff => "Date off",
            PreferenceKind::DayOfWeekOff => "Weekday off",
            PreferenceKind::AvoidRedEye => "Avoid red-eye",
            PreferenceKind::MaxLegsPerDay => "Max legs/day",
            PreferenceKind::Route => "Route",
            PreferenceKind::TimeWindow => "Departure window",
            PreferenceKind::MaxDuration => "Max duration",
            PreferenceKind::AvoidAirport => "Avoid airport",
            PreferenceKind::Other => "Unknown",
        }
    }
}
