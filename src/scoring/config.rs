use serde::{Deserialize, Serialize};

/// Points awarded (or taken) by each preference kind.
///
/// The table is plain data owned by whoever ranks; the engine only borrows
/// it. Any field left out of the YAML keeps its default value.
///
/// Example YAML:
/// ```yaml
/// weights:
///   route: 50
///   red_eye: -80
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreWeights {
    /// Multiplier applied to block hours for STRATEGY_MONEY
    pub money_multiplier: f64,

    /// ROUTE match bonus
    pub route: i64,

    /// TIME_WINDOW match bonus
    pub time_window: i64,

    /// MAX_DURATION match bonus
    pub max_duration: i64,

    /// MAX_LEGS_PER_DAY match bonus
    pub max_legs: i64,

    /// AVOID_RED_EYE penalty
    pub red_eye: i64,

    /// AVOID_AIRPORT penalty
    pub avoid_airport: i64,

    /// DAY_OF_WEEK_OFF penalty when the weekday is worked
    pub weekday_conflict: i64,

    /// DAY_OF_WEEK_OFF bonus when the weekday stays free
    pub weekday_free: i64,

    /// SPECIFIC_DATE_OFF penalty; large enough to act as a dealbreaker
    pub date_conflict: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            money_multiplier: 2.0,
            route: 30,
            time_window: 20,
            max_duration: 15,
            max_legs: 15,
            red_eye: -50,
            avoid_airport: -100,
            weekday_conflict: -40,
            weekday_free: 10,
            date_conflict: -500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ScoreWeights::default();

        assert_eq!(weights.money_multiplier, 2.0);
        assert_eq!(weights.route, 30);
        assert_eq!(weights.date_conflict, -500);
        assert_eq!(weights.weekday_free, 10);
    }

    #[test]
    fn test_weights_serde_roundtrip() {
        let weights = ScoreWeights::default();
        let yaml = serde_saphyr::to_string(&weights).unwrap();
        let parsed: ScoreWeights = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(weights, parsed);
    }

    #[test]
    fn test_partial_weights_parse() {
        let yaml = r#"
route: 50
red_eye: -80
"#;
        let weights: ScoreWeights = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(weights.route, 50);
        assert_eq!(weights.red_eye, -80);
        // Untouched fields keep their defaults
        assert_eq!(weights.avoid_airport, -100);
        assert_eq!(weights.money_multiplier, 2.0);
    }

    #[test]
    fn test_empty_weights_parse() {
        let weights: ScoreWeights = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(weights, ScoreWeights::default());
    }

    #[test]
    fn test_unknown_weight_rejected() {
        let yaml = "bogus: 3\n";
        let result: Result<ScoreWeights, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
