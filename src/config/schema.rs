use serde::{Deserialize, Serialize};

use crate::pairings::{PairingFilter, Preference};
use crate::scoring::ScoreWeights;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON bid package to rank when `--pairings` isn't given
    #[serde(default)]
    pub pairings_file: Option<String>,

    #[serde(default)]
    pub preferences: Vec<Preference>,

    /// Overrides for the default weight table
    #[serde(default)]
    pub weights: Option<ScoreWeights>,

    #[serde(default)]
    pub filter: Option<PairingFilter>,
}

impl Config {
    pub fn effective_weights(&self) -> ScoreWeights {
        self.weights.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairings::PreferenceKind;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
pairings_file: bids/march.json
preferences:
  - type: STRATEGY_MONEY
  - type: DAY_OF_WEEK_OFF
    value: "6"
  - type: TIME_WINDOW
    value: "6-10"
weights:
  route: 45
filter:
  max_days: 4
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.pairings_file.as_deref(), Some("bids/march.json"));
        assert_eq!(config.preferences.len(), 3);
        assert_eq!(config.preferences[1].kind, PreferenceKind::DayOfWeekOff);
        assert_eq!(config.preferences[2].value, "6-10");

        let weights = config.effective_weights();
        assert_eq!(weights.route, 45);
        assert_eq!(weights.time_window, 20);
        assert_eq!(config.filter.unwrap().max_days, Some(4.0));
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.preferences.is_empty());
        assert!(config.filter.is_none());
        assert_eq!(config.effective_weights(), ScoreWeights::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []\n");
        assert!(result.is_err());
    }
}
