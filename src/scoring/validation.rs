use super::factors::{lenient_date, strict_int, HourWindow};
use crate::pairings::types::{Preference, PreferenceKind};

/// Check preference values up front.
/// Returns all validation errors at once (not just the first).
///
/// Ranking never calls this: a malformed value simply scores nothing there.
pub fn validate_preferences(preferences: &[Preference]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, pref) in preferences.iter().enumerate() {
        let field = format!("preferences[{}]", i);
        match pref.kind {
            PreferenceKind::SpecificDateOff => {
                if lenient_date(&pref.value).is_none() {
                    errors.push(format!(
                        "{}: SPECIFIC_DATE_OFF expects YYYY-MM-DD or a datetime starting with one \
                         (e.g. 2024-01-05T00:00:00), got '{}'",
                        field, pref.value
                    ));
                }
            }
            PreferenceKind::DayOfWeekOff => match strict_int(&pref.value) {
                Ok(day) if (0..=6).contains(&day) => {}
                Ok(day) => errors.push(format!(
                    "{}: DAY_OF_WEEK_OFF expects 0 (Sunday) to 6 (Saturday), got {}",
                    field, day
                )),
                Err(e) => errors.push(format!("{}: DAY_OF_WEEK_OFF invalid - {}", field, e)),
            },
            PreferenceKind::MaxLegsPerDay | PreferenceKind::MaxDuration => {
                match strict_int(&pref.value) {
                    Ok(n) if n > 0 => {}
                    Ok(n) => errors.push(format!("{}: must be positive, got {}", field, n)),
                    Err(e) => errors.push(format!("{}: invalid - {}", field, e)),
                }
            }
            PreferenceKind::TimeWindow => {
                if let Err(e) = HourWindow::parse(&pref.value) {
                    errors.push(format!("{}: TIME_WINDOW invalid - {}", field, e));
                }
            }
            PreferenceKind::Route | PreferenceKind::AvoidAirport => {
                if pref.value.trim().is_empty() {
                    errors.push(format!("{}: airport or route text is empty", field));
                }
            }
            PreferenceKind::Other => {
                errors.push(format!("{}: unknown preference type, it will be ignored", field));
            }
            PreferenceKind::StrategyMoney | PreferenceKind::AvoidRedEye => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
