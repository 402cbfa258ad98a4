use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

/// Read a leading integer the forgiving way bid-package tools do: leading
/// whitespace and an optional sign are allowed, and anything after the first
/// run of digits is ignored ("3 days" -> 3). No digits at all -> `None`.
pub fn lenient_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Strict counterpart of [`lenient_int`]: the whole (trimmed) value must be an integer.
pub fn strict_int(s: &str) -> Result<i64> {
    s.trim()
        .parse()
        .with_context(|| format!("'{}' is not a whole number", s))
}

/// Accepts "YYYY-MM-DD" or any ISO datetime starting with one.
pub fn lenient_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let head = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Inclusive departure-hour window written as "START-END", e.g. "6-10".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    pub start: i64,
    pub end: i64,
}

impl HourWindow {
    pub fn parse(s: &str) -> Result<Self> {
        let Some((start, end)) = s.trim().split_once('-') else {
            bail!("expected START-END hours, got '{}'", s)
        };
        let start = strict_int(start)?;
        let end = strict_int(end)?;
        if !(0..=23).contains(&start) || !(0..=23).contains(&end) {
            bail!("hours must be between 0 and 23: '{}'", s)
        }
        if start > end {
            bail!("window start is after its end: '{}'", s)
        }
        Ok(HourWindow { start, end })
    }

    /// Forgiving parse used while scoring. Only the first two '-' separated
    /// parts are read; if either has no leading integer there is no window.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        let mut parts = s.split('-');
        let start = lenient_int(parts.next()?)?;
        let end = lenient_int(parts.next()?)?;
        Some(HourWindow { start, end })
    }

    pub fn contains(&self, hour: u32) -> bool {
        let hour = i64::from(hour);
        hour >= self.start && hour <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_int_plain() {
        assert_eq!(lenient_int("4"), Some(4));
        assert_eq!(lenient_int("  12"), Some(12));
    }

    #[test]
    fn test_lenient_int_trailing_text() {
        assert_eq!(lenient_int("3 days"), Some(3));
        assert_eq!(lenient_int("2.9"), Some(2));
    }

    #[test]
    fn test_lenient_int_signs() {
        assert_eq!(lenient_int("-5"), Some(-5));
        assert_eq!(lenient_int("+7"), Some(7));
    }

    #[test]
    fn test_lenient_int_garbage() {
        assert_eq!(lenient_int("abc"), None);
        assert_eq!(lenient_int(""), None);
        assert_eq!(lenient_int("-"), None);
    }

    #[test]
    fn test_strict_int() {
        assert_eq!(strict_int(" 3 ").unwrap(), 3);
        assert!(strict_int("3 days").is_err());
    }

    #[test]
    fn test_lenient_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(lenient_date("2024-01-05"), Some(expected));
        assert_eq!(lenient_date("2024-01-05T00:00:00"), Some(expected));
        assert_eq!(lenient_date("Jan 5"), None);
        assert_eq!(lenient_date(""), None);
    }

    #[test]
    fn test_hour_window_parse() {
        let window = HourWindow::parse("6-10").unwrap();
        assert_eq!(window, HourWindow { start: 6, end: 10 });
        assert!(window.contains(6));
        assert!(window.contains(10));
        assert!(!window.contains(11));
        assert!(!window.contains(5));
    }

    #[test]
    fn test_hour_window_parse_rejects() {
        assert!(HourWindow::parse("6").is_err());
        assert!(HourWindow::parse("a-b").is_err());
        assert!(HourWindow::parse("6-25").is_err());
        assert!(HourWindow::parse("10-6").is_err());
    }

    #[test]
    fn test_hour_window_lenient() {
        assert_eq!(
            HourWindow::parse_lenient("06-10h"),
            Some(HourWindow { start: 6, end: 10 })
        );
        assert_eq!(HourWindow::parse_lenient("6"), None);
        assert_eq!(HourWindow::parse_lenient("x-10"), None);
    }
}
