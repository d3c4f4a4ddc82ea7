/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Format a timestamp as `YYYY-MM-DD HH:MM` (UTC)
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Table cell text for an optional timestamp
pub fn format_optional(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Humanized age relative to `now`, e.g. "5 min ago"
pub fn format_age(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - *dt).num_seconds();
    match secs {
        s if s < 0 => format_datetime(dt),
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{} min ago", secs / 60),
        3_600..=86_399 => format!("{} h ago", secs / 3_600),
        _ => format!("{} d ago", secs / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, s).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&at(14, 2, 26)), "2024-03-15 14:02");
        assert_eq!(format_optional(None), "—");
    }

    #[test]
    fn test_format_age() {
        let now = at(12, 0, 0);
        assert_eq!(format_age(&at(11, 59, 30), now), "just now");
        assert_eq!(format_age(&at(11, 55, 0), now), "5 min ago");
        assert_eq!(format_age(&at(9, 0, 0), now), "3 h ago");
        assert_eq!(format_age(&at(13, 0, 0), now), "2024-03-15 13:00");
    }
}
