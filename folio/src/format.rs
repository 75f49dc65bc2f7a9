use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use strum_macros::{Display, EnumString};

/// Shown when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Locale conventions for short dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DateStyle {
    /// 1/15/2024
    #[default]
    #[strum(to_string = "en-US", serialize = "en_US", serialize = "us")]
    EnUs,
    /// 15/01/2024
    #[strum(to_string = "en-GB", serialize = "en_GB", serialize = "gb")]
    EnGb,
    /// 15.01.2024
    #[strum(to_string = "de-DE", serialize = "de_DE", serialize = "de")]
    De,
    /// 2024-01-15
    #[strum(to_string = "iso")]
    Iso,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::EnUs => "%-m/%-d/%Y",
            DateStyle::EnGb => "%d/%m/%Y",
            DateStyle::De => "%d.%m.%Y",
            DateStyle::Iso => "%Y-%m-%d",
        }
    }

    pub fn format_date(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }

    /// Format a server timestamp as a short date, in UTC.
    pub fn format_timestamp(self, raw: &str) -> String {
        match parse_timestamp(raw) {
            Some(date) => self.format_date(date),
            None => INVALID_DATE.to_string(),
        }
    }
}

/// Accepts RFC 3339, naive ISO-8601 date-times (`T` or space separated),
/// bare dates and epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .or_else(|| parse_epoch_millis(raw))
}

fn parse_epoch_millis(raw: &str) -> Option<NaiveDate> {
    let millis: f64 = raw.parse().ok()?;
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_styles() {
        let raw = "2024-01-15T00:00:00Z";
        assert_eq!(DateStyle::EnUs.format_timestamp(raw), "1/15/2024");
        assert_eq!(DateStyle::EnGb.format_timestamp(raw), "15/01/2024");
        assert_eq!(DateStyle::De.format_timestamp(raw), "15.01.2024");
        assert_eq!(DateStyle::Iso.format_timestamp(raw), "2024-01-15");
    }

    #[test]
    fn test_offsets_normalize_to_utc() {
        // 23:30 at -05:00 is already the next day in UTC
        assert_eq!(
            DateStyle::Iso.format_timestamp("2024-01-15T23:30:00-05:00"),
            "2024-01-16"
        );
    }

    #[test]
    fn test_naive_timestamps() {
        assert_eq!(
            DateStyle::EnUs.format_timestamp("2024-03-05T10:20:30.123456"),
            "3/5/2024"
        );
        assert_eq!(
            DateStyle::EnUs.format_timestamp("2024-03-05 10:20:30"),
            "3/5/2024"
        );
        assert_eq!(DateStyle::EnUs.format_timestamp("2024-03-05"), "3/5/2024");
    }

    #[test]
    fn test_epoch_millis() {
        assert_eq!(DateStyle::EnUs.format_timestamp("1705276800000"), "1/15/2024");
        assert_eq!(DateStyle::Iso.format_timestamp("1705276800000.5"), "2024-01-15");
        assert_eq!(DateStyle::Iso.format_timestamp("0"), "1970-01-01");
        assert_eq!(DateStyle::EnUs.format_timestamp("NaN"), INVALID_DATE);
    }

    #[test]
    fn test_invalid_timestamps() {
        assert_eq!(DateStyle::EnUs.format_timestamp(""), INVALID_DATE);
        assert_eq!(DateStyle::EnUs.format_timestamp("last tuesday"), INVALID_DATE);
    }

    #[test]
    fn test_parse_style_names() {
        assert_eq!(DateStyle::from_str("en-US").unwrap(), DateStyle::EnUs);
        assert_eq!(DateStyle::from_str("de").unwrap(), DateStyle::De);
        assert_eq!(DateStyle::from_str("ISO").unwrap(), DateStyle::Iso);
        assert_eq!(DateStyle::EnGb.to_string(), "en-GB");
        assert!(DateStyle::from_str("fr-FR").is_err());
    }
}
