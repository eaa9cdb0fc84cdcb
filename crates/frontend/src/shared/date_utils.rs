//! Date display helpers. Server dates are ISO strings.

use chrono::{DateTime, NaiveDate};

/// `2025-06-01T09:30:00Z` → `01.06.2025 09:30`. Unparseable input is returned as is.
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str.trim()) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// `2025-06-01` or a full timestamp → `01.06.2025`
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.trim().split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+03:00"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("2024-02-30"), "2024-02-30");
        assert_eq!(format_date(""), "");
    }
}
