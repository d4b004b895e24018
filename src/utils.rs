// Small browser helpers and date display formatting
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

// The backend is loose about date shapes: full timestamps for stored rows,
// bare dates from the form inputs, and a few legacy "May 15, 2023" strings.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDate::parse_from_str(raw, "%b %d, %Y").ok()
}

// Table display; unparseable input is shown as-is rather than dropped.
pub fn format_date(raw: &str) -> String {
    match parse_wire_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

// Value for an <input type="date">, which only accepts YYYY-MM-DD.
pub fn date_input_value(raw: &str) -> String {
    parse_wire_date(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timestamps_and_bare_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(parse_wire_date("2025-06-01T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_wire_date("2025-06-01T12:30:00"), Some(expected));
        assert_eq!(parse_wire_date("2025-06-01"), Some(expected));
    }

    #[test]
    fn parses_legacy_display_dates() {
        assert_eq!(
            parse_wire_date("May 15, 2023"),
            NaiveDate::from_ymd_opt(2023, 5, 15)
        );
    }

    #[test]
    fn formats_for_tables() {
        assert_eq!(format_date("2025-06-01T00:00:00.000Z"), "Jun 1, 2025");
        assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("TBD"), "TBD");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn date_input_value_strips_time_component() {
        assert_eq!(date_input_value("2025-10-15T00:00:00.000Z"), "2025-10-15");
        assert_eq!(date_input_value("2025-10-15"), "2025-10-15");
        assert_eq!(date_input_value("not a date"), "");
    }
}
