use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Turns a loosely-typed deadline value into a calendar day, or `None` when
/// the value is absent or unparseable. Parse failure is not an error: a
/// malformed deadline must never keep the rest of a list from deriving.
///
/// Pure `YYYY-MM-DD` strings are parsed directly as calendar days, never
/// through a timestamp type, so the resulting day cannot drift by one
/// depending on the host timezone.
pub fn normalize_deadline(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(day) = parse_calendar_day(raw) {
        return Some(day);
    }

    // Datetime forms keep the date portion as written in the stamp itself.
    if let Some((date_part, _)) = raw.split_once('T')
        && let Some(day) = parse_calendar_day(date_part)
    {
        return Some(day);
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(stamp.date());
    }

    // Last-resort generic form.
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()
}

fn parse_calendar_day(value: &str) -> Option<NaiveDate> {
    if !is_strict_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

// Exactly YYYY-MM-DD; chrono alone would also accept YYYY-M-D.
fn is_strict_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| matches!(index, 4 | 7) || byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn absent_and_blank_values_have_no_deadline() {
        assert_eq!(normalize_deadline(None), None);
        assert_eq!(normalize_deadline(Some("")), None);
        assert_eq!(normalize_deadline(Some("   ")), None);
    }

    #[test]
    fn pure_date_parses_as_written() {
        assert_eq!(normalize_deadline(Some("2024-03-10")), Some(day(2024, 3, 10)));
    }

    #[test]
    fn datetime_keeps_the_date_portion_before_the_separator() {
        assert_eq!(
            normalize_deadline(Some("2024-03-10T23:30:00Z")),
            Some(day(2024, 3, 10))
        );
        assert_eq!(
            normalize_deadline(Some("2024-03-10T00:15:00-06:00")),
            Some(day(2024, 3, 10))
        );
    }

    #[test]
    fn space_separated_datetime_falls_through_to_general_parse() {
        assert_eq!(
            normalize_deadline(Some("2024-03-10 08:00:00")),
            Some(day(2024, 3, 10))
        );
    }

    #[test]
    fn slash_form_is_accepted_as_last_resort() {
        assert_eq!(normalize_deadline(Some("10/03/2024")), Some(day(2024, 3, 10)));
    }

    #[test]
    fn garbage_and_impossible_dates_degrade_to_none() {
        assert_eq!(normalize_deadline(Some("next tuesday")), None);
        assert_eq!(normalize_deadline(Some("2024-13-40")), None);
        assert_eq!(normalize_deadline(Some("2024-3-1")), None);
    }

    #[test]
    fn normalization_is_stable_for_repeated_calls() {
        let first = normalize_deadline(Some("2024-03-10"));
        let second = normalize_deadline(Some("2024-03-10"));
        assert_eq!(first, second);
    }
}
