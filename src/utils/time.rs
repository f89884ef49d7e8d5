use chrono::{Datelike, Duration, NaiveDate};

/// This is the standard form of note identifiers in devlog. A stem that does
/// not parse marks its record as date-less.
pub fn parse_note_stem(stem: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// Returns the Monday of the week the date falls in.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{monday_of, parse_note_stem};

    #[test]
    fn test_parse_note_stem() {
        assert_eq!(
            parse_note_stem("2024-06-03"),
            NaiveDate::from_ymd_opt(2024, 6, 3)
        );
        assert_eq!(parse_note_stem("notes"), None);
        assert_eq!(parse_note_stem("2024-13-01"), None);
    }

    #[test]
    fn test_monday_of() {
        // 2024-06-05 is a Wednesday.
        let wednesday = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(monday_of(wednesday), monday);
        assert_eq!(monday_of(monday), monday);
    }
}
