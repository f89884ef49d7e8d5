//! Best-effort parsing of free-text duration annotations into minutes.
//! Notes are written by hand, so `2h 30m`, `2 h 30 m`, `45 min` and plain
//! nonsense all have to be survivable. Malformed tokens are skipped, they
//! never fail a build.

#[derive(Debug, Clone, Copy)]
enum Unit {
    Hours,
    Minutes,
}

impl Unit {
    fn scale(self) -> u32 {
        match self {
            Unit::Hours => 60,
            Unit::Minutes => 1,
        }
    }
}

fn unit_of(token: &str) -> Option<Unit> {
    if token.contains('h') {
        Some(Unit::Hours)
    } else if token.contains('m') {
        Some(Unit::Minutes)
    } else {
        None
    }
}

fn leading_number(token: &str) -> Option<u32> {
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Turns a duration annotation into total minutes. Absent or unusable text
/// yields 0.
pub fn parse_duration(text: Option<&str>) -> u32 {
    let Some(text) = text else {
        return 0;
    };
    let text = text.to_lowercase().replace(',', "");
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let mut total = 0u32;
    let mut index = 0;
    while index < tokens.len() {
        let token = tokens[index];
        if let Some(unit) = unit_of(token) {
            if let Some(value) = leading_number(token) {
                total += value * unit.scale();
            }
        } else if let Some(value) = leading_number(token) {
            // A bare number takes its unit from the following token, which
            // covers the split form "2 h 30 m".
            if let Some(unit) = tokens.get(index + 1).and_then(|next| unit_of(next)) {
                total += value * unit.scale();
                index += 1;
            }
        }
        index += 1;
    }
    total
}

/// Renders minutes back to the canonical annotation form. Only a left inverse
/// of [parse_duration] on its own output, this is a display formatter.
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, 0) => "0m".to_string(),
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_duration, parse_duration};

    #[test]
    fn test_parse_compact_form() {
        assert_eq!(parse_duration(Some("2h 30m")), 150);
        assert_eq!(parse_duration(Some("45m")), 45);
        assert_eq!(parse_duration(Some("3h")), 180);
    }

    #[test]
    fn test_parse_split_form() {
        assert_eq!(parse_duration(Some("2 h 30 m")), 150);
        assert_eq!(parse_duration(Some("45 m")), 45);
        assert_eq!(parse_duration(Some("90 minutes")), 90);
    }

    #[test]
    fn test_parse_absent_or_garbage() {
        assert_eq!(parse_duration(None), 0);
        assert_eq!(parse_duration(Some("")), 0);
        assert_eq!(parse_duration(Some("garbage")), 0);
    }

    #[test]
    fn test_parse_skips_malformed_tokens() {
        assert_eq!(parse_duration(Some("about 2h or so")), 120);
        assert_eq!(parse_duration(Some("x 30m")), 30);
        // A bare number with no unit after it contributes nothing.
        assert_eq!(parse_duration(Some("2 bananas")), 0);
    }

    #[test]
    fn test_parse_ignores_case_and_commas() {
        assert_eq!(parse_duration(Some("1H, 30M")), 90);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(150), "2h 30m");
    }

    #[test]
    fn test_canonical_round_trip() {
        for canonical in ["0m", "45m", "2h", "2h 30m"] {
            assert_eq!(format_duration(parse_duration(Some(canonical))), canonical);
        }
    }
}
