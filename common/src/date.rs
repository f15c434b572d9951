//! # Booking Dates
//!
//! Dates are entered and displayed as `dd-mm-yyyy` (e.g. `05-06-2031`).

use chrono::{NaiveDate, ParseResult};

/// `strftime` pattern used for both input and output.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `dd-mm-yyyy` string into a calendar date.
///
/// Surrounding whitespace is ignored.
pub fn parse(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Renders a date as `dd-mm-yyyy`.
pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_month_year() {
        let expected = NaiveDate::from_ymd_opt(2031, 6, 5).unwrap();

        assert_eq!(parse("05-06-2031"), Ok(expected));
        assert_eq!(parse("  05-06-2031\n"), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        // Wrong separator
        assert!(parse("05/06/2031").is_err());

        // Year first
        assert!(parse("2031-06-05").is_err());

        // Impossible day
        assert!(parse("31-02-2031").is_err());

        // Empty
        assert!(parse("").is_err());
    }

    #[test]
    fn test_format_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2031, 1, 2).unwrap();
        assert_eq!(format(date), "02-01-2031");
    }

    #[test]
    fn test_format_then_parse_is_identity() {
        let date = NaiveDate::from_ymd_opt(2029, 12, 31).unwrap();
        assert_eq!(parse(&format(date)), Ok(date));
    }
}
