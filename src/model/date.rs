//! ISO date helpers.

use chrono::NaiveDate;

/// Format accepted for event dates and date-range inputs.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).ok()
}

/// Human-readable date, e.g. `Fri, Jan 10, 2025`.
///
/// Returns the input unchanged when it is not an ISO date.
pub fn format_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(date) => date.format("%a, %b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_date() {
        insta::assert_snapshot!(format_date("2025-01-10"), @"Fri, Jan 10, 2025");
    }

    #[test]
    fn day_has_no_padding() {
        assert_eq!(format_date("2025-02-05"), "Wed, Feb 5, 2025");
    }

    #[test]
    fn unparsable_date_is_returned_verbatim() {
        assert_eq!(format_date("next Tuesday"), "next Tuesday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn parse_rejects_other_layouts() {
        assert!(parse_iso_date("10/01/2025").is_none());
        assert!(parse_iso_date("2025-13-01").is_none());
        assert_eq!(
            parse_iso_date(" 2025-01-10 "),
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
    }
}
