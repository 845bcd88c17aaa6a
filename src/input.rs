//! Parsing of raw form text into typed field values.
//!
//! Every parser returns one of the parse errors ([Error::InvalidAmount],
//! [Error::InvalidDate], [Error::InvalidBillingDay]) so a caller can reject
//! the whole form before writing anything.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The format used for dates in forms, the database and JSON: `YYYY-MM-DD`.
pub const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// The smallest allowed day of the month for billing.
pub const MIN_BILLING_DAY: u8 = 1;
/// The largest allowed day of the month for billing.
pub const MAX_BILLING_DAY: u8 = 31;

/// Parse an amount of money, e.g. "12.50".
///
/// Surrounding whitespace is ignored. Values that are not finite numbers
/// (e.g. "NaN", "inf") are rejected.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

/// Parse a calendar date in the format `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Parse a day of the month from 1 to 31.
///
/// The day is not checked against any particular month, so 31 is accepted
/// even though some months are shorter.
pub fn parse_billing_day(text: &str) -> Result<u8, Error> {
    match text.trim().parse::<u8>() {
        Ok(day) if (MIN_BILLING_DAY..=MAX_BILLING_DAY).contains(&day) => Ok(day),
        _ => Err(Error::InvalidBillingDay(text.to_owned())),
    }
}

/// Treat blank optional text as missing.
pub fn optional_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{format_date, optional_text, parse_amount, parse_billing_day, parse_date};

    #[test]
    fn parses_amounts() {
        assert_eq!(parse_amount("12.50"), Ok(12.5));
        assert_eq!(parse_amount(" 30 "), Ok(30.0));
        assert_eq!(parse_amount("-4.2"), Ok(-4.2));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for text in ["abc", "", "12,50", "NaN", "inf", "1e400"] {
            assert_eq!(
                parse_amount(text),
                Err(Error::InvalidAmount(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn parses_dates() {
        assert_eq!(parse_date("2024-01-05"), Ok(date!(2024 - 01 - 05)));
    }

    #[test]
    fn rejects_malformed_dates() {
        for text in ["", "2024-13-01", "2024-02-30", "05/01/2024", "yesterday"] {
            assert_eq!(
                parse_date(text),
                Err(Error::InvalidDate(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn billing_day_accepts_whole_month_range() {
        assert_eq!(parse_billing_day("1"), Ok(1));
        assert_eq!(parse_billing_day("15"), Ok(15));
        assert_eq!(parse_billing_day("31"), Ok(31));
    }

    #[test]
    fn billing_day_rejects_out_of_range() {
        for text in ["0", "32", "-1", "1.5", "abc", ""] {
            assert_eq!(
                parse_billing_day(text),
                Err(Error::InvalidBillingDay(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn blank_optional_text_is_none() {
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some("")), None);
        assert_eq!(optional_text(Some("  \t")), None);
        assert_eq!(optional_text(Some(" lunch ")), Some("lunch".to_owned()));
    }

    #[test]
    fn formats_dates_with_zero_padding() {
        assert_eq!(format_date(date!(2024 - 01 - 05)), "2024-01-05");
    }
}
