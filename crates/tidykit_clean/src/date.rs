//! Date cleaning: permissive day-first parsing, `DD/MM/YYYY` output.
//!
//! A column is parsed as a whole into `Option<NaiveDate>` (None marks an
//! unparsable cell) and only then rendered, so one output layout is used
//! whatever mix of input layouts the column holds.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::conf::{C_DATE_FORMAT_OUT, N_YEAR_PIVOT_TWO_DIGIT, TUP_MONTH_NAMES};

static RE_TIME_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<date>.+?),?(?:T|\s+)\d{1,2}:\d{2}(?::\d{2}(?:[.,]\d+)?)?\s*(?:am|pm)?\s*(?:z|[+-]\d{2}:?\d{2})?$",
    )
    .expect("valid time suffix regex")
});
static RE_WEEKDAY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:mon|tue|wed|thu|fri|sat|sun)[a-z]*\.?,?\s+")
        .expect("valid weekday prefix regex")
});
static RE_NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,4})\s*[/.\-]\s*(\d{1,2})\s*[/.\-]\s*(\d{1,4})$")
        .expect("valid numeric date regex")
});
static RE_COMPACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").expect("valid compact date regex"));
static RE_DAY_MONTH_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{1,2})(?:st|nd|rd|th)?[\s/.\-]+([a-z]+)\.?,?[\s/.\-]+(\d{2,4})$")
        .expect("valid day-month-name regex")
});
static RE_MONTH_NAME_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-z]+)\.?[\s/.\-]+(\d{1,2})(?:st|nd|rd|th)?,?[\s/.\-]+(\d{2,4})$")
        .expect("valid month-name-day regex")
});

/// Parse one date permissively, preferring day-before-month when ambiguous.
///
/// Any time-of-day component is discarded. Returns `None` when nothing
/// date-like can be read.
pub fn parse_date_dayfirst(value: &str) -> Option<NaiveDate> {
    let c_value = value.trim();
    if c_value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(c_value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(c_value) {
        return Some(dt.date_naive());
    }

    let c_date = RE_TIME_SUFFIX
        .captures(c_value)
        .and_then(|caps| caps.name("date"))
        .map_or(c_value, |m| m.as_str())
        .trim();
    let c_date = RE_WEEKDAY_PREFIX
        .find(c_date)
        .map_or(c_date, |m| &c_date[m.end()..]);

    if let Some(caps) = RE_NUMERIC.captures(c_date) {
        return derive_date_from_numeric_parts(&caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = RE_COMPACT.captures(c_date) {
        return NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }
    if let Some(caps) = RE_DAY_MONTH_NAME.captures(c_date) {
        return NaiveDate::from_ymd_opt(
            derive_year(&caps[3])?,
            derive_month_from_name(&caps[2])?,
            caps[1].parse().ok()?,
        );
    }
    if let Some(caps) = RE_MONTH_NAME_DAY.captures(c_date) {
        return NaiveDate::from_ymd_opt(
            derive_year(&caps[3])?,
            derive_month_from_name(&caps[1])?,
            caps[2].parse().ok()?,
        );
    }

    None
}

/// Resolve `a/b/c` into a date: year-first when `a` has four digits,
/// otherwise day-first with a month-first fallback.
fn derive_date_from_numeric_parts(a: &str, b: &str, c: &str) -> Option<NaiveDate> {
    let n_a: u32 = a.parse().ok()?;
    let n_b: u32 = b.parse().ok()?;

    if a.len() == 4 {
        let n_year: i32 = a.parse().ok()?;
        let n_c: u32 = c.parse().ok()?;
        return NaiveDate::from_ymd_opt(n_year, n_b, n_c)
            .or_else(|| NaiveDate::from_ymd_opt(n_year, n_c, n_b));
    }

    let n_year = derive_year(c)?;
    NaiveDate::from_ymd_opt(n_year, n_b, n_a).or_else(|| NaiveDate::from_ymd_opt(n_year, n_a, n_b))
}

fn derive_year(c_year: &str) -> Option<i32> {
    let n_year: i32 = c_year.parse().ok()?;
    if c_year.len() > 2 {
        return Some(n_year);
    }
    Some(if n_year < N_YEAR_PIVOT_TWO_DIGIT {
        2000 + n_year
    } else {
        1900 + n_year
    })
}

fn derive_month_from_name(c_month: &str) -> Option<u32> {
    let c_month = c_month.to_ascii_lowercase();
    if c_month.len() < 3 {
        return None;
    }
    TUP_MONTH_NAMES
        .iter()
        .position(|c_full| c_full.starts_with(c_month.as_str()))
        .map(|n_idx| n_idx as u32 + 1)
}

/// Parse a whole column; `None` marks cells that could not be read as dates.
pub fn parse_date_column(values: &[Option<&str>]) -> Vec<Option<NaiveDate>> {
    values
        .iter()
        .map(|val| val.and_then(parse_date_dayfirst))
        .collect()
}

/// Render parsed dates as `DD/MM/YYYY`; absent dates become `""`.
pub fn format_date_column(dates: &[Option<NaiveDate>]) -> Vec<String> {
    dates
        .iter()
        .map(|date| {
            date.map(|val| val.format(C_DATE_FORMAT_OUT).to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Column-wise date cleaner.
pub fn clean_date_column(values: &[Option<&str>]) -> Vec<Option<String>> {
    format_date_column(&parse_date_column(values))
        .into_iter()
        .map(Some)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_clean_date_column_mixed_layouts() {
        let values = [Some("03/04/2024"), Some("2024-12-31"), Some("not a date")];
        assert_eq!(
            clean_date_column(&values),
            vec![
                Some("03/04/2024".to_string()),
                Some("31/12/2024".to_string()),
                Some(String::new())
            ]
        );
    }

    #[test]
    fn test_parse_date_dayfirst_prefers_day_before_month() {
        assert_eq!(parse_date_dayfirst("03/04/2024"), ymd(2024, 4, 3));
        assert_eq!(parse_date_dayfirst("3-4-2024"), ymd(2024, 4, 3));
        assert_eq!(parse_date_dayfirst("03.04.24"), ymd(2024, 4, 3));
    }

    #[test]
    fn test_parse_date_dayfirst_falls_back_to_month_first() {
        assert_eq!(parse_date_dayfirst("12/31/2024"), ymd(2024, 12, 31));
        assert_eq!(parse_date_dayfirst("13/25/2024"), None);
    }

    #[test]
    fn test_parse_date_dayfirst_discards_time_of_day() {
        assert_eq!(parse_date_dayfirst("2024-12-31 00:00:00"), ymd(2024, 12, 31));
        assert_eq!(parse_date_dayfirst("31/12/2024 18:45"), ymd(2024, 12, 31));
        assert_eq!(
            parse_date_dayfirst("2024-12-31T23:30:00+07:00"),
            ymd(2024, 12, 31)
        );
    }

    #[test]
    fn test_parse_date_dayfirst_other_layouts() {
        assert_eq!(parse_date_dayfirst("20241231"), ymd(2024, 12, 31));
        assert_eq!(parse_date_dayfirst("2024/1/5"), ymd(2024, 1, 5));
        assert_eq!(parse_date_dayfirst("31 Dec 2024"), ymd(2024, 12, 31));
        assert_eq!(parse_date_dayfirst("5-Sept-99"), ymd(1999, 9, 5));
        assert_eq!(parse_date_dayfirst("December 31, 2024"), ymd(2024, 12, 31));
        assert_eq!(
            parse_date_dayfirst("Tue, 31 Dec 2024 10:00:00 +0000"),
            ymd(2024, 12, 31)
        );
    }

    #[test]
    fn test_parse_date_dayfirst_weekday_and_comma_before_time() {
        assert_eq!(parse_date_dayfirst("Tue, 31 Dec 2024 10:00"), ymd(2024, 12, 31));
        assert_eq!(parse_date_dayfirst("31/12/2024, 10:00"), ymd(2024, 12, 31));
        assert_eq!(parse_date_dayfirst("Monday 3/4/2024"), ymd(2024, 4, 3));
        assert_eq!(parse_date_dayfirst("Sun"), None);
    }

    #[test]
    fn test_parse_date_dayfirst_rejects_garbage() {
        assert_eq!(parse_date_dayfirst(""), None);
        assert_eq!(parse_date_dayfirst("   "), None);
        assert_eq!(parse_date_dayfirst("31/02/2024"), None);
        assert_eq!(parse_date_dayfirst("Smarch 3 2024"), None);
        assert_eq!(parse_date_dayfirst("0912345678"), None);
    }

    #[test]
    fn test_parse_date_column_marks_absent_explicitly() {
        let values = [None, Some(""), Some("01/01/2000")];
        assert_eq!(
            parse_date_column(&values),
            vec![None, None, ymd(2000, 1, 1)]
        );
        assert_eq!(
            format_date_column(&parse_date_column(&values)),
            vec!["", "", "01/01/2000"]
        );
    }

    #[test]
    fn test_clean_date_column_is_idempotent() {
        let values = [Some("2024-02-29"), Some("7/8/2023"), Some("x")];
        let once = clean_date_column(&values);
        let l_once: Vec<Option<&str>> = once.iter().map(|val| val.as_deref()).collect();
        assert_eq!(clean_date_column(&l_once), once);
    }
}
