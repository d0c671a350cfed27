//! Phone-number cleaning policies.
//!
//! Both policies work on text only; a value is never parsed as a number, so
//! leading zeros survive.

use crate::conf::{C_PHONE_COUNTRY_PREFIX, N_PHONE_SUFFIX_DIGITS, TUP_PHONE_NULL_SENTINELS};

/// Keep ASCII digits and rewrite a leading `84` country code to `0`.
fn derive_local_digits(value: &str) -> String {
    let c_digits: String = value.chars().filter(char::is_ascii_digit).collect();
    match c_digits.strip_prefix(C_PHONE_COUNTRY_PREFIX) {
        Some(rest) => format!("0{rest}"),
        None => c_digits,
    }
}

/// Strict policy: every digit kept, local leading zero guaranteed.
///
/// Null, blank and stringified null markers map to `""`.
pub fn clean_phone_number(value: Option<&str>) -> String {
    let Some(val) = value.map(str::trim) else {
        return String::new();
    };
    if val.is_empty() || TUP_PHONE_NULL_SENTINELS.contains(&val) {
        return String::new();
    }

    let c_digits = derive_local_digits(val);
    if !c_digits.is_empty() && !c_digits.starts_with('0') {
        return format!("0{c_digits}");
    }
    c_digits
}

/// Suffix policy: canonical 10-digit local form from the last 9 digits.
///
/// Shorter digit strings are returned as-is; null and blank pass through.
pub fn clean_phone_number_suffix(value: Option<&str>) -> Option<String> {
    let val = value?;
    if val.trim().is_empty() {
        return Some(val.to_string());
    }

    let c_digits = derive_local_digits(val);
    if c_digits.len() >= N_PHONE_SUFFIX_DIGITS {
        let c_suffix = &c_digits[c_digits.len() - N_PHONE_SUFFIX_DIGITS..];
        return Some(format!("0{c_suffix}"));
    }
    Some(c_digits)
}

/// Column-wise strict phone cleaner.
pub fn clean_phone_column_strict(values: &[Option<&str>]) -> Vec<Option<String>> {
    values
        .iter()
        .map(|val| Some(clean_phone_number(*val)))
        .collect()
}

/// Column-wise suffix phone cleaner.
pub fn clean_phone_column_suffix(values: &[Option<&str>]) -> Vec<Option<String>> {
    values
        .iter()
        .map(|val| clean_phone_number_suffix(*val))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_phone_number_strict() {
        assert_eq!(clean_phone_number(Some("84912345678")), "0912345678");
        assert_eq!(clean_phone_number(Some("912345678")), "0912345678");
        assert_eq!(clean_phone_number(Some("+84 912-345-678")), "0912345678");
        assert_eq!(clean_phone_number(Some("(086) 961 1000")), "0869611000");
        assert_eq!(clean_phone_number(Some("")), "");
    }

    #[test]
    fn test_clean_phone_number_strict_maps_null_like_to_empty() {
        assert_eq!(clean_phone_number(None), "");
        assert_eq!(clean_phone_number(Some("   ")), "");
        assert_eq!(clean_phone_number(Some("nan")), "");
        assert_eq!(clean_phone_number(Some("None")), "");
        assert_eq!(clean_phone_number(Some("không có")), "");
    }

    #[test]
    fn test_clean_phone_number_strict_is_idempotent() {
        for raw in ["84912345678", "912 345 678", "0869611000"] {
            let once = clean_phone_number(Some(raw));
            assert_eq!(clean_phone_number(Some(&once)), once);
        }
    }

    #[test]
    fn test_clean_phone_number_suffix() {
        assert_eq!(
            clean_phone_number_suffix(Some("84912345678")),
            Some("0912345678".to_string())
        );
        assert_eq!(
            clean_phone_number_suffix(Some("0123456789012")),
            Some("0456789012".to_string())
        );
        assert_eq!(
            clean_phone_number_suffix(Some("12345")),
            Some("12345".to_string())
        );
    }

    #[test]
    fn test_clean_phone_number_suffix_passes_blank_through() {
        assert_eq!(clean_phone_number_suffix(None), None);
        assert_eq!(clean_phone_number_suffix(Some(" ")), Some(" ".to_string()));
    }

    #[test]
    fn test_clean_phone_number_suffix_is_idempotent() {
        let once = clean_phone_number_suffix(Some("+84 (0) 912 345 678")).expect("phone");
        assert_eq!(once, "0912345678");
        assert_eq!(clean_phone_number_suffix(Some(&once)), Some(once.clone()));
    }
}
