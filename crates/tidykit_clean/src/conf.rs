//! Cleaning constants: keyword sets, phone and date rules.

/// Header keywords marking a person-name column.
pub const TUP_KEYWORDS_PERSON_NAME: [&str; 3] = ["tên", "name", "ho ten"];
/// Header keywords marking a phone-number column.
pub const TUP_KEYWORDS_PHONE: [&str; 4] = ["sđt", "điện thoại", "phone", "tel"];
/// Header keywords marking a date column.
pub const TUP_KEYWORDS_DATE: [&str; 2] = ["ngày", "date"];

/// Country calling code rewritten to a local leading zero.
pub const C_PHONE_COUNTRY_PREFIX: &str = "84";
/// Digits kept by the suffix phone policy (before the leading zero).
pub const N_PHONE_SUFFIX_DIGITS: usize = 9;
/// Stringified null markers that a text-cast column may carry.
pub const TUP_PHONE_NULL_SENTINELS: [&str; 3] = ["nan", "None", "NaN"];

/// Output layout for cleaned dates.
pub const C_DATE_FORMAT_OUT: &str = "%d/%m/%Y";
/// Two-digit years below this pivot map to 20xx, others to 19xx.
pub const N_YEAR_PIVOT_TWO_DIGIT: i32 = 69;
/// English month names, January first.
pub const TUP_MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];
