//! Column classification by header keywords.

use crate::conf::{TUP_KEYWORDS_DATE, TUP_KEYWORDS_PERSON_NAME, TUP_KEYWORDS_PHONE};
use crate::spec::EnumFieldKind;

/// Keyword rules in priority order; the first rule with a hit wins.
const TUP_FIELD_RULES: [(EnumFieldKind, &[&str]); 3] = [
    (EnumFieldKind::PersonName, &TUP_KEYWORDS_PERSON_NAME),
    (EnumFieldKind::Phone, &TUP_KEYWORDS_PHONE),
    (EnumFieldKind::Date, &TUP_KEYWORDS_DATE),
];

/// Classify a column by case-insensitive substring match on its name.
pub fn classify_column(name: &str) -> EnumFieldKind {
    let c_name_lower = name.to_lowercase();
    TUP_FIELD_RULES
        .iter()
        .find(|(_, l_keywords)| l_keywords.iter().any(|kw| c_name_lower.contains(kw)))
        .map_or(EnumFieldKind::Other, |(kind, _)| *kind)
}
