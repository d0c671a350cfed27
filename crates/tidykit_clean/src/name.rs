//! Person-name cleaning.

/// Trim, collapse whitespace runs and title-case a person name.
///
/// Null stays null and a blank value is returned unchanged.
pub fn clean_person_name(value: Option<&str>) -> Option<String> {
    let val = value?;
    if val.trim().is_empty() {
        return Some(val.to_string());
    }

    Some(
        val.split_whitespace()
            .map(convert_title_case)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Upper-case letters that follow a non-letter, lower-case the rest.
///
/// Combining marks continue the current word, so decomposed Vietnamese
/// text title-cases like its precomposed form.
pub fn convert_title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut if_prev_letter = false;

    for chr in token.chars() {
        if is_combining_mark(chr) {
            out.push(chr);
            continue;
        }
        if if_prev_letter {
            out.extend(chr.to_lowercase());
        } else {
            out.extend(chr.to_uppercase());
        }
        if_prev_letter = chr.is_alphabetic();
    }

    out
}

fn is_combining_mark(chr: char) -> bool {
    matches!(chr, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}')
}

/// Column-wise person-name cleaner.
pub fn clean_person_name_column(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|val| clean_person_name(*val)).collect()
}
