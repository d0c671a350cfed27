//! Stateless helper utilities used by the XLSX reader and writer kernels.

use std::collections::BTreeSet;
use std::path::Path;

use crate::conf::{C_HEADER_UNNAMED_PREFIX, C_PREFIX_FILE_NORMALIZED};
use crate::spec::{EnumCellValue, SpecAutofitCellsPolicy};

////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Render a number the way it reads in a spreadsheet cell (`42`, not `42.0`).
pub fn convert_number_to_text(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
        return format!("{}", x as i64);
    }
    x.to_string()
}

/// Convert a normalized cell value to the text written into a text-forced cell.
pub fn convert_cell_value_to_text(value: &EnumCellValue) -> Option<String> {
    match value {
        EnumCellValue::None => None,
        EnumCellValue::String(s) => Some(s.clone()),
        EnumCellValue::Number(n) if n.is_finite() => Some(convert_number_to_text(*n)),
        EnumCellValue::Number(_) => None,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region HeaderNames

/// Turn raw header cells into unique column names.
///
/// Blank headers become `Unnamed: {idx}`; repeats get `.1`, `.2`, ... suffixes.
pub fn derive_unique_column_names(headers: &[Option<String>]) -> Vec<String> {
    let mut set_names_seen = BTreeSet::new();
    let mut l_names = Vec::with_capacity(headers.len());

    for (n_idx, c_header) in headers.iter().enumerate() {
        let c_base = match c_header.as_deref().map(str::trim) {
            Some(val) if !val.is_empty() => val.to_string(),
            _ => format!("{C_HEADER_UNNAMED_PREFIX}{n_idx}"),
        };

        let mut c_name = c_base.clone();
        let mut n_dup = 1usize;
        while set_names_seen.contains(&c_name) {
            c_name = format!("{c_base}.{n_dup}");
            n_dup += 1;
        }

        set_names_seen.insert(c_name.clone());
        l_names.push(c_name);
    }

    l_names
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WidthEstimation

/// Estimate displayed width units for a string; non-ASCII glyphs count wider.
pub fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

/// Apply padding and min/max bounds to a recorded width.
pub fn derive_column_width(n_width_recorded: usize, policy: &SpecAutofitCellsPolicy) -> usize {
    let n_min = usize::max(1, policy.width_cell_min);
    let n_max = usize::min(255, usize::max(n_min, policy.width_cell_max));
    usize::min(
        n_max,
        usize::max(n_min, n_width_recorded + policy.width_cell_padding),
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Naming

/// Suggested download filename for a normalized upload.
pub fn derive_normalized_file_name(file_name: &str) -> String {
    let c_base = Path::new(file_name)
        .file_name()
        .map(|val| val.to_string_lossy().to_string())
        .unwrap_or_default();
    let c_base = if c_base.is_empty() {
        "data.xlsx".to_string()
    } else {
        c_base
    };
    format!("{C_PREFIX_FILE_NORMALIZED}{c_base}")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
