//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;

/// Sheet name used for normalized output.
pub const C_SHEET_NAME_DEFAULT: &str = "Data";
/// Excel number format that keeps cell content as literal text.
pub const C_NUM_FORMAT_TEXT: &str = "@";
/// Default cap for autofit column widths.
pub const N_WIDTH_CELL_MAX_DEFAULT: usize = 50;

/// MIME type for served xlsx documents.
pub const C_MIME_XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// Filename prefix marking a normalized download ("Đã sửa").
pub const C_PREFIX_FILE_NORMALIZED: &str = "Da_Sua_";

/// Header name pattern for blank header cells.
pub const C_HEADER_UNNAMED_PREFIX: &str = "Unnamed: ";

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnumFmtKey {
    /// Body cell format (text-forced).
    Text,
    /// Header cell format.
    Header,
}

/// Build default named format presets used by [`crate::writer::write_xlsx_bytes`].
pub fn derive_default_xlsx_formats() -> BTreeMap<EnumFmtKey, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        font_name: Some("Arial".to_string()),
        font_size: Some(11),
        border: Some(1),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        EnumFmtKey::Text,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            num_format: Some(C_NUM_FORMAT_TEXT.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Header,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            align: Some("center".to_string()),
            bg_color: Some("#1E3A8A".to_string()),
            font_color: Some("#FFFFFF".to_string()),
            ..Default::default()
        }),
    );

    dict_fmt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formats_match_normalized_output_style() {
        let dict_fmt = derive_default_xlsx_formats();

        let fmt_text = &dict_fmt[&EnumFmtKey::Text];
        assert!(fmt_text.is_text_forced());
        assert_eq!(fmt_text.border, Some(1));
        assert_eq!(fmt_text.font_name.as_deref(), Some("Arial"));

        let fmt_header = &dict_fmt[&EnumFmtKey::Header];
        assert_eq!(fmt_header.bold, Some(true));
        assert_eq!(fmt_header.align.as_deref(), Some("center"));
        assert_eq!(fmt_header.bg_color.as_deref(), Some("#1E3A8A"));
        assert_eq!(fmt_header.font_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(fmt_header.border, Some(1));
    }
}
