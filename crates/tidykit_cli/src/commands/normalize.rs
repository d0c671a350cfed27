//! `tidykit normalize`: preview, clean, write `Da_Sua_<file>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use polars::prelude::{AnyValue, DataFrame};
use tidykit_clean::{EnumPhonePolicy, SpecNormalizeOptions, SpecNormalizeReport, normalize_dataframe};
use tidykit_io_xlsx::{derive_normalized_file_name, read_xlsx_bytes, write_xlsx_bytes};
use tracing::info;

/// Render the first `n_rows` rows as a ` | `-separated table.
pub fn format_preview(df: &DataFrame, n_rows: usize) -> String {
    let df_head = df.head(Some(n_rows));
    let mut l_lines = vec![df_head.get_column_names_str().join(" | ")];

    for n_idx_row in 0..df_head.height() {
        let l_cells: Vec<String> = df_head
            .get_columns()
            .iter()
            .map(|col| match col.get(n_idx_row) {
                Ok(AnyValue::Null) | Err(_) => String::new(),
                Ok(AnyValue::String(val)) => val.to_string(),
                Ok(AnyValue::StringOwned(val)) => val.to_string(),
                Ok(other) => other.to_string(),
            })
            .collect();
        l_lines.push(l_cells.join(" | "));
    }

    l_lines.join("\n")
}

/// Output path: `<out_dir or input dir>/Da_Sua_<input file name>`.
pub fn derive_output_path(path_input: &Path, dir_out: Option<&Path>) -> PathBuf {
    let c_file_name = path_input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir_out = dir_out
        .or_else(|| path_input.parent())
        .unwrap_or_else(|| Path::new(""));
    dir_out.join(derive_normalized_file_name(&c_file_name))
}

pub fn run(
    path_input: &Path,
    dir_out: Option<&Path>,
    n_rows_preview: usize,
    phone_policy: EnumPhonePolicy,
) -> anyhow::Result<(PathBuf, SpecNormalizeReport)> {
    let v_xlsx = fs::read(path_input)
        .with_context(|| format!("Failed to read {}", path_input.display()))?;
    let df = read_xlsx_bytes(&v_xlsx).map_err(|e| anyhow!("Lỗi: {e}"))?;

    if n_rows_preview > 0 {
        println!("Xem trước dữ liệu gốc:");
        println!("{}\n", format_preview(&df, n_rows_preview));
    }

    let (df_clean, report) = normalize_dataframe(&df, &SpecNormalizeOptions { phone_policy })
        .map_err(|e| anyhow!("Lỗi: {e}"))?;
    let v_out = write_xlsx_bytes(&df_clean).map_err(|e| anyhow!("Lỗi: {e}"))?;

    let path_output = derive_output_path(path_input, dir_out);
    if let Some(dir_parent) = path_output.parent()
        && !dir_parent.as_os_str().is_empty()
    {
        fs::create_dir_all(dir_parent)
            .with_context(|| format!("Failed to create {}", dir_parent.display()))?;
    }
    fs::write(&path_output, &v_out)
        .with_context(|| format!("Failed to write {}", path_output.display()))?;
    info!(path = %path_output.display(), n_bytes = v_out.len(), "normalized workbook written");

    println!("Đã bổ sung số 0 và khóa định dạng Text cho cột SĐT!");
    println!("{report}");
    for col in report.columns.iter().filter(|col| col.cnt_changed > 0) {
        println!("  - {} [{}]: {} changed", col.name, col.kind, col.cnt_changed);
    }
    println!("Saved: {}", path_output.display());

    Ok((path_output, report))
}
