use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use tidykit_clean::{CleanError, EnumPhonePolicy, SpecNormalizeOptions, normalize_xlsx_bytes};
use tidykit_io_xlsx::{C_MIME_XLSX, XlsxIoError, derive_normalized_file_name};

const N_BRIDGE_ABI_VERSION: u64 = 1;
const C_BRIDGE_CONTRACT_VERSION: &str = "tidykit.clean.normalize.v1";
const C_BRIDGE_TRANSPORT: &str = "xlsx_bytes";

fn convert_clean_error(err: CleanError) -> PyErr {
    match err {
        CleanError::Xlsx(XlsxIoError::Write(_)) | CleanError::Frame(_) => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Normalize an uploaded workbook; returns the styled output workbook bytes.
#[pyfunction]
#[pyo3(signature = (data, phone_policy = "strict"))]
fn normalize_xlsx<'py>(
    py: Python<'py>,
    data: &[u8],
    phone_policy: &str,
) -> PyResult<Bound<'py, PyBytes>> {
    let phone_policy: EnumPhonePolicy = phone_policy.parse().map_err(convert_clean_error)?;
    let options = SpecNormalizeOptions { phone_policy };

    let (v_out, _report) = py
        .allow_threads(|| normalize_xlsx_bytes(data, &options))
        .map_err(convert_clean_error)?;
    Ok(PyBytes::new(py, &v_out))
}

/// Field kind for a column name: `person_name`, `phone`, `date` or `other`.
#[pyfunction]
fn classify_column(name: &str) -> &'static str {
    tidykit_clean::classify_column(name).as_str()
}

/// Suggested download name, `Da_Sua_<name>`.
#[pyfunction]
fn derive_output_file_name(name: &str) -> String {
    derive_normalized_file_name(name)
}

#[pymodule]
fn _tidykit_rs(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(normalize_xlsx, module)?)?;
    module.add_function(wrap_pyfunction!(classify_column, module)?)?;
    module.add_function(wrap_pyfunction!(derive_output_file_name, module)?)?;
    module.add("MIME_XLSX", C_MIME_XLSX)?;
    module.add("__bridge_abi__", N_BRIDGE_ABI_VERSION)?;
    module.add("__bridge_contract__", C_BRIDGE_CONTRACT_VERSION)?;
    module.add("__bridge_transport__", C_BRIDGE_TRANSPORT)?;
    Ok(())
}
