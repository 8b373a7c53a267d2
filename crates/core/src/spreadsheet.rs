//! XLSX serialization of an [`ExportDocument`].

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};

use crate::error::CoreError;
use crate::export::{ExportDocument, SHEET_NAME};

/// Serialize the document into an in-memory `.xlsx` workbook.
///
/// The workbook has a single sheet named [`SHEET_NAME`] with a bold header
/// row at the top and one row per normalized row beneath it. There is no
/// index column. Empty values are left as blank cells.
pub fn write_xlsx(document: &ExportDocument) -> Result<Vec<u8>, CoreError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in document.header().iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, *name, &header_format)?;
    }

    for (idx, row) in document.rows().iter().enumerate() {
        let row_num = RowNum::try_from(idx + 1)
            .map_err(|_| CoreError::Internal(format!("row index {idx} out of range")))?;

        for (col, value) in row.cells().iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet.write_string(row_num, col as ColNum, *value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
