use std::io::Write;

use super::ExportError;
use super::Sheet;

/// Lets spreadsheet applications detect UTF-8 when opening the file.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes the header row and the data rows. A summary, if any, follows after a
/// row of empty cells, one row per entry.
pub fn write(sheet: &Sheet, path: &std::path::Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::File::create(path).map_err(io_err)?;
    file.write_all(UTF8_BOM).map_err(io_err)?;
    let mut w = csv::WriterBuilder::new().flexible(true).from_writer(file);
    w.write_record(sheet.headers).map_err(csv_err)?;
    for row in sheet.rows.iter() {
        w.write_record(row.iter().map(|c| c.to_string()))
            .map_err(csv_err)?;
    }
    if !sheet.summary.is_empty() {
        // A lone empty field would be written as `""`.
        w.write_record(vec![""; sheet.headers.len()])
            .map_err(csv_err)?;
    }
    for (label, value) in sheet.summary.iter() {
        w.write_record([label.to_string(), value.to_string()])
            .map_err(csv_err)?;
    }
    w.flush().map_err(io_err)
}
