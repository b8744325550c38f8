use rust_xlsxwriter::Color;
use rust_xlsxwriter::Format;
use rust_xlsxwriter::FormatAlign;
use rust_xlsxwriter::FormatBorder;
use rust_xlsxwriter::Workbook;
use rust_xlsxwriter::Worksheet;
use rust_xlsxwriter::XlsxError;

use super::Cell;
use super::Sheet;
use crate::base;

const WORKSHEET_NAME: &str = "축의금";
/// Top-left cell of the summary block as (row, column), i.e. F2. Kept clear
/// of the compact table, which spans columns A to D.
const SUMMARY_ANCHOR: (u32, u16) = (1, 5);
const NUMBER_FORMAT: &str = "#,##0";
const MIN_COLUMN_WIDTH: usize = 6;

struct Styles {
    header: Format,
    text: Format,
    number: Format,
}

impl Styles {
    fn new() -> Self {
        let base = Format::new().set_border(FormatBorder::Thin);
        Self {
            header: base
                .clone()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_background_color(Color::RGB(0xD9D9D9)),
            text: base.clone().set_align(FormatAlign::Center),
            number: base
                .set_align(FormatAlign::Right)
                .set_num_format(NUMBER_FORMAT),
        }
    }
}

pub fn write(sheet: &Sheet, path: &std::path::Path) -> Result<(), XlsxError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name(WORKSHEET_NAME)?;

    for (col, header) in (0u16..).zip(sheet.headers.iter()) {
        ws.write_string_with_format(0, col, *header, &styles.header)?;
    }
    for (row, cells) in (1u32..).zip(sheet.rows.iter()) {
        for (col, cell) in (0u16..).zip(cells.iter()) {
            write_cell(ws, row, col, cell, &styles)?;
        }
    }
    for (col, header) in (0u16..).zip(sheet.headers.iter()) {
        let widest = sheet
            .rows
            .iter()
            .filter_map(|cells| cells.get(usize::from(col)))
            .map(|c| base::util::display_width(&c.to_string()))
            .chain(std::iter::once(base::util::display_width(header)))
            .max()
            .unwrap_or_default();
        ws.set_column_width(col, column_width(widest))?;
    }

    let (row, col) = SUMMARY_ANCHOR;
    for (offset, (label, value)) in (0u32..).zip(sheet.summary.iter()) {
        ws.write_string_with_format(row + offset, col, *label, &styles.header)?;
        write_cell(ws, row + offset, col + 1, value, &styles)?;
    }
    if !sheet.summary.is_empty() {
        ws.set_column_width(col, column_width(MIN_COLUMN_WIDTH * 2))?;
        ws.set_column_width(col + 1, column_width(MIN_COLUMN_WIDTH * 2))?;
    }

    workbook.save(path)
}

fn write_cell(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    styles: &Styles,
) -> Result<(), XlsxError> {
    match cell {
        Cell::Text(s) => ws.write_string_with_format(row, col, s.as_str(), &styles.text)?,
        Cell::Number(n) => ws.write_number_with_format(row, col, *n as f64, &styles.number)?,
    };
    Ok(())
}

fn column_width(chars: usize) -> f64 {
    (chars.max(MIN_COLUMN_WIDTH) + 2) as f64
}
