//! Spreadsheet export of an event's filtered gift records.
//!
//! The same [`Sheet`] feeds both output formats. The workbook carries cell
//! styling and places the summary block beside the table; the delimited file
//! carries values only.

mod delimited;
mod workbook;

use crate::base;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Layout {
    /// Sequence number, name, amount and companions, plus a summary block.
    #[default]
    Compact,
    /// Every field of the record and its event, without a summary block.
    Detailed,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Format {
    #[default]
    Xlsx,
    Csv,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Xlsx => "xlsx",
            Format::Csv => "csv",
        }
    }
}

pub const COMPACT_HEADERS: &[&str] = &["번호", "이름", "금액", "인원수"];
pub const DETAILED_HEADERS: &[&str] = &[
    "번호", "구분", "행사", "날짜", "장소", "주최", "이름", "금액", "관계", "인원수", "결제수단", "메모",
];
const FILE_PREFIX: &str = "축의금";
/// Side label used in file names when the export is not restricted to a side.
const ALL_SIDES: &str = "전체";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<Option<&str>> for Cell {
    /// Missing values become empty text.
    fn from(value: Option<&str>) -> Self {
        value.unwrap_or_default().into()
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value)
    }
}

/// Tabular form of an export, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// File name without extension.
    pub name: String,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
    /// Label-value pairs written apart from the rows. Empty for layouts
    /// without a summary block.
    pub summary: Vec<(&'static str, Cell)>,
}

impl Sheet {
    /// Builds the sheet for `records`, numbering rows from 1 in the given
    /// order. `side` only affects the file name of the detailed layout.
    pub fn new(
        layout: Layout,
        event: &base::Event,
        records: &[&base::GiftRecord],
        side: Option<base::Side>,
    ) -> Self {
        match layout {
            Layout::Compact => Self::compact(event, records),
            Layout::Detailed => Self::detailed(event, records, side),
        }
    }

    fn compact(event: &base::Event, records: &[&base::GiftRecord]) -> Self {
        let rows = records
            .iter()
            .zip(1i64..)
            .map(|(r, seq)| {
                vec![
                    Cell::from(seq),
                    r.name().into(),
                    r.amount().0.into(),
                    i64::from(r.companions()).into(),
                ]
            })
            .collect();
        let summary = base::Summary::of(records.iter().copied());
        Self {
            name: format!("{}_{}", FILE_PREFIX, event.date()),
            headers: COMPACT_HEADERS,
            rows,
            summary: vec![
                ("총 금액", summary.total_amount.0.into()),
                ("총 인원", Cell::Number(summary.total_people as i64)),
            ],
        }
    }

    fn detailed(
        event: &base::Event,
        records: &[&base::GiftRecord],
        side: Option<base::Side>,
    ) -> Self {
        let date = event.date().to_string();
        let rows = records
            .iter()
            .zip(1i64..)
            .map(|(r, seq)| {
                vec![
                    Cell::from(seq),
                    r.side().map(base::Side::label).into(),
                    event.kind().label().into(),
                    date.as_str().into(),
                    event.location().into(),
                    event.host().into(),
                    r.name().into(),
                    r.amount().0.into(),
                    r.relation().map(base::Relation::label).into(),
                    i64::from(r.companions()).into(),
                    r.method().map(base::Method::label).into(),
                    r.memo().into(),
                ]
            })
            .collect();
        let side_label = side.map(base::Side::label).unwrap_or(ALL_SIDES);
        Self {
            name: format!("{}_{}_{}", FILE_PREFIX, side_label, date),
            headers: DETAILED_HEADERS,
            rows,
            summary: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write '{}'", path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write '{}'", path.display())]
    Csv {
        path: std::path::PathBuf,
        source: csv::Error,
    },
    #[error("failed to write '{}'", path.display())]
    Xlsx {
        path: std::path::PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub layout: Layout,
    pub format: Format,
    /// Restricts the export to records of this side.
    pub side: Option<base::Side>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub path: std::path::PathBuf,
    pub rows: usize,
}

/// Writes `records` of `event` into `dir`. Without an event nothing is
/// written and `Ok(None)` is returned.
pub fn export(
    event: Option<&base::Event>,
    records: &[&base::GiftRecord],
    options: Options,
    dir: &std::path::Path,
) -> Result<Option<Exported>, ExportError> {
    let Some(event) = event else {
        tracing::debug!("no event selected, skipping export");
        return Ok(None);
    };
    let records = records
        .iter()
        .copied()
        .filter(|r| options.side.is_none_or(|side| r.side() == Some(side)))
        .collect::<Vec<_>>();
    let sheet = Sheet::new(options.layout, event, &records, options.side);
    let path = dir.join(format!("{}.{}", sheet.name, options.format.extension()));
    match options.format {
        Format::Xlsx => workbook::write(&sheet, &path).map_err(|source| ExportError::Xlsx {
            path: path.clone(),
            source,
        })?,
        Format::Csv => delimited::write(&sheet, &path)?,
    }
    tracing::info!(
        event = event.id(),
        rows = sheet.rows.len(),
        path = %path.display(),
        "exported gift records"
    );
    Ok(Some(Exported {
        path,
        rows: sheet.rows.len(),
    }))
}
