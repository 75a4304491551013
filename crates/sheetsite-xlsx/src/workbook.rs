//! Workbook loading.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::cell::CellValue;
use crate::naming::anchor_id;

/// A worksheet reduced to a grid of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name as stored in the workbook
    pub name: String,

    /// Rows of cells, anchored at A1; every row has the same width
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Build a sheet from a calamine range.
    ///
    /// Ranges start at the first used cell; the grid is padded back to A1 so
    /// row and column positions match the spreadsheet. The grid holds
    /// `(end_row + 1) * (end_col + 1)` cells, so one stray cell far from A1
    /// costs memory for the whole rectangle.
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let (Some((start_row, start_col)), Some((end_row, end_col))) =
            (range.start(), range.end())
        else {
            return Self {
                name: name.into(),
                rows: Vec::new(),
            };
        };

        let height = end_row as usize + 1;
        let width = end_col as usize + 1;
        let mut rows = vec![vec![CellValue::Empty; width]; height];

        for (row, col, data) in range.cells() {
            rows[start_row as usize + row][start_col as usize + col] = CellValue::from(data);
        }

        Self {
            name: name.into(),
            rows,
        }
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// In-page anchor id for this sheet.
    pub fn anchor(&self) -> String {
        anchor_id(&self.name)
    }
}

/// A workbook and its sheets, in stored order.
#[derive(Debug, Clone)]
pub struct Workbook {
    /// File name, e.g. `basedata.xlsx`
    pub name: String,

    /// Path the workbook was read from
    pub path: PathBuf,

    /// Sheets in the order of the workbook's sheet directory
    pub sheets: Vec<Sheet>,
}

/// Errors that can occur when reading a workbook.
#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open workbook {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read sheet '{sheet}' in {path}: {source}")]
    Sheet {
        path: String,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

impl Workbook {
    /// Open a workbook file and read every sheet.
    ///
    /// The format (xlsx, xlsm, xlsb, xls, ods) is detected from the content,
    /// so the extension's case does not matter.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WorkbookError> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| WorkbookError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut reader =
            open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|source| {
                WorkbookError::Open {
                    path: path.display().to_string(),
                    source,
                }
            })?;

        let sheet_names = reader.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            let range = reader
                .worksheet_range(&name)
                .map_err(|source| WorkbookError::Sheet {
                    path: path.display().to_string(),
                    sheet: name.clone(),
                    source,
                })?;

            let sheet = Sheet::from_range(name, &range);
            tracing::debug!(
                "Read sheet '{}' ({} x {}) from {}",
                sheet.name,
                sheet.height(),
                sheet.width(),
                path.display()
            );
            sheets.push(sheet);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            sheets,
        })
    }
}
