//! Workbook model for sheetsite.
//!
//! Reads spreadsheet workbooks into plain grids of values and provides the
//! naming rules shared by page rendering: sheet anchor ids and sanitized
//! output file names.

pub mod cell;
pub mod naming;
pub mod workbook;

pub use cell::CellValue;
pub use naming::{anchor_id, sanitize_filename, PAGE_EXTENSION};
pub use workbook::{Sheet, Workbook, WorkbookError};
