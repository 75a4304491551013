//! Cell values and their text form.

use std::fmt;

use calamine::Data;
use chrono::{NaiveDateTime, TimeDelta, Timelike};

/// A single cell value, reduced to what the page shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// Missing or blank cell
    #[default]
    Empty,
    /// Shared or inline string
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Date or date-time
    DateTime(NaiveDateTime),
    /// Elapsed time, e.g. `[h]:mm:ss` formatted cells
    Duration(TimeDelta),
    /// Spreadsheet error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Whether the cell holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => {
                let converted = if dt.is_duration() {
                    dt.as_duration().map(CellValue::Duration)
                } else {
                    dt.as_datetime().map(CellValue::DateTime)
                };
                // Serial numbers outside chrono's range keep their raw value
                converted.unwrap_or(CellValue::Float(dt.as_f64()))
            }
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
            CellValue::DateTime(dt) => {
                if dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0 {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Duration(d) => {
                let total = d.num_seconds();
                let sign = if total < 0 { "-" } else { "" };
                let total = total.unsigned_abs();
                write!(
                    f,
                    "{sign}{}:{:02}:{:02}",
                    total / 3600,
                    (total % 3600) / 60,
                    total % 60
                )
            }
            CellValue::Error(e) => f.write_str(e),
        }
    }
}
