//! Anchor ids and output file names derived from workbook and sheet names.

use std::path::Path;

/// Extension of every generated page.
pub const PAGE_EXTENSION: &str = "html";

/// Derive the in-page anchor id for a sheet name.
///
/// Every non-alphanumeric character becomes `-`, leading and trailing `-`
/// are trimmed and the result is lowercased. Runs of separators are kept, and
/// distinct names may map to the same id (`"Data 1"` and `"Data-1"`).
pub fn anchor_id(sheet_name: &str) -> String {
    sheet_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .trim_matches('-')
        .to_lowercase()
}

/// Map a workbook file name to the file name of its rendered page.
///
/// The last extension is dropped, anything other than alphanumerics, `-` and
/// `_` becomes `_`, and `.html` is appended.
pub fn sanitize_filename(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    let mut safe: String = stem
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    safe.push('.');
    safe.push_str(PAGE_EXTENSION);
    safe
}
