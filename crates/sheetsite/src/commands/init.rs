//! Write a starter config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("List your workbooks under [input] order, then run 'sheetsite'.");

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# sheetsite configuration

[input]
# Directory containing the workbooks
dir = "."

# Workbooks to publish, in index order. Missing files are skipped.
# When none of them exist, every workbook in `dir` is published
# in file name order.
order = [
  # "basedata.xlsx",
  # "student_data.xlsx",
]

# Extensions picked up by the directory scan
extensions = ["xlsx"]

[output]
# Where spreadsheets.html is written
dir = "."

# Workbook pages, relative to the output directory
sheets_dir = "sheets"

# Index page file name
index = "spreadsheets.html"

[build]
# Minify the embedded stylesheets
minify = true

# Render workbooks in parallel
parallel = false

# Skip workbooks that fail to render instead of stopping
keep_going = false
"#;
