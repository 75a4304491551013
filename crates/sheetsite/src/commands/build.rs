//! Site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use sheetsite_static::{BuildConfig, SiteBuilder};

/// Build options; each one overrides the config file.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Directory containing workbook files [default: .]
    #[arg(long, value_name = "DIR")]
    xlsx_dir: Option<PathBuf>,

    /// Where to write spreadsheets.html [default: .]
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Where to write workbook pages, relative to out-dir [default: sheets]
    #[arg(long, value_name = "DIR")]
    sheets_dir: Option<PathBuf>,

    /// Skip stylesheet minification
    #[arg(long)]
    no_minify: bool,

    /// Render workbooks in parallel
    #[arg(long)]
    parallel: bool,

    /// Skip workbooks that fail to render instead of stopping
    #[arg(long)]
    keep_going: bool,
}

/// Configuration file structure (sheetsite.toml).
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    input: InputConfig,
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize, Default)]
struct InputConfig {
    dir: Option<PathBuf>,
    /// Preferred workbook file names, in index order
    order: Option<Vec<String>>,
    extensions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct OutputConfig {
    dir: Option<PathBuf>,
    sheets_dir: Option<PathBuf>,
    index: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct BuildSettings {
    minify: Option<bool>,
    parallel: Option<bool>,
    keep_going: Option<bool>,
}

/// Load configuration from the config file if it exists.
/// Returns an error if the config file exists but is malformed.
pub(crate) fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Merge command-line options over the config file over built-in defaults.
fn resolve(args: BuildArgs, file: ConfigFile) -> BuildConfig {
    let defaults = BuildConfig::default();

    BuildConfig {
        xlsx_dir: args
            .xlsx_dir
            .or(file.input.dir)
            .unwrap_or(defaults.xlsx_dir),
        output_dir: args.out_dir.or(file.output.dir).unwrap_or(defaults.output_dir),
        sheets_dir: args
            .sheets_dir
            .or(file.output.sheets_dir)
            .unwrap_or(defaults.sheets_dir),
        index_file: file.output.index.unwrap_or(defaults.index_file),
        order: file.input.order.unwrap_or(defaults.order),
        extensions: file.input.extensions.unwrap_or(defaults.extensions),
        minify: !args.no_minify && file.build.minify.unwrap_or(defaults.minify),
        parallel: args.parallel || file.build.parallel.unwrap_or(defaults.parallel),
        keep_going: args.keep_going || file.build.keep_going.unwrap_or(defaults.keep_going),
    }
}

/// Run the build command.
pub fn run(config_path: &Path, args: BuildArgs) -> Result<()> {
    let config = resolve(args, load_config(config_path)?);

    tracing::debug!(
        "Reading workbooks from {}, writing to {}",
        config.xlsx_dir.display(),
        config.output_dir.display()
    );

    let result = SiteBuilder::new(config).build()?;

    tracing::info!(
        "Rendered {} workbooks in {}ms",
        result.pages.len(),
        result.duration_ms
    );

    if !result.failed.is_empty() {
        let names: Vec<String> = result
            .failed
            .iter()
            .map(|f| f.source.display().to_string())
            .collect();
        anyhow::bail!(
            "{} workbook(s) failed to render: {}",
            names.len(),
            names.join(", ")
        );
    }

    Ok(())
}
