//! Static site generator for spreadsheet workbooks.
//!
//! Renders one self-contained HTML page per workbook plus an index page
//! linking to them.

pub mod assets;
pub mod builder;
pub mod templates;

pub use builder::{
    BuildConfig, BuildError, BuildResult, FailedWorkbook, RenderedPage, SiteBuilder, INDEX_FILE,
};
