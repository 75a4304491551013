//! Static site builder.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use sheetsite_xlsx::{sanitize_filename, Workbook, WorkbookError};

use crate::assets::AssetPipeline;
use crate::templates::{IndexContext, IndexEntry, SheetView, TemplateEngine, WorkbookContext};

/// Default index page file name.
pub const INDEX_FILE: &str = "spreadsheets.html";

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the workbooks
    pub xlsx_dir: PathBuf,

    /// Output directory for the index page
    pub output_dir: PathBuf,

    /// Directory for workbook pages, relative to `output_dir`
    pub sheets_dir: PathBuf,

    /// Index page file name, inside `output_dir`
    pub index_file: String,

    /// Preferred workbook file names, in index order
    pub order: Vec<String>,

    /// Extensions picked up by the directory scan
    pub extensions: Vec<String>,

    /// Minify the embedded stylesheets
    pub minify: bool,

    /// Render workbooks in parallel
    pub parallel: bool,

    /// Log and skip workbooks that fail instead of aborting
    pub keep_going: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            xlsx_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            sheets_dir: PathBuf::from("sheets"),
            index_file: INDEX_FILE.to_string(),
            order: vec![],
            extensions: vec!["xlsx".to_string()],
            minify: true,
            parallel: false,
            keep_going: false,
        }
    }
}

/// A workbook page that was written.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Workbook file name
    pub name: String,

    /// Source workbook
    pub source: PathBuf,

    /// Written page
    pub output_path: PathBuf,
}

/// A workbook skipped because it failed to render.
#[derive(Debug, Clone)]
pub struct FailedWorkbook {
    /// Source workbook
    pub source: PathBuf,

    /// Rendered error message
    pub error: String,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Pages written, in index order
    pub pages: Vec<RenderedPage>,

    /// Workbooks that failed (only with `keep_going`)
    pub failed: Vec<FailedWorkbook>,

    /// Written index page
    pub index_path: PathBuf,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No workbook files found in {0}")]
    NoWorkbooks(String),

    #[error("Invalid sheets directory '{0}': expected a relative path without '..'")]
    InvalidSheetsDir(String),

    #[error("Invalid index file '{0}': expected a plain file name")]
    InvalidIndexFile(String),

    #[error(transparent)]
    Workbook(#[from] WorkbookError),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
    workbook_css: String,
    index_css: String,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        let workbook_css = AssetPipeline::workbook_css(config.minify);
        let index_css = AssetPipeline::index_css(config.minify);

        Self {
            config,
            templates: TemplateEngine::new(),
            workbook_css,
            index_css,
        }
    }

    /// Build the site: one page per selected workbook, then the index.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let pages_prefix = self.pages_href_prefix()?;
        self.check_index_file()?;

        let workbooks = self.select_workbooks();
        if workbooks.is_empty() {
            return Err(BuildError::NoWorkbooks(
                self.config.xlsx_dir.display().to_string(),
            ));
        }

        let pages_dir = self.config.output_dir.join(&self.config.sheets_dir);
        create_dir(&pages_dir)?;

        let back_href = self.back_href();
        let mut pages = Vec::new();
        let mut failed = Vec::new();

        if self.config.parallel {
            let results: Vec<Result<RenderedPage, BuildError>> = workbooks
                .par_iter()
                .map(|source| self.build_page(source, &pages_dir, &back_href))
                .collect();

            for (source, result) in workbooks.iter().zip(results) {
                self.record(source, result, &mut pages, &mut failed)?;
            }
        } else {
            for source in &workbooks {
                let result = self.build_page(source, &pages_dir, &back_href);
                self.record(source, result, &mut pages, &mut failed)?;
            }
        }

        let names: Vec<String> = pages.iter().map(|p| p.name.clone()).collect();
        let index_path = self.config.output_dir.join(&self.config.index_file);
        let html = self.render_index(&names, &pages_prefix)?;
        write_page(&index_path, html)?;

        Ok(BuildResult {
            pages,
            failed,
            index_path,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Pick the workbooks to render.
    ///
    /// Listed names that exist win, in list order. If none of them exist the
    /// input directory is scanned instead.
    fn select_workbooks(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();

        for name in &self.config.order {
            let path = self.config.xlsx_dir.join(name);
            if path.exists() {
                found.push(path);
            } else {
                tracing::warn!("skip: not found {}", path.display());
            }
        }

        if found.is_empty() {
            found = self.scan_directory();
            tracing::debug!(
                "Scanned {} and found {} workbooks",
                self.config.xlsx_dir.display(),
                found.len()
            );
        }

        found
    }

    /// List workbook files directly inside the input directory, sorted by name.
    fn scan_directory(&self) -> Vec<PathBuf> {
        if !self.config.xlsx_dir.is_dir() {
            return Vec::new();
        }

        WalkDir::new(&self.config.xlsx_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("skip: {}", e);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| self.is_workbook(path))
            .collect()
    }

    fn is_workbook(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        // Office lock files
        if file_name.starts_with("~$") {
            return false;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        self.config
            .extensions
            .iter()
            .any(|wanted| wanted.eq_ignore_ascii_case(ext))
    }

    /// Render one workbook into the pages directory.
    fn build_page(
        &self,
        source: &Path,
        pages_dir: &Path,
        back_href: &str,
    ) -> Result<RenderedPage, BuildError> {
        let name = file_name(source);
        let output_path = pages_dir.join(sanitize_filename(&name));

        self.render_workbook_file(source, &output_path, back_href)?;

        Ok(RenderedPage {
            name,
            source: source.to_path_buf(),
            output_path,
        })
    }

    fn record(
        &self,
        source: &Path,
        result: Result<RenderedPage, BuildError>,
        pages: &mut Vec<RenderedPage>,
        failed: &mut Vec<FailedWorkbook>,
    ) -> Result<(), BuildError> {
        match result {
            Ok(page) => pages.push(page),
            Err(e) if self.config.keep_going => {
                tracing::error!("skip: {}", e);
                failed.push(FailedWorkbook {
                    source: source.to_path_buf(),
                    error: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Read a workbook and write its page to `output_path`.
    ///
    /// The page is rendered in full before anything is written, so a workbook
    /// that fails to parse leaves no file behind.
    pub fn render_workbook_file(
        &self,
        source: &Path,
        output_path: &Path,
        back_href: &str,
    ) -> Result<(), BuildError> {
        let workbook = Workbook::open(source)?;
        let html = self.render_workbook(&workbook, back_href)?;

        if let Some(parent) = output_path.parent() {
            create_dir(parent)?;
        }
        write_page(output_path, html)
    }

    /// Render a workbook page to a string.
    pub fn render_workbook(
        &self,
        workbook: &Workbook,
        back_href: &str,
    ) -> Result<String, BuildError> {
        let sheets = workbook
            .sheets
            .iter()
            .map(|sheet| SheetView {
                name: sheet.name.clone(),
                anchor: sheet.anchor(),
                rows: sheet.height(),
                cols: sheet.width(),
                cells: sheet
                    .rows
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                    .collect(),
            })
            .collect();

        let context = WorkbookContext {
            title: workbook.name.clone(),
            back_href: back_href.to_string(),
            stylesheet: self.workbook_css.clone(),
            sheets,
        };

        self.templates
            .render_workbook(&context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))
    }

    /// Render the index page for the given workbook file names.
    ///
    /// `pages_prefix` is prepended to each sanitized page name. Names are
    /// listed as given, duplicates included.
    pub fn render_index(&self, names: &[String], pages_prefix: &str) -> Result<String, BuildError> {
        let entries = names
            .iter()
            .map(|name| IndexEntry {
                name: name.clone(),
                href: format!("{}{}", pages_prefix, sanitize_filename(name)),
            })
            .collect();

        let context = IndexContext {
            title: "Spreadsheets".to_string(),
            stylesheet: self.index_css.clone(),
            entries,
        };

        self.templates
            .render_index(&context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))
    }

    /// Relative link from a workbook page back to the index.
    fn back_href(&self) -> String {
        let depth = self
            .config
            .sheets_dir
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count();

        format!("{}{}", "../".repeat(depth), self.config.index_file)
    }

    /// The index lives directly in `output_dir`; the back link depends on it.
    fn check_index_file(&self) -> Result<(), BuildError> {
        let mut components = Path::new(&self.config.index_file).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(BuildError::InvalidIndexFile(self.config.index_file.clone())),
        }
    }

    /// Relative link prefix from the index to the pages directory, `/`-separated.
    fn pages_href_prefix(&self) -> Result<String, BuildError> {
        let mut parts = Vec::new();

        for component in self.config.sheets_dir.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => {
                    return Err(BuildError::InvalidSheetsDir(
                        self.config.sheets_dir.display().to_string(),
                    ))
                }
            }
        }

        if parts.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("{}/", parts.join("/")))
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn create_dir(dir: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(dir)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", dir.display(), e)))
}

fn write_page(path: &Path, html: String) -> Result<(), BuildError> {
    fs::write(path, html)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    /// Write a workbook whose sheets each hold one string per row.
    fn write_workbook(dir: &Path, file: &str, sheets: &[(&str, &[&str])]) {
        let mut book = rust_xlsxwriter::Workbook::new();
        for (name, rows) in sheets {
            let sheet = book.add_worksheet();
            sheet.set_name(*name).unwrap();
            for (row, value) in rows.iter().enumerate() {
                sheet.write_string(row as u32, 0, *value).unwrap();
            }
        }
        book.save(dir.join(file)).unwrap();
    }

    struct Site {
        _temp: TempDir,
        input: PathBuf,
        output: PathBuf,
    }

    fn site() -> Site {
        let temp = tempdir().unwrap();
        let input = temp.path().join("xlsx");
        let output = temp.path().join("site");
        fs::create_dir_all(&input).unwrap();

        Site {
            _temp: temp,
            input,
            output,
        }
    }

    fn config(site: &Site) -> BuildConfig {
        BuildConfig {
            xlsx_dir: site.input.clone(),
            output_dir: site.output.clone(),
            minify: false,
            ..Default::default()
        }
    }

    #[test]
    fn scans_directory_in_lexicographic_order() {
        let site = site();
        write_workbook(&site.input, "B.xlsx", &[("Sheet1", &["b"])]);
        write_workbook(&site.input, "A.xlsx", &[("Sheet1", &["a"])]);
        fs::write(site.input.join("notes.txt"), "ignored").unwrap();

        let result = SiteBuilder::new(config(&site)).build().unwrap();

        let names: Vec<&str> = result.pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A.xlsx", "B.xlsx"]);
        assert!(site.output.join("sheets/A.html").exists());
        assert!(site.output.join("sheets/B.html").exists());

        let index = fs::read_to_string(site.output.join(INDEX_FILE)).unwrap();
        assert_eq!(index.matches("<li>").count(), 2);
        let a = index.find(r#"href="sheets/A.html""#).unwrap();
        let b = index.find(r#"href="sheets/B.html""#).unwrap();
        assert!(a < b);
    }

    #[test]
    fn ordered_list_takes_priority_and_skips_missing() {
        let site = site();
        write_workbook(&site.input, "a.xlsx", &[("S", &["a"])]);
        write_workbook(&site.input, "b.xlsx", &[("S", &["b"])]);
        write_workbook(&site.input, "unlisted.xlsx", &[("S", &["u"])]);

        let result = SiteBuilder::new(BuildConfig {
            order: vec![
                "b.xlsx".to_string(),
                "missing.xlsx".to_string(),
                "a.xlsx".to_string(),
            ],
            ..config(&site)
        })
        .build()
        .unwrap();

        let names: Vec<&str> = result.pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b.xlsx", "a.xlsx"]);
        assert!(!site.output.join("sheets/unlisted.html").exists());
    }

    #[test]
    fn falls_back_to_scan_when_no_listed_file_exists() {
        let site = site();
        write_workbook(&site.input, "only.xlsx", &[("S", &["x"])]);

        let result = SiteBuilder::new(BuildConfig {
            order: vec!["gone.xlsx".to_string()],
            ..config(&site)
        })
        .build()
        .unwrap();

        assert_eq!(result.pages.len(), 1);
        assert_eq!(result.pages[0].name, "only.xlsx");
    }

    #[test]
    fn scan_respects_extensions_and_lock_files() {
        let site = site();
        write_workbook(&site.input, "upper.XLSX", &[("S", &["x"])]);
        write_workbook(&site.input, "~$upper.xlsx", &[("S", &["x"])]);
        write_workbook(&site.input, "macro.xlsm", &[("S", &["x"])]);

        let builder = SiteBuilder::new(config(&site));
        let found: Vec<String> = builder
            .scan_directory()
            .iter()
            .map(|p| file_name(p))
            .collect();
        assert_eq!(found, vec!["upper.XLSX"]);

        let builder = SiteBuilder::new(BuildConfig {
            extensions: vec!["xlsx".to_string(), "xlsm".to_string()],
            ..config(&site)
        });
        let found: Vec<String> = builder
            .scan_directory()
            .iter()
            .map(|p| file_name(p))
            .collect();
        assert_eq!(found, vec!["macro.xlsm", "upper.XLSX"]);
    }

    #[test]
    fn no_workbooks_is_an_error_and_writes_nothing() {
        let site = site();

        let err = SiteBuilder::new(BuildConfig {
            order: vec!["absent.xlsx".to_string()],
            ..config(&site)
        })
        .build()
        .unwrap_err();

        assert!(matches!(err, BuildError::NoWorkbooks(_)));
        assert!(err.to_string().starts_with("No workbook files found in"));
        assert!(!site.output.exists());
    }

    #[test]
    fn missing_input_directory_is_an_error() {
        let site = site();

        let err = SiteBuilder::new(BuildConfig {
            xlsx_dir: site.input.join("nope"),
            ..config(&site)
        })
        .build()
        .unwrap_err();

        assert!(matches!(err, BuildError::NoWorkbooks(_)));
    }

    #[test]
    fn rendering_is_idempotent() {
        let site = site();
        write_workbook(
            &site.input,
            "stable.xlsx",
            &[("One", &["x", "y"][..]), ("Two", &["<z>"][..])],
        );

        let builder = SiteBuilder::new(BuildConfig {
            minify: true,
            ..config(&site)
        });

        builder.build().unwrap();
        let page = site.output.join("sheets/stable.html");
        let first = fs::read(&page).unwrap();
        let first_index = fs::read(site.output.join(INDEX_FILE)).unwrap();

        builder.build().unwrap();
        assert_eq!(first, fs::read(&page).unwrap());
        assert_eq!(first_index, fs::read(site.output.join(INDEX_FILE)).unwrap());
    }

    #[test]
    fn colliding_anchors_still_render() {
        let site = site();
        write_workbook(
            &site.input,
            "collide.xlsx",
            &[("Data 1", &["first"]), ("Data-1", &["second"])],
        );

        SiteBuilder::new(config(&site)).build().unwrap();

        let html = fs::read_to_string(site.output.join("sheets/collide.html")).unwrap();
        assert_eq!(html.matches(r#"id="sheet-data-1""#).count(), 2);
        assert!(html.contains("<td>first</td>"));
        assert!(html.contains("<td>second</td>"));
    }

    #[test]
    fn page_lists_sheets_with_counts_and_back_link() {
        let site = site();
        write_workbook(
            &site.input,
            "report.xlsx",
            &[("Summary", &["a", "b", "c"][..]), ("Notes & <Misc>", &["n"][..])],
        );

        SiteBuilder::new(config(&site)).build().unwrap();

        let html = fs::read_to_string(site.output.join("sheets/report.html")).unwrap();
        assert!(html.contains("<title>report.xlsx</title>"));
        assert!(html.contains(r#"href="../spreadsheets.html""#));
        assert!(html.contains(r##"<a href="#sheet-summary">Summary</a>"##));
        assert!(html.contains("3 rows &times; 1 columns"));
        assert!(html.contains(r#"id="sheet-notes----misc""#));
        assert!(html.contains("<h2>Notes &amp; &lt;Misc&gt;</h2>"));
        assert!(html.find("sheet-summary") < html.find("sheet-notes"));
    }

    #[test]
    fn nested_sheets_dir_adjusts_links() {
        let site = site();
        write_workbook(&site.input, "A.xlsx", &[("S", &["a"])]);

        SiteBuilder::new(BuildConfig {
            sheets_dir: PathBuf::from("pages/books"),
            ..config(&site)
        })
        .build()
        .unwrap();

        let page = fs::read_to_string(site.output.join("pages/books/A.html")).unwrap();
        assert!(page.contains(r#"href="../../spreadsheets.html""#));

        let index = fs::read_to_string(site.output.join(INDEX_FILE)).unwrap();
        assert!(index.contains(r#"href="pages/books/A.html""#));
    }

    #[test]
    fn parent_sheets_dir_is_rejected() {
        let site = site();
        write_workbook(&site.input, "A.xlsx", &[("S", &["a"])]);

        let err = SiteBuilder::new(BuildConfig {
            sheets_dir: PathBuf::from("../outside"),
            ..config(&site)
        })
        .build()
        .unwrap_err();

        assert!(matches!(err, BuildError::InvalidSheetsDir(_)));
    }

    #[test]
    fn index_outside_output_dir_is_rejected() {
        let site = site();
        write_workbook(&site.input, "A.xlsx", &[("S", &["a"])]);

        for index_file in ["../x.html", "nested/x.html", "/tmp/x.html", ""] {
            let err = SiteBuilder::new(BuildConfig {
                index_file: index_file.to_string(),
                ..config(&site)
            })
            .build()
            .unwrap_err();

            assert!(matches!(err, BuildError::InvalidIndexFile(_)), "{index_file}");
        }
        assert!(!site.output.exists());
    }

    #[test]
    fn custom_index_file_is_linked_back() {
        let site = site();
        write_workbook(&site.input, "A.xlsx", &[("S", &["a"])]);

        let result = SiteBuilder::new(BuildConfig {
            index_file: "index.html".to_string(),
            ..config(&site)
        })
        .build()
        .unwrap();

        assert_eq!(result.index_path, site.output.join("index.html"));
        let page = fs::read_to_string(site.output.join("sheets/A.html")).unwrap();
        assert!(page.contains(r#"href="../index.html""#));
    }

    #[cfg(unix)]
    #[test]
    fn scan_skips_unreadable_entries() {
        let site = site();
        write_workbook(&site.input, "good.xlsx", &[("S", &["g"])]);
        std::os::unix::fs::symlink(
            site.input.join("missing-target.xlsx"),
            site.input.join("dangling.xlsx"),
        )
        .unwrap();

        let builder = SiteBuilder::new(config(&site));
        let found: Vec<String> = builder
            .scan_directory()
            .iter()
            .map(|p| file_name(p))
            .collect();

        assert_eq!(found, vec!["good.xlsx"]);
    }

    #[test]
    fn malformed_workbook_aborts_by_default() {
        let site = site();
        write_workbook(&site.input, "a.xlsx", &[("S", &["a"])]);
        fs::write(site.input.join("b.xlsx"), "garbage").unwrap();
        write_workbook(&site.input, "c.xlsx", &[("S", &["c"])]);

        let err = SiteBuilder::new(config(&site)).build().unwrap_err();

        assert!(matches!(err, BuildError::Workbook(_)));
        assert!(site.output.join("sheets/a.html").exists());
        assert!(!site.output.join("sheets/b.html").exists());
        assert!(!site.output.join("sheets/c.html").exists());
        assert!(!site.output.join(INDEX_FILE).exists());
    }

    #[test]
    fn keep_going_skips_malformed_workbooks() {
        let site = site();
        write_workbook(&site.input, "a.xlsx", &[("S", &["a"])]);
        fs::write(site.input.join("b.xlsx"), "garbage").unwrap();
        write_workbook(&site.input, "c.xlsx", &[("S", &["c"])]);

        let result = SiteBuilder::new(BuildConfig {
            keep_going: true,
            ..config(&site)
        })
        .build()
        .unwrap();

        let names: Vec<&str> = result.pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a.xlsx", "c.xlsx"]);
        assert_eq!(result.failed.len(), 1);
        assert!(result.failed[0].source.ends_with("b.xlsx"));

        let index = fs::read_to_string(&result.index_path).unwrap();
        assert!(!index.contains("b.xlsx"));
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let site = site();
        for name in ["c.xlsx", "a.xlsx", "b.xlsx"] {
            write_workbook(&site.input, name, &[("S", &[name])]);
        }

        SiteBuilder::new(config(&site)).build().unwrap();
        let sequential = fs::read(site.output.join(INDEX_FILE)).unwrap();

        let result = SiteBuilder::new(BuildConfig {
            parallel: true,
            ..config(&site)
        })
        .build()
        .unwrap();

        let names: Vec<&str> = result.pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx", "c.xlsx"]);
        assert_eq!(sequential, fs::read(site.output.join(INDEX_FILE)).unwrap());
    }

    #[test]
    fn index_keeps_duplicates_and_order() {
        let site = site();
        let builder = SiteBuilder::new(config(&site));

        let html = builder
            .render_index(
                &[
                    "z.xlsx".to_string(),
                    "a.xlsx".to_string(),
                    "z.xlsx".to_string(),
                ],
                "sheets/",
            )
            .unwrap();

        assert_eq!(html.matches(r#"href="sheets/z.html""#).count(), 2);
        assert!(html.find("sheets/z.html") < html.find("sheets/a.html"));
    }

    #[test]
    fn render_workbook_file_creates_parent_and_skips_bad_input() {
        let site = site();
        write_workbook(&site.input, "one.xlsx", &[("S", &["1"])]);
        let builder = SiteBuilder::new(config(&site));

        let out = site.output.join("deep/dir/one.html");
        builder
            .render_workbook_file(&site.input.join("one.xlsx"), &out, "../../index.html")
            .unwrap();
        assert!(out.exists());

        let missing = site.output.join("missing.html");
        let err = builder
            .render_workbook_file(&site.input.join("none.xlsx"), &missing, "index.html")
            .unwrap_err();
        assert!(matches!(err, BuildError::Workbook(_)));
        assert!(!missing.exists());
    }
}
