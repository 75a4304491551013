//! Embedded stylesheets for generated pages.
//!
//! Pages carry their CSS inline so the output works offline and without any
//! extra files next to it.

/// Stylesheet pipeline.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Stylesheet for workbook pages.
    pub fn workbook_css(minify: bool) -> String {
        Self::prepare(WORKBOOK_CSS, minify)
    }

    /// Stylesheet for the index page.
    pub fn index_css(minify: bool) -> String {
        Self::prepare(INDEX_CSS, minify)
    }

    fn prepare(css: &str, minify: bool) -> String {
        if !minify {
            return css.to_string();
        }

        match Self::minify_css(css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Keeping unminified stylesheet: {}", e);
                css.to_string()
            }
        }
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const WORKBOOK_CSS: &str = r#"
:root { color-scheme: light dark; }
body {
  font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
  margin: 24px;
  line-height: 1.4;
}
a { text-decoration: none; }
a:hover { text-decoration: underline; }
.header {
  display: flex;
  gap: 14px;
  align-items: baseline;
  flex-wrap: wrap;
  margin-bottom: 16px;
}
.header h1 {
  font-size: 22px;
  margin: 0;
}
.meta {
  color: #666;
  font-size: 13px;
}
.sheet-nav {
  margin: 10px 0 18px;
  padding: 10px 12px;
  border: 1px solid rgba(125, 125, 125, .35);
  border-radius: 10px;
}
.sheet-nav a {
  margin-right: 10px;
  white-space: nowrap;
}
table {
  border-collapse: collapse;
  margin: 10px 0 24px;
  width: max-content;
  max-width: 100%;
}
td {
  border: 1px solid rgba(125, 125, 125, .35);
  padding: 4px 8px;
  vertical-align: top;
  font-size: 13px;
}
.section {
  margin-top: 26px;
}
.section h2 {
  font-size: 18px;
  margin: 0 0 6px;
}
.small {
  font-size: 12px;
  color: #666;
}
.wrap {
  overflow-x: auto;
  border: 1px solid rgba(125, 125, 125, .25);
  border-radius: 12px;
  padding: 10px;
}
"#;

const INDEX_CSS: &str = r#"
body {
  font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
  margin: 24px;
}
h1 { margin: 0 0 10px; font-size: 22px; }
.note { color: #666; font-size: 13px; margin-bottom: 14px; }
ul { line-height: 1.8; }
a { text-decoration: none; }
a:hover { text-decoration: underline; }
"#;
