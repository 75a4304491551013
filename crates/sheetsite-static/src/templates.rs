//! Template engine for rendering workbook and index pages.

use minijinja::{context, Environment, Value};

/// A sheet as shown on its workbook page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SheetView {
    /// Sheet name
    pub name: String,
    /// Anchor ID, shared by the nav link and the section
    pub anchor: String,
    /// Row count
    pub rows: usize,
    /// Column count
    pub cols: usize,
    /// Cell text, row by row
    pub cells: Vec<Vec<String>>,
}

/// Context for rendering a workbook page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct WorkbookContext {
    /// Workbook file name
    pub title: String,
    /// Link back to the index page
    pub back_href: String,
    /// Inline stylesheet
    pub stylesheet: String,
    /// Sheets in workbook order
    pub sheets: Vec<SheetView>,
}

/// An index page entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexEntry {
    /// Workbook file name
    pub name: String,
    /// Relative link to the workbook page
    pub href: String,
}

/// Context for rendering the index page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexContext {
    /// Page title
    pub title: String,
    /// Inline stylesheet
    pub stylesheet: String,
    /// Entries in caller order
    pub entries: Vec<IndexEntry>,
}

/// Template engine using minijinja.
///
/// Templates end in `.html`, so every `{{ }}` expression is HTML-escaped
/// unless it goes through `safe` or `href`.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_filter("href", href_filter);

        env.add_template("workbook.html", WORKBOOK_TEMPLATE)
            .expect("Failed to add workbook template");

        env.add_template("index.html", INDEX_TEMPLATE)
            .expect("Failed to add index template");

        Self { env }
    }

    /// Render a workbook page.
    pub fn render_workbook(&self, context: &WorkbookContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("workbook.html")?;

        tmpl.render(context! {
            title => &context.title,
            back_href => &context.back_href,
            stylesheet => &context.stylesheet,
            sheets => &context.sheets,
        })
    }

    /// Render the index page.
    pub fn render_index(&self, context: &IndexContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            title => &context.title,
            stylesheet => &context.stylesheet,
            entries => &context.entries,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a relative URL for an attribute, keeping `/` readable.
fn href_filter(value: String) -> Value {
    Value::from_safe_string(html_escape(&value))
}

/// Escape HTML special characters including single quotes for XSS prevention.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const WORKBOOK_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ title }}</title>
  <style>{{ stylesheet | safe }}</style>
</head>
<body>
  <div class="header">
    <h1>{{ title }}</h1>
    <div class="meta"><a href="{{ back_href | href }}">&larr; Back to list</a></div>
  </div>
  <div class="sheet-nav"><div class="small">Sheets:</div>
    {%- for sheet in sheets %}<a href="#sheet-{{ sheet.anchor }}">{{ sheet.name }}</a>{% endfor %}</div>
{% for sheet in sheets %}
  <div class="section" id="sheet-{{ sheet.anchor }}">
    <h2>{{ sheet.name }}</h2>
    <div class="small">{{ sheet.rows }} rows &times; {{ sheet.cols }} columns</div>
    <div class="wrap"><table>
      <tbody>
{%- for row in sheet.cells %}
        <tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
{%- endfor %}
      </tbody>
    </table></div>
  </div>
{% endfor %}
</body>
</html>
"##;

const INDEX_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ title }}</title>
  <style>{{ stylesheet | safe }}</style>
</head>
<body>
  <h1>{{ title }}</h1>
  <div class="note">Click a filename to open its static HTML view in a new tab.</div>
  <ul>
  {%- for entry in entries %}
    <li><a href="{{ entry.href | href }}" target="_blank" rel="noopener">{{ entry.name }}</a></li>
  {%- endfor %}
  </ul>
</body>
</html>
"##;
