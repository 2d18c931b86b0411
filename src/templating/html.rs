//! Standalone HTML page with inline styles

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};
use tracing::debug;

use super::{Frame, Page, Template};
use crate::language::ResolutionError;

static PROLOGUE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{{ if title }}<title class="reportage-title">{title}</title>{{ else }}<title>{name}</title>{{ endif }}
<style>
{styles | unescaped}
</style>
</head>
<body>
<div class="reportage-main-container">
"#;

static EPILOGUE: &str = "</div>\n</body>\n</html>\n";

// Substituted by hand rather than by the template engine, which would
// otherwise try to interpret the braces of the rules.
static STYLES: &str = r#"body {
    font-family: sans-serif;
    line-height: 1.5;
}
.reportage-main-container {
    width: WIDTH%;
    margin: 0 auto;
}
.reportage-anchor-link {
    visibility: hidden;
    margin-left: 0.3em;
    text-decoration: none;
}
h1:hover > .reportage-anchor-link, h2:hover > .reportage-anchor-link,
h3:hover > .reportage-anchor-link, h4:hover > .reportage-anchor-link,
h5:hover > .reportage-anchor-link, h6:hover > .reportage-anchor-link {
    visibility: visible;
}
.reportage-caption {
    text-align: center;
    margin: 0.5em 0;
}
.reportage-table-wrapper, .reportage-figure-wrapper, .reportage-code-wrapper {
    display: flex;
    flex-direction: column;
    align-items: center;
    margin: 1em 0;
}"#;

#[derive(Serialize)]
struct Context<'a> {
    name: &'a str,
    title: Option<&'a str>,
    styles: String,
}

/// A self-contained HTML page; the report needs nothing but a browser.
pub struct Html;

impl Template for Html {
    fn render(&self, page: &Page) -> Result<Frame, ResolutionError> {
        let mut tt = TinyTemplate::new();
        tt.add_formatter("unescaped", format_unescaped);
        tt.add_template("prologue", PROLOGUE)
            .map_err(|error| ResolutionError::Template(error.to_string()))?;

        let context = Context {
            name: page.name,
            title: page.title,
            styles: STYLES.replace("WIDTH", &page.width.to_string()),
        };

        let prologue = tt
            .render("prologue", &context)
            .map_err(|error| ResolutionError::Template(error.to_string()))?;

        debug!("Rendered page prologue for {}", page.name);

        Ok(Frame {
            prologue,
            epilogue: EPILOGUE.to_string(),
        })
    }
}
