//! Human-facing rendering of an extraction: annotated JSON and an HTML preview.

use crate::error::Result;
use crate::pipeline::Extraction;
use regex::Regex;
use std::sync::LazyLock;

/// A record field and its JSON string value, as found in pretty-printed JSON
static FIELD_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(headline|link|description)": ("(?:[^"\\]|\\.)*")"#)
        .expect("field pair pattern is valid")
});

const PREVIEW_STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
.block { border-bottom: 1px solid #ddd; padding: 0.5em 0; }
pre { background: #f6f8fa; padding: 1em; }
.key { color: #6f42c1; }
.value { color: #032f62; }
.value.headline { font-weight: bold; }
.value.link { color: #0366d6; }";

/// Escapes `json` for HTML and wraps every record field in highlight spans.
pub fn annotate_json(json: &str) -> String {
    let escaped = html_escape::encode_text(json);

    FIELD_PAIR
        .replace_all(&escaped, r#"<span class="key">"$1"</span>: <span class="value $1">$2</span>"#)
        .into_owned()
}

/// Builds a standalone HTML page showing the kept result blocks and their JSON.
pub fn render_preview(extraction: &Extraction) -> Result<String> {
    let json = extraction.collection.to_json_pretty()?;

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Search results preview</title>\n<style>\n");
    page.push_str(PREVIEW_STYLE);
    page.push_str("\n</style>\n</head>\n<body>\n<section class=\"results\">\n");
    for block in &extraction.preview {
        page.push_str("<div class=\"block\">");
        page.push_str(block);
        page.push_str("</div>\n");
    }
    page.push_str("</section>\n<pre class=\"json\">");
    page.push_str(&annotate_json(&json));
    page.push_str("</pre>\n</body>\n</html>\n");

    Ok(page)
}
