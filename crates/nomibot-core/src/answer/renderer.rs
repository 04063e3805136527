use regex::Regex;
use std::sync::LazyLock;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\(.?)\\*").unwrap());
static BREAK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static TRAILING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\\n|\n|\r|\s)+$").unwrap());

/// Renders the narrow markdown subset the model emits into a fixed HTML
/// shape: emphasis becomes a `<label>` tag, newline runs become break tags,
/// break tags directly after a list-item close are dropped, any list items
/// get an `<ol>` wrapper and the whole fragment lands in a `<div>`.
#[must_use]
pub fn render_html(text: &str) -> String {
    let html = EMPHASIS.replace_all(text, "<label>$1</label>");
    let html = BREAK_RUNS.replace_all(&html, "</br>");
    let mut html = html.replace("</li></br>", "</li>");

    if html.contains("<li>") {
        html = format!("<ol>{html}</ol>");
    }

    let html = format!("<div>{html}</div>");
    TRAILING.replace_all(&html, "").into_owned()
}
