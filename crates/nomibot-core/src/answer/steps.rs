use regex::Regex;
use std::sync::LazyLock;

static STEPS_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bSteps\b").unwrap());
static ALREADY_NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());
static IMAGE_URL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Image URL:\s*)?\[?https?://[^\]\s]+(\.png|\.jpg|\.jpeg|\.gif|\.webp|\.svg)?\]?")
        .unwrap()
});

/// Renumbers the lines following a `Steps` marker sequentially from 1.
///
/// Lines before the marker, blank lines, already-numbered lines and lines
/// carrying an image URL are left untouched; a leading `-` on a numbered line
/// is dropped. Text without a marker passes through unchanged.
///
/// Available transform only: the main answer flow does not invoke it.
#[must_use]
pub fn number_steps(text: &str) -> String {
    if text.trim().is_empty() || !STEPS_MARKER.is_match(text) {
        return text.to_string();
    }

    let lines: Vec<&str> = text.split(['\r', '\n']).collect();

    let Some(marker) = lines.iter().position(|line| STEPS_MARKER.is_match(line)) else {
        return text.to_string();
    };

    let start = marker + 1;
    if start >= lines.len() {
        return text.to_string();
    }

    let mut out = String::new();

    for line in &lines[..start] {
        out.push_str(line);
        out.push('\n');
    }

    let mut step = 1;

    for line in &lines[start..] {
        let line = line.trim();

        if line.is_empty() {
            out.push('\n');
            continue;
        }

        if ALREADY_NUMBERED.is_match(line) || is_image_url_line(line) {
            out.push_str(line);
            out.push('\n');
        } else {
            let line = line.strip_prefix('-').map_or(line, str::trim_start);
            out.push_str(&format!("{step}. {line}\n"));
            step += 1;
        }
    }

    out.trim_end().to_string()
}

fn is_image_url_line(line: &str) -> bool {
    IMAGE_URL_LINE.is_match(line)
}
