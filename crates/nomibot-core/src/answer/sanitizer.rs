use regex::Regex;
use std::sync::LazyLock;

use super::labels::{
    BRACKET_URL, CONTENT_FROM, IMAGE, MARKDOWN_IMAGE, NOT_AVAILABLE, PAGE_REFERENCE,
    PAGE_REF_CONTENT_FROM,
};

/// The scrub sequence, in contract order. Each stage removes one scaffolding
/// shape from the output of the previous stage; the URL-bearing stages come
/// straight from the shared label table.
#[must_use]
pub fn scrub_stages() -> Vec<(&'static str, &'static Regex)> {
    let mut stages: Vec<(&'static str, &'static Regex)> = vec![
        ("markdown-image", &*MARKDOWN_IMAGE),
        ("bracket-url", &*BRACKET_URL),
    ];

    for (name, removal) in &IMAGE.removals {
        stages.push((*name, removal));
    }
    for (name, removal) in &PAGE_REFERENCE.removals {
        stages.push((*name, removal));
    }

    stages.push(("not-available", &*NOT_AVAILABLE));
    stages.push(("content-from", &*CONTENT_FROM));
    stages.push(("page-ref-content-from", &*PAGE_REF_CONTENT_FROM));

    stages
}

/// Removes model scaffolding from a raw answer: image tags, bracket URL
/// tokens, labeled URL segments, placeholder tokens and retrieval-source
/// annotations. Total and idempotent over the shapes the upstream model emits.
#[must_use]
pub fn scrub(text: &str) -> String {
    scrub_stages()
        .iter()
        .fold(text.to_string(), |acc, (_, removal)| {
            removal.replace_all(&acc, "").into_owned()
        })
}

static DOC_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[doc\d+\]").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s*").unwrap());
static EXTRA_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static WIDE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*-\s*").unwrap());

/// Citation-cleaning pass applied before HTML rendering: `[docN]` markers,
/// the bot prefix, heading markers, line-break normalization, emphasis
/// markers, space runs and leading bullets.
///
/// Stripping `*` is lossy: literal asterisks that are not markdown emphasis
/// go with it. That matches the upstream model's formatting conventions.
#[must_use]
pub fn clean_citations(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = DOC_MARKER.replace_all(text, "");
    let text = text.replace("NomiBot: Answer:", "");
    let text = text.trim();
    let text = HEADING.replace_all(text, "");
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = EXTRA_BREAKS.replace_all(&text, "\n\n");
    let text = text.replace('*', "");
    let text = WIDE_SPACE.replace_all(&text, " ");

    BULLET.replace_all(&text, "").into_owned()
}
