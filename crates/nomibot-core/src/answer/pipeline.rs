use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::LazyLock;

use super::extractor::Extraction;
use super::{isolator, renderer, sanitizer};
use crate::intent;

/// An empty page-reference label boxed in by break tags, left behind when the
/// scrub stages removed the URL but not the line around it.
static DANGLING_LABEL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?br\s*/?>\s*Page Reference URL:\s*</?br\s*/?>").unwrap()
});

/// Any remaining page-reference label and its adjacent break tags. Runs
/// before the reference fragment is appended, so the appended label itself is
/// never at risk.
static RESIDUAL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(</?br\s*/?>)?\s*Page Reference URL:\s*(</?br\s*/?>)?\s*").unwrap()
});

/// The presentation-ready outcome of one answer request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    pub plain_text: String,
    pub html: String,
    pub images: Option<Vec<String>>,
    #[serde(serialize_with = "yes_no")]
    pub is_human_ask: bool,
    pub page_reference_url: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn yes_no<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "yes" } else { "no" })
}

/// Fixed post-processing sequence over a raw model answer: extract URLs,
/// scrub scaffolding, isolate the first answer block, clean citations, render
/// HTML and assemble the final record. Every stage is total; the pipeline
/// never fails for any string input.
pub struct AnswerPipeline;

impl AnswerPipeline {
    #[must_use]
    pub fn process(question: &str, raw_answer: &str) -> ChatResult {
        let raw = raw_answer.trim();

        let Extraction {
            page_reference_url,
            image_urls,
        } = Extraction::from_raw(raw);

        let scrubbed = sanitizer::scrub(raw);
        let answer = isolator::isolate_first_answer(&scrubbed);
        let cleaned = sanitizer::clean_citations(&answer);
        let html = renderer::render_html(&cleaned);
        let html = assemble_html(html, page_reference_url.as_deref());

        ChatResult {
            plain_text: format!("NomiBot: Answer: {}", answer.trim()),
            html,
            images: if image_urls.is_empty() {
                None
            } else {
                Some(image_urls)
            },
            is_human_ask: intent::wants_human(question),
            page_reference_url,
        }
    }
}

fn assemble_html(html: String, page_reference_url: Option<&str>) -> String {
    let html = DANGLING_LABEL_BLOCK.replace_all(&html, "");
    let mut html = RESIDUAL_LABEL.replace_all(&html, "").into_owned();

    if let Some(url) = page_reference_url {
        html.push_str(&format!(
            "<br><strong>Page Reference URL:</strong> <a href='{url}' target='_blank'>{url}</a>"
        ));
    }

    html
}
