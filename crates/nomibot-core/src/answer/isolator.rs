const ANSWER_LABEL: &str = "Answer:";

/// Keeps only the first `Answer:`-labeled block when the model duplicated the
/// answer under repeated headers. Text without the label, or with an empty
/// first block, passes through unchanged.
#[must_use]
pub fn isolate_first_answer(text: &str) -> String {
    let Some(start) = text.find(ANSWER_LABEL) else {
        return text.to_string();
    };

    let body = &text[start + ANSWER_LABEL.len()..];
    let body = match body.find("\nAnswer:") {
        Some(end) => &body[..end],
        None => body,
    };

    let body = body.trim();
    if body.is_empty() {
        text.to_string()
    } else {
        body.to_string()
    }
}
