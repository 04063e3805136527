use regex::Regex;
use std::sync::LazyLock;

static HUMAN_ESCALATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(speak|talk|connect|chat|need|want|ask)\b.*\b(human|agent|person|representative)\b")
        .unwrap()
});

/// True when the question asks for escalation to a human agent: a request
/// verb followed anywhere later by a human-referent noun, case-insensitive.
/// Total; empty input is not an escalation.
#[must_use]
pub fn wants_human(question: &str) -> bool {
    HUMAN_ESCALATION.is_match(question)
}
