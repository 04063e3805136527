use regex::Regex;
use std::sync::LazyLock;

/// Capture and removal shapes for one labeled URL field.
///
/// The extractor and the sanitizer read the same entry, so the shape that
/// captures a URL and the shapes that scrub its residue cannot drift apart.
pub struct UrlLabel {
    pub label: &'static str,
    pub capture: Regex,
    pub removals: Vec<(&'static str, Regex)>,
}

/// The canonical non-image source link for an answer. The model emits it as
/// `Page Reference URL:` followed, possibly across lines, by a hyphen and a
/// bare URL.
pub static PAGE_REFERENCE: LazyLock<UrlLabel> = LazyLock::new(|| UrlLabel {
    label: "Page Reference URL:",
    capture: Regex::new(r#"(?i)Page Reference URL:[\s\S]*?-\s*(https?://[^\s)<>"']+)"#).unwrap(),
    removals: vec![
        (
            "page-ref-markdown-link",
            Regex::new(r"(?i)Page Reference URL:\s*\[.*?\]\((https?://[^\s)]+)\)").unwrap(),
        ),
        (
            // Tolerates the list-item hyphen the capture shape requires.
            "page-ref-bare-url",
            Regex::new(r"(?i)Page Reference URL:\s*-?\s*(https?://[^\s)]+)").unwrap(),
        ),
    ],
});

/// Image links labeled inline as `Image URL: https://...`.
pub static IMAGE: LazyLock<UrlLabel> = LazyLock::new(|| UrlLabel {
    label: "Image URL:",
    capture: Regex::new(r"(?i)Image URL:\s*(https?://\S+)").unwrap(),
    removals: vec![
        ("image-url", Regex::new(r"(?i)Image URL:\s*https?://\S+").unwrap()),
        ("image-label", Regex::new(r"(?i)Image URL:\s*").unwrap()),
    ],
});

/// Markdown image syntax `![alt](url)`. Captured for the image list and
/// scrubbed from the answer body with the same shape.
pub static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)!\[.*?\]\((https?://[^\s)]+)\)").unwrap());

/// Markdown link syntax `[text](url)`. Capture-only: a superset of
/// [`MARKDOWN_IMAGE`], so the same URL may be seen twice before dedup.
pub static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[.*?\]\((https?://[^\s)]+)\)").unwrap());

/// Bracket-only URL tokens `[https://...]`.
pub static BRACKET_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(https?://[^\s\]]+)\]").unwrap());

/// Placeholder tokens the model emits when a field has no value.
pub static NOT_AVAILABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(</?br\s*/?>)?\s*(N/A|Not\s*available\.?)\s*").unwrap());

/// Source annotations leaked from the retrieval context.
pub static CONTENT_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Content from:\s*https?://[^\s<]+").unwrap());

/// A dangling page-reference label glued to a source annotation by a break tag.
pub static PAGE_REF_CONTENT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Page Reference URL:\s*</?br\s*/?>\s*Content from:\s*https?://[^\s<]+").unwrap()
});

/// Recognized image file extensions. A page reference must never point at one.
pub static IMAGE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(png|jpg|jpeg|svg|gif|webp)$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_carry_their_wire_labels() {
        assert_eq!(PAGE_REFERENCE.label, "Page Reference URL:");
        assert_eq!(IMAGE.label, "Image URL:");
    }

    #[test]
    fn page_reference_capture_requires_hyphen() {
        let caps = PAGE_REFERENCE
            .capture
            .captures("Page Reference URL:\n- https://example.com/page")
            .unwrap();
        assert_eq!(&caps[1], "https://example.com/page");

        assert!(PAGE_REFERENCE
            .capture
            .captures("Page Reference URL: nothing here")
            .is_none());
    }

    #[test]
    fn page_reference_removal_covers_both_forms() {
        let bare = &PAGE_REFERENCE.removals[1].1;
        assert!(bare.is_match("Page Reference URL: https://example.com/a"));
        assert!(bare.is_match("Page Reference URL: - https://example.com/a"));
    }

    #[test]
    fn image_extension_is_case_insensitive() {
        assert!(IMAGE_EXTENSION.is_match("https://example.com/pic.PNG"));
        assert!(IMAGE_EXTENSION.is_match("https://example.com/pic.webp"));
        assert!(!IMAGE_EXTENSION.is_match("https://example.com/page"));
    }

    #[test]
    fn markdown_link_is_superset_of_image() {
        let text = "![logo](https://example.com/logo.png)";
        assert!(MARKDOWN_IMAGE.is_match(text));
        assert!(MARKDOWN_LINK.is_match(text));
    }
}
