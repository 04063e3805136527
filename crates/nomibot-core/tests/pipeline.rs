use nomibot_core::answer::{extract_images, extract_page_reference, scrub};
use nomibot_core::{AnswerPipeline, intent};

#[test]
fn labeled_raw_answer_end_to_end() {
    let raw = "Answer: Visit our site.\n\
               Page Reference URL: - https://example.com/page\n\
               Image URL: https://example.com/pic.png";

    let result = AnswerPipeline::process("Where do I find pricing?", raw);

    assert_eq!(
        result.page_reference_url.as_deref(),
        Some("https://example.com/page")
    );
    assert_eq!(
        result.images,
        Some(vec!["https://example.com/pic.png".to_string()])
    );
    assert!(!result.plain_text.contains("Page Reference URL:"));
    assert!(!result.plain_text.contains("Image URL:"));
}

#[test]
fn unlabeled_raw_answer_end_to_end() {
    let result = AnswerPipeline::process("Hello", "Answer: Just a plain reply.");

    assert_eq!(result.plain_text, "NomiBot: Answer: Just a plain reply.");
    assert_eq!(result.page_reference_url, None);
    assert_eq!(result.images, None);
}

#[test]
fn messy_model_output_end_to_end() {
    let raw = "### Answer: **Billing** works like this [doc2]:\n\
               - open your account\n\
               - pick an invoice\n\n\n\n\
               ![screenshot](https://example.com/billing.png)\n\
               Content from: https://example.com/kb/billing\n\
               Page Reference URL:\n- https://example.com/kb/billing\n\
               Image URL: N/A";

    let result = AnswerPipeline::process("How does billing work?", raw);

    assert_eq!(
        result.page_reference_url.as_deref(),
        Some("https://example.com/kb/billing")
    );
    assert_eq!(
        result.images,
        Some(vec!["https://example.com/billing.png".to_string()])
    );
    assert!(!result.plain_text.contains("Content from:"));
    assert!(!result.plain_text.contains("![screenshot]"));
    assert!(!result.html.contains('*'));
    assert!(!result.html.contains("[doc2]"));
    assert!(result.html.starts_with("<div>"));
    assert!(result.html.contains("<strong>Page Reference URL:</strong>"));
}

#[test]
fn sanitization_is_idempotent_over_model_shapes() {
    let samples = [
        "Answer: a ![x](https://e.com/x.png)\nImage URL: https://e.com/y.jpg",
        "Answer: b\nPage Reference URL: - https://e.com/p\nNot available",
        "Answer: c [https://e.com/z.svg]\nContent from: https://e.com/src",
    ];

    for sample in samples {
        let once = scrub(sample);
        assert_eq!(scrub(&once), once);
    }
}

#[test]
fn extracted_page_reference_never_points_at_an_image() {
    let samples = [
        "Page Reference URL: - https://e.com/a.PNG\nPage Reference URL: - https://e.com/a",
        "Page Reference URL: - https://e.com/b.webp",
        "Page Reference URL: - https://e.com/page.html",
    ];

    for sample in samples {
        if let Some(url) = extract_page_reference(sample) {
            let lower = url.to_lowercase();
            for ext in [".png", ".jpg", ".jpeg", ".svg", ".gif", ".webp"] {
                assert!(!lower.ends_with(ext), "{url} ends with {ext}");
            }
        }
    }
}

#[test]
fn image_list_has_no_case_insensitive_duplicates() {
    let raw = "![a](https://E.com/One.png) [b](https://e.com/one.PNG)\n\
               Image URL: https://e.com/two.gif\n[https://E.COM/TWO.GIF]";

    let images = extract_images(raw);
    let mut lowered: Vec<String> = images.iter().map(|u| u.to_lowercase()).collect();
    lowered.sort();
    lowered.dedup();
    assert_eq!(lowered.len(), images.len());
}

#[test]
fn intent_examples_from_the_contract() {
    assert!(intent::wants_human("I want to talk to a human"));
    assert!(!intent::wants_human("What are your opening hours?"));
}

#[test]
fn list_breaks_collapse_in_rendered_html() {
    let raw = "Answer: Steps below\n\n<li>first</li>\n<li>second</li>";
    let result = AnswerPipeline::process("q", raw);

    assert!(!result.html.contains("</li></br>"));
    assert!(result.html.contains("<ol>"));
}
