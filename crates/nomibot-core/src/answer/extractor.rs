use std::collections::HashSet;

use serde::Serialize;
use url::Url;

use super::labels::{BRACKET_URL, IMAGE, IMAGE_EXTENSION, MARKDOWN_IMAGE, MARKDOWN_LINK, PAGE_REFERENCE};

/// URLs pulled out of a raw answer before the body is scrubbed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    pub page_reference_url: Option<String>,
    pub image_urls: Vec<String>,
}

impl Extraction {
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self {
            page_reference_url: extract_page_reference(raw),
            image_urls: extract_images(raw),
        }
    }

    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.image_urls.is_empty()
    }
}

/// First page-reference candidate whose path does not end in a known image
/// extension. Candidates are taken in order of appearance.
#[must_use]
pub fn extract_page_reference(raw: &str) -> Option<String> {
    PAGE_REFERENCE
        .capture
        .captures_iter(raw)
        .map(|caps| caps[1].trim().to_string())
        .find(|url| !IMAGE_EXTENSION.is_match(url))
}

/// Image URLs gathered by four scans in fixed order: markdown image syntax,
/// markdown link syntax, `Image URL:` labels, bracket-only tokens. Only
/// well-formed absolute URLs are kept; duplicates collapse case-insensitively
/// to the first occurrence.
#[must_use]
pub fn extract_images(raw: &str) -> Vec<String> {
    let scans = [&*MARKDOWN_IMAGE, &*MARKDOWN_LINK, &IMAGE.capture, &*BRACKET_URL];

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for scan in scans {
        for caps in scan.captures_iter(raw) {
            let candidate = &caps[1];
            if Url::parse(candidate).is_err() {
                continue;
            }
            if seen.insert(candidate.to_lowercase()) {
                urls.push(candidate.to_string());
            }
        }
    }

    urls
}
