//! Block Parser — splits the model reply into HTML, CSS and JS sections.
//!
//! The `===TAG===` markers are an informal contract with free-text model
//! output. A missing tag yields an empty section; nothing here errors.

pub const HTML_TAG: &str = "===HTML===";
pub const CSS_TAG: &str = "===CSS===";
pub const JS_TAG: &str = "===JS===";

/// Any run of `===` ends a section.
const SECTION_END: &str = "===";

/// Raw sections as they came back from the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocks {
    pub html: String,
    pub css: String,
    pub js: String,
}

pub fn parse_blocks(text: &str) -> Blocks {
    Blocks {
        html: section(text, HTML_TAG),
        css: section(text, CSS_TAG),
        js: section(text, JS_TAG),
    }
}

/// Text after the first `tag` up to the next `===` (or end of text), trimmed.
fn section(text: &str, tag: &str) -> String {
    let Some(start) = text.find(tag) else {
        return String::new();
    };
    let rest = &text[start + tag.len()..];
    let body = match rest.find(SECTION_END) {
        Some(end) => &rest[..end],
        None => rest,
    };
    body.trim().to_string()
}
