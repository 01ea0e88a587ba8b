use std::io::{Cursor, Read};

use zip::ZipArchive;

use super::ExtractError;

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

fn is_wml(node: roxmltree::Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

/// Extracts body paragraphs joined with `\n`. Table cells are not included.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| ExtractError::InvalidDocx(format!("missing {DOCUMENT_PART}")))?
        .read_to_string(&mut xml)?;

    let doc = roxmltree::Document::parse(&xml)?;
    let body = doc
        .root_element()
        .children()
        .find(|n| is_wml(*n, "body"))
        .ok_or_else(|| ExtractError::InvalidDocx("document has no body".to_string()))?;

    let paragraphs: Vec<String> = body
        .children()
        .filter(|n| is_wml(*n, "p"))
        .map(paragraph_text)
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Run text of one paragraph. Only nodes directly inside a `w:r` count, so
/// tab-stop definitions in paragraph properties are ignored.
fn paragraph_text(paragraph: roxmltree::Node) -> String {
    let mut text = String::new();
    for node in paragraph.descendants() {
        if !node.parent().is_some_and(|p| is_wml(p, "r")) {
            continue;
        }
        if is_wml(node, "t") {
            text.push_str(node.text().unwrap_or_default());
        } else if is_wml(node, "tab") {
            text.push('\t');
        } else if is_wml(node, "br") || is_wml(node, "cr") {
            text.push('\n');
        }
    }
    text
}
