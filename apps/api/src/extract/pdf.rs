use tracing::debug;

use super::ExtractError;

/// Extracts text page by page and joins pages with `\n`.
/// Pages without a text layer contribute an empty string.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    debug!("PDF has {} pages", pages.len());
    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}
