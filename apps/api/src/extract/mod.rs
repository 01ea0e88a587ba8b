//! Resume Extractor — turns an uploaded PDF or DOCX into plain text.
//!
//! Dispatch is on the filename suffix. Unsupported names produce an empty
//! string; the caller's empty-text check is what reports them to the user.

pub mod docx;
pub mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("not a valid DOCX file: {0}")]
    InvalidDocx(String),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file received from the upload form. Lives for one session.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Supported résumé formats, detected from the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".pdf") {
            Some(ResumeFormat::Pdf)
        } else if filename.ends_with(".docx") {
            Some(ResumeFormat::Docx)
        } else {
            None
        }
    }
}

/// Extracts raw résumé text. Returns `""` for unsupported file names.
pub fn extract_resume(file: &UploadedFile) -> Result<String, ExtractError> {
    let text = match ResumeFormat::from_filename(&file.filename) {
        Some(ResumeFormat::Pdf) => pdf::extract_text(&file.data)?,
        Some(ResumeFormat::Docx) => docx::extract_text(&file.data)?,
        None => {
            debug!("Unsupported resume file name: {}", file.filename);
            String::new()
        }
    };

    info!(
        "Extracted {} chars from {} ({} bytes)",
        text.chars().count(),
        file.filename,
        file.data.len()
    );
    Ok(text)
}
