//! Packager — writes the generated site into an in-memory zip.

use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::GeneratedSite;

pub const BUNDLE_FILENAME: &str = "portfolio_website.zip";
pub const BUNDLE_MIME: &str = "application/zip";

pub const HTML_ENTRY: &str = "index.html";
pub const CSS_ENTRY: &str = "style.css";
pub const JS_ENTRY: &str = "script.js";

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `index.html`, `style.css` and `script.js`, stored uncompressed.
pub fn create_bundle(site: &GeneratedSite) -> Result<Vec<u8>, BundleError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, content) in [
        (HTML_ENTRY, &site.html),
        (CSS_ENTRY, &site.css),
        (JS_ENTRY, &site.js),
    ] {
        writer.start_file(name, options)?;
        writer.write_all(content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}
