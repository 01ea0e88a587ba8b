// Site assembly: model reply → sections → injected HTML + themed CSS → zip.
// All functions here are pure string/byte transforms; no I/O.

pub mod assets;
pub mod blocks;
pub mod bundle;
pub mod theme;

use serde::Serialize;
use tracing::warn;

pub use assets::inject_assets;
pub use blocks::parse_blocks;
pub use bundle::create_bundle;
pub use theme::enhance_css;

/// The three files of the generated website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedSite {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl GeneratedSite {
    /// Parses a model reply and applies asset injection and the base theme.
    pub fn from_model_response(response: &str) -> Self {
        let blocks = parse_blocks(response);

        for (name, section) in [("HTML", &blocks.html), ("CSS", &blocks.css), ("JS", &blocks.js)] {
            if section.is_empty() {
                warn!("Model response has no {name} section; packaging it empty");
            }
        }

        GeneratedSite {
            html: inject_assets(&blocks.html),
            css: enhance_css(&blocks.css),
            js: blocks.js,
        }
    }
}
