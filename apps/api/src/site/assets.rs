//! Asset Injector — makes sure the page links `style.css` and `script.js`.
//!
//! Plain string search, not DOM-aware. Only the first `<head>` and the first
//! `</body>` are used as anchors.

const STYLESHEET_REF: &str = "style.css";
const SCRIPT_REF: &str = "script.js";

const HEAD_OPEN: &str = "<head>";
const BODY_CLOSE: &str = "</body>";

const STYLESHEET_LINK: &str = "\n<link rel='stylesheet' href='style.css'>";
const SCRIPT_TAG: &str = "<script src='script.js'></script>\n";

pub fn inject_assets(html: &str) -> String {
    let mut html = html.to_string();

    if !html.contains(STYLESHEET_REF) {
        if let Some(pos) = html.find(HEAD_OPEN) {
            html.insert_str(pos + HEAD_OPEN.len(), STYLESHEET_LINK);
        }
    }

    if !html.contains(SCRIPT_REF) {
        if let Some(pos) = html.find(BODY_CLOSE) {
            html.insert_str(pos, SCRIPT_TAG);
        }
    }

    html
}
