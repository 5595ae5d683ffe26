//! Site-wide assets embedded at compile time.
//!
//! - `static/style.css`: the default stylesheet, written to the output root
//!   in wiki mode and inlined into the page in standalone mode
//! - `static/favicon.svg`: the default favicon, written next to the pages or
//!   embedded as a base64 data URI

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Default stylesheet.
pub const STYLESHEET: &str = include_str!("../static/style.css");

/// Default favicon (a single emoji glyph in an SVG wrapper).
pub const FAVICON_SVG: &str = include_str!("../static/favicon.svg");

/// File name the converter is told to reference and the wiki build writes.
pub const STYLESHEET_FILE: &str = "style.css";

pub const FAVICON_FILE: &str = "favicon.svg";

/// The favicon as a `data:` URI, for pages that must not reference other files.
pub fn favicon_data_uri() -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(FAVICON_SVG))
}
