//! # mdwi
//!
//! A minimal markdown wiki generator. Every markdown file in a directory
//! becomes a page, `{{Name}}` turns into a link to `Name.html`, and the
//! result is a plain static site in `_site/`.
//!
//! # Architecture: Convert, Then Inject
//!
//! Document conversion is delegated to pandoc. mdwi owns everything around
//! it: which files are converted, the generated page list, and the fragments
//! stitched into the converted pages afterwards.
//!
//! ```text
//! wiki mode        *.md  →  pandoc  →  _site/*.html  →  SITE_RULES        →  _site/
//! standalone mode  x.md  →  pandoc  →  x.html        →  STANDALONE_RULES  →  x.html
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`wiki`] | Wiki build: output root reset, conversion, page list, injection, asset copy |
//! | [`standalone`] | Single self-contained page next to its source |
//! | [`convert`] | [`Converter`](convert::Converter) trait and the pandoc subprocess adapter |
//! | [`inject`] | Text rewrite rules and the two rule sets |
//! | [`scan`] | Non-recursive document and asset discovery |
//! | [`assets`] | Embedded stylesheet and favicon |
//! | [`config`] | Optional `mdwi.toml` loading and validation |
//! | [`types`] | Build events and errors shared by both build modes |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Text Rewrites Over an HTML Tree
//!
//! Pandoc's output shape is stable: one `<head>`, one table-of-contents
//! `<nav>`, one `</body>`. Rewrites target the first match of each and leave
//! the rest of the document byte-for-byte untouched. A page without the
//! target tag is published without that fragment.
//!
//! ## Clean Output Root
//!
//! The output root is deleted and recreated on every build, so renamed or
//! removed documents never leave stale pages behind. There is no incremental
//! mode and no rollback: a failed build leaves a partial output root.
//!
//! ## Errors Surface at the Top
//!
//! Library functions return typed errors; only the binary prints them and
//! picks the exit code, so every pipeline step can be tested in-process with a
//! mock converter.

pub mod assets;
pub mod config;
pub mod convert;
pub mod inject;
pub mod output;
pub mod scan;
pub mod standalone;
pub mod types;
pub mod wiki;

#[cfg(test)]
pub(crate) mod test_helpers;
