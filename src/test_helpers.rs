//! Shared test utilities for the mdwi test suite.
//!
//! Provides a [`MockConverter`] that writes pandoc-shaped HTML without running
//! pandoc, plus small helpers for populating a wiki directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = wiki_dir(&[("index.md", "# Home\n\n{{another}}"), ("another.md", "hi")]);
//! let converter = MockConverter::new();
//! let (summary, events) = build_collecting(tmp.path(), &converter).unwrap();
//! assert_eq!(converter.converted_names(), vec!["another.md", "index.md", "_list.md"]);
//! ```

use crate::config::SiteConfig;
use crate::convert::{ConvertError, Converter};
use crate::types::{BuildError, BuildEvent};
use crate::wiki::{self, WikiSummary};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// A temp directory holding the given `(file name, contents)` pairs.
pub fn wiki_dir(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(tmp.path().join(name), content).unwrap();
    }
    tmp
}

/// The page shape pandoc produces for `--standalone --toc --css=style.css`.
pub fn pandoc_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" lang="" xml:lang="">
<head>
  <meta charset="utf-8" />
  <title>page</title>
  <link rel="stylesheet" href="style.css" />
</head>
<body>
<nav id="TOC" role="doc-toc">
<ul>
</ul>
</nav>
{body}
</body>
</html>
"#
    )
}

// =========================================================================
// Mock converter
// =========================================================================

/// Converter that wraps the raw input text in [`pandoc_page`] and records
/// every call. Single-threaded like the pipelines, so a `RefCell` suffices.
#[derive(Default)]
pub struct MockConverter {
    pub calls: RefCell<Vec<(PathBuf, PathBuf)>>,
    /// File name that makes the converter fail.
    pub fail_on: Option<String>,
}

impl MockConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Input file names in call order.
    pub fn converted_names(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(input, _)| input.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

impl Converter for MockConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        self.calls
            .borrow_mut()
            .push((input.to_path_buf(), output.to_path_buf()));

        let file_name = input.file_name().map(|n| n.to_string_lossy().into_owned());
        if file_name.is_some() && file_name == self.fail_on {
            return Err(ConvertError::Failed {
                program: "pandoc".to_string(),
                status: "exit status: 64".to_string(),
                diagnostics: format!("pandoc: cannot parse {}", input.display()),
            });
        }

        let source = fs::read_to_string(input).map_err(|source| ConvertError::Spawn {
            program: "pandoc".to_string(),
            executable: PathBuf::from("mock"),
            source,
        })?;
        fs::write(output, pandoc_page(&source)).map_err(|source| ConvertError::Spawn {
            program: "pandoc".to_string(),
            executable: PathBuf::from("mock"),
            source,
        })?;
        Ok(())
    }
}

// =========================================================================
// Build helpers
// =========================================================================

/// Run a default-config wiki build, collecting events.
pub fn build_collecting(
    root: &Path,
    converter: &dyn Converter,
) -> Result<(WikiSummary, Vec<BuildEvent>), BuildError> {
    build_with_config(root, &SiteConfig::default(), converter)
}

pub fn build_with_config(
    root: &Path,
    config: &SiteConfig,
    converter: &dyn Converter,
) -> Result<(WikiSummary, Vec<BuildEvent>), BuildError> {
    let mut events = Vec::new();
    let summary = wiki::build(root, config, converter, &mut |e| events.push(e))?;
    Ok((summary, events))
}

/// Sorted file names directly inside `dir`.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
