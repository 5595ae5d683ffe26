//! Wiki configuration module.
//!
//! Handles loading and validating an optional `mdwi.toml` in the working
//! directory. Stock defaults reproduce the classic behavior (pandoc, `_site/`,
//! `index.md` as the home page); a config file only needs the keys it wants to
//! override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "_site"              # Recreated from scratch on every build
//! home_page = "index.md"            # Excluded from the page list, target of "Home"
//! listing_file = "_list.md"         # Generated page list source (left behind)
//! listing_title = "List of Pages"
//! document_extensions = ["md"]
//! asset_extensions = ["png", "jpg"] # Copied into output_dir
//!
//! [converter]
//! program = "pandoc"
//! extra_args = []                   # Appended after the fixed flag set
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "mdwi.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error (config): {0}")]
    Io(#[from] std::io::Error),
    #[error("Error (config): mdwi.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Error (config): {0}")]
    Validation(String),
}

/// Wiki configuration loaded from `mdwi.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Output root, relative to the working directory. Deleted and recreated
    /// on every wiki build.
    pub output_dir: String,
    /// Home document: left out of the page list and linked as "Home".
    pub home_page: String,
    /// File name of the generated page list document.
    pub listing_file: String,
    /// Heading of the generated page list.
    pub listing_title: String,
    /// Extensions (without dot) of documents converted to pages.
    pub document_extensions: Vec<String>,
    /// Extensions (without dot) of files copied verbatim into the output root.
    pub asset_extensions: Vec<String>,
    /// External converter settings.
    pub converter: ConverterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: "_site".to_string(),
            home_page: "index.md".to_string(),
            listing_file: "_list.md".to_string(),
            listing_title: "List of Pages".to_string(),
            document_extensions: vec!["md".to_string()],
            asset_extensions: vec!["png".to_string(), "jpg".to_string()],
            converter: ConverterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values before anything is deleted or written.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_single_normal_component(&self.output_dir) {
            return Err(ConfigError::Validation(format!(
                "output_dir must be a plain directory name, got {:?}",
                self.output_dir
            )));
        }
        if !is_single_normal_component(&self.listing_file) {
            return Err(ConfigError::Validation(format!(
                "listing_file must be a plain file name, got {:?}",
                self.listing_file
            )));
        }
        if self.home_page.is_empty() {
            return Err(ConfigError::Validation(
                "home_page must not be empty".into(),
            ));
        }
        if self.document_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "document_extensions must not be empty".into(),
            ));
        }
        let all_extensions = self
            .document_extensions
            .iter()
            .chain(&self.asset_extensions);
        for ext in all_extensions {
            if ext.is_empty() || ext.contains('.') {
                return Err(ConfigError::Validation(format!(
                    "extensions are given without a dot, got {ext:?}"
                )));
            }
        }
        if self.listing_file.eq_ignore_ascii_case(&self.home_page) {
            return Err(ConfigError::Validation(format!(
                "listing_file must not be the home page, got {:?}",
                self.listing_file
            )));
        }
        if self.is_document(&self.listing_file) && !self.listing_file.starts_with('_') {
            return Err(ConfigError::Validation(format!(
                "listing_file {:?} has a document extension and must start with '_'",
                self.listing_file
            )));
        }
        if self.converter.program.is_empty() {
            return Err(ConfigError::Validation(
                "converter.program must not be empty".into(),
            ));
        }
        Ok(())
    }

    fn is_document(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.document_extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
    }

    /// Output file name of the home page (`index.md` → `index.html`).
    pub fn home_page_html(&self) -> String {
        let stem = Path::new(&self.home_page)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.home_page.clone());
        format!("{stem}.html")
    }
}

fn is_single_normal_component(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// External converter settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Program name looked up on `PATH`, or a path to the executable.
    pub program: String,
    /// Extra arguments passed after the fixed flag set.
    pub extra_args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: "pandoc".to_string(),
            extra_args: Vec::new(),
        }
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config for the wiki rooted at `dir`.
///
/// A missing `mdwi.toml` yields the stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    parse_config(&content)
}

/// Parse `mdwi.toml` text on top of the stock defaults, then validate.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `mdwi.toml`.
///
/// Printed by `--gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# mdwi configuration
# ==================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Output directory. It is deleted and recreated on every build, so it must
# be a plain directory name inside the wiki directory.
output_dir = "_site"

# Home document. It is left out of the page list and linked as "Home".
home_page = "index.md"

# Generated page list. The source file is written next to your documents
# and converted into list.html. It is deleted at the start of every build, so
# it cannot be the home page, and a name with a document extension must
# start with an underscore.
listing_file = "_list.md"
listing_title = "List of Pages"

# Documents converted into pages (extensions without the dot).
document_extensions = ["md"]

# Files copied verbatim into the output directory.
asset_extensions = ["png", "jpg"]

# ---------------------------------------------------------------------------
# External converter
# ---------------------------------------------------------------------------
[converter]
# Program name looked up on PATH, or a path to the executable.
program = "pandoc"

# Extra arguments appended after the fixed flag set.
extra_args = []
"##
}
