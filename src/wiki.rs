//! Wiki build: a directory of documents into a browsable output root.
//!
//! ## Steps
//!
//! 1. Delete the output root if it exists, then create it empty
//! 2. Write `style.css` and `favicon.svg` into it
//! 3. Remove the page list left by a previous run
//! 4. Find the documents in the working directory (not recursive)
//! 5. Convert each one to `<stem>.html`, collecting page list entries
//! 6. Write the page list document and convert it to `list.html`
//! 7. Apply [`SITE_RULES`] to every page in the output root
//! 8. Copy images into the output root
//!
//! Every step is fatal on error and nothing is rolled back: a failed build
//! leaves the output root as it was at the point of failure.
//!
//! ## Output Structure
//!
//! ```text
//! _site/
//! ├── index.html       # one page per document
//! ├── another.html
//! ├── list.html        # generated page list
//! ├── style.css
//! ├── favicon.svg
//! └── diagram.png      # copied assets
//! ```
//!
//! The page list source (`_list.md`) stays in the working directory after the
//! build.

use crate::assets::{FAVICON_FILE, FAVICON_SVG, STYLESHEET, STYLESHEET_FILE};
use crate::config::SiteConfig;
use crate::convert::Converter;
use crate::inject::{Injector, LIST_PAGE, SITE_RULES};
use crate::scan;
use crate::types::{BuildError, BuildEvent};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What a finished wiki build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiSummary {
    pub output_root: PathBuf,
    /// Every page in the output root, page list included, sorted.
    pub pages: Vec<PathBuf>,
    /// Copied assets, at their output location.
    pub assets: Vec<PathBuf>,
}

/// Build the wiki for the documents directly inside `root`.
///
/// `converter` must already be known to work; see
/// [`Pandoc::locate`](crate::convert::Pandoc::locate).
pub fn build(
    root: &Path,
    config: &SiteConfig,
    converter: &dyn Converter,
    on_event: &mut dyn FnMut(BuildEvent),
) -> Result<WikiSummary, BuildError> {
    let shown = |path: &Path| path.strip_prefix(root).unwrap_or(path).to_path_buf();
    let output_root = root.join(&config.output_dir);

    on_event(BuildEvent::WikiStarted);

    if reset_output_root(&output_root)? {
        on_event(BuildEvent::OutputRootRecreated(shown(&output_root)));
    } else {
        on_event(BuildEvent::OutputRootCreated(shown(&output_root)));
    }

    let stylesheet = output_root.join(STYLESHEET_FILE);
    write_file(&stylesheet, STYLESHEET, "css write")?;
    on_event(BuildEvent::Created(shown(&stylesheet)));

    let favicon = output_root.join(FAVICON_FILE);
    write_file(&favicon, FAVICON_SVG, "favicon write")?;
    on_event(BuildEvent::Created(shown(&favicon)));

    let listing_path = root.join(&config.listing_file);
    if remove_if_present(&listing_path) {
        on_event(BuildEvent::ListingRemoved(shown(&listing_path)));
    }

    let documents = scan::files_with_extensions(root, &config.document_extensions)
        .map_err(BuildError::walk("md find", root))?;

    let mut listing = Listing::new(&config.listing_title);
    for document in &documents {
        let page_name = scan::page_file_name(document);
        let output = output_root.join(&page_name);
        converter.convert(document, &output)?;
        on_event(BuildEvent::Converted {
            input: shown(document),
            output: shown(&output),
        });

        if !is_home_page(document, config) {
            listing.push(&document_title(document), &page_name);
        }
    }

    write_file(&listing_path, &listing.render(), "list write")?;
    on_event(BuildEvent::Created(shown(&listing_path)));

    let list_page = output_root.join(LIST_PAGE);
    converter.convert(&listing_path, &list_page)?;
    on_event(BuildEvent::Converted {
        input: shown(&listing_path),
        output: shown(&list_page),
    });

    let injector = Injector::new(&config.home_page_html());
    let pages = scan::html_pages(&output_root).map_err(BuildError::walk("html find", &output_root))?;
    for page in &pages {
        let html = fs::read_to_string(page).map_err(BuildError::io("html read", page))?;
        write_file(page, &injector.apply(SITE_RULES, &html), "html inject")?;
        on_event(BuildEvent::Updated(shown(page)));
    }

    let sources = scan::files_with_extensions(root, &config.asset_extensions)
        .map_err(BuildError::walk("asset find", root))?;
    let mut assets = Vec::with_capacity(sources.len());
    for source in &sources {
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = output_root.join(name);
        fs::copy(source, &target).map_err(BuildError::io("asset copy", source))?;
        on_event(BuildEvent::Copied {
            from: shown(source),
            to: shown(&target),
        });
        assets.push(target);
    }

    on_event(BuildEvent::Finished);

    Ok(WikiSummary {
        output_root,
        pages,
        assets,
    })
}

/// Make `dir` exist and be empty. Returns whether it existed before.
fn reset_output_root(dir: &Path) -> Result<bool, BuildError> {
    let existed = match fs::symlink_metadata(dir) {
        Ok(_) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => return Err(BuildError::io("dir check", dir)(e)),
    };
    if existed {
        fs::remove_dir_all(dir).map_err(BuildError::io("dir remove", dir))?;
    }
    fs::create_dir(dir).map_err(BuildError::io("mkdir", dir))?;
    Ok(existed)
}

/// Best-effort removal of the previous page list. Anything in the way is
/// reported when the new list is written.
fn remove_if_present(path: &Path) -> bool {
    fs::remove_file(path).is_ok()
}

fn write_file(path: &Path, content: &str, op: &'static str) -> Result<(), BuildError> {
    fs::write(path, content).map_err(BuildError::io(op, path))
}

fn is_home_page(document: &Path, config: &SiteConfig) -> bool {
    document
        .file_name()
        .is_some_and(|name| name == config.home_page.as_str())
}

fn document_title(document: &Path) -> String {
    document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The generated page list, as markdown for the converter.
#[derive(Debug, Clone)]
pub struct Listing {
    title: String,
    entries: Vec<(String, String)>,
}

impl Listing {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            entries: Vec::new(),
        }
    }

    /// Add a page; `page_file` is percent-encoded in the link target.
    pub fn push(&mut self, title: &str, page_file: &str) {
        self.entries.push((
            title.to_string(),
            urlencoding::encode(page_file).into_owned(),
        ));
    }

    pub fn render(&self) -> String {
        let mut out = format!("# {}\n\n", self.title);
        for (title, href) in &self.entries {
            out.push_str(&format!("- [{title}]({href})\n"));
        }
        out
    }
}
