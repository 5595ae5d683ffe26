//! CLI output formatting.
//!
//! Builds report [`BuildEvent`]s; this module turns them into the progress
//! lines printed on stdout:
//!
//! ```text
//! Generating wiki using mdwi version 0.3.1 ...
//! Removed and re-created _site directory
//! Created _site/style.css
//! Created _site/favicon.svg
//! Removed _list.md
//! Converted another.md to _site/another.html
//! Converted index.md to _site/index.html
//! Created _list.md
//! Converted _list.md to _site/list.html
//! Updated _site/another.html
//! ...
//! Copied image.png to _site/image.png
//! Done!
//! ```
//!
//! Format functions are pure; `print_*` wrappers write to stdout. Errors are
//! not events: the binary prints them on stderr.

use crate::types::BuildEvent;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a single build event as one display line.
pub fn format_event(event: &BuildEvent) -> String {
    match event {
        BuildEvent::WikiStarted => format!("Generating wiki using {NAME} version {VERSION} ..."),
        BuildEvent::OutputRootCreated(dir) => format!("Created {} directory", dir.display()),
        BuildEvent::OutputRootRecreated(dir) => {
            format!("Removed and re-created {} directory", dir.display())
        }
        BuildEvent::Created(path) => format!("Created {}", path.display()),
        BuildEvent::ListingRemoved(path) => format!("Removed {}", path.display()),
        BuildEvent::Converted { input, output } => {
            format!("Converted {} to {}", input.display(), output.display())
        }
        BuildEvent::Updated(path) => format!("Updated {}", path.display()),
        BuildEvent::Copied { from, to } => {
            format!("Copied {} to {}", from.display(), to.display())
        }
        BuildEvent::StandaloneStarted(path) => {
            format!("Generating standalone HTML file: {}", path.display())
        }
        BuildEvent::Injecting(path) => format!("Injecting custom HTML into {}", path.display()),
        BuildEvent::Generated(path) => format!("Generated {}", path.display()),
        BuildEvent::Finished => "Done!".to_string(),
    }
}

/// Print a build event to stdout.
pub fn print_event(event: BuildEvent) {
    println!("{}", format_event(&event));
}

/// `<program> version <version>`, as printed by `--version`.
pub fn version_line(program: &str) -> String {
    format!("{program} version {VERSION}")
}
