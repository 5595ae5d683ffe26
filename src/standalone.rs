//! Standalone build: one document into one self-contained HTML file.
//!
//! The page is written next to its source (`notes.md` → `notes.html`) with
//! the stylesheet and favicon inlined, so it can be mailed or opened from
//! anywhere. There is no output root, no page list and no navigation.

use crate::convert::Converter;
use crate::inject::{Injector, STANDALONE_RULES};
use crate::types::{BuildError, BuildEvent};
use std::fs;
use std::path::{Path, PathBuf};

/// Convert `input` and inline everything it needs. Returns the output path.
pub fn build(
    input: &Path,
    converter: &dyn Converter,
    on_event: &mut dyn FnMut(BuildEvent),
) -> Result<PathBuf, BuildError> {
    if !input.is_file() {
        return Err(BuildError::InputNotFound(input.to_path_buf()));
    }
    let output = input.with_extension("html");

    on_event(BuildEvent::StandaloneStarted(output.clone()));
    converter.convert(input, &output)?;

    on_event(BuildEvent::Injecting(output.clone()));
    let html = fs::read_to_string(&output).map_err(BuildError::io("html read", &output))?;
    let inlined = Injector::default().apply(STANDALONE_RULES, &html);
    fs::write(&output, inlined).map_err(BuildError::io("html inject", &output))?;

    on_event(BuildEvent::Generated(output.clone()));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn run(input: &Path, converter: &dyn Converter) -> (PathBuf, Vec<BuildEvent>) {
        let mut events = Vec::new();
        let output = build(input, converter, &mut |e| events.push(e)).unwrap();
        (output, events)
    }

    #[test]
    fn output_is_sibling_html_file() {
        let tmp = wiki_dir(&[("another.md", "# Another Page")]);
        let (output, events) = run(&tmp.path().join("another.md"), &MockConverter::new());

        assert_eq!(output, tmp.path().join("another.html"));
        assert!(output.exists());
        assert_eq!(
            events,
            vec![
                BuildEvent::StandaloneStarted(output.clone()),
                BuildEvent::Injecting(output.clone()),
                BuildEvent::Generated(output.clone()),
            ]
        );
    }

    #[test]
    fn stylesheet_and_favicon_are_inlined() {
        let tmp = wiki_dir(&[("another.md", "anything at all")]);
        let (output, _) = run(&tmp.path().join("another.md"), &MockConverter::new());
        let html = fs::read_to_string(output).unwrap();

        assert!(html.contains("<style>"));
        assert!(!html.contains(r#"href="style.css""#));
        assert!(html.contains(r#"<link rel="icon" href="data:image/svg+xml;base64,"#));
        assert!(!html.contains("favicon.svg"));
        assert!(html.contains("<footer>"));
    }

    #[test]
    fn no_navigation_or_site_files() {
        let tmp = wiki_dir(&[("notes.md", "{{other}}")]);
        run(&tmp.path().join("notes.md"), &MockConverter::new());

        let html = fs::read_to_string(tmp.path().join("notes.html")).unwrap();
        assert!(!html.contains("Table of Contents"));
        assert!(!html.contains("list.html"));
        assert_eq!(dir_listing(tmp.path()), vec!["notes.html", "notes.md"]);
    }

    #[test]
    fn missing_input_is_reported_before_converting() {
        let tmp = wiki_dir(&[]);
        let converter = MockConverter::new();
        let err = build(&tmp.path().join("nope.md"), &converter, &mut |_| {}).unwrap_err();

        assert!(matches!(err, BuildError::InputNotFound(_)));
        assert!(converter.converted_names().is_empty());
    }

    #[test]
    fn converter_failure_is_fatal() {
        let tmp = wiki_dir(&[("bad.md", "x")]);
        let converter = MockConverter::failing_on("bad.md");
        let err = build(&tmp.path().join("bad.md"), &converter, &mut |_| {}).unwrap_err();
        assert!(matches!(err, BuildError::Convert(_)));
    }
}
