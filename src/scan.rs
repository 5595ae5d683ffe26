//! Working directory enumeration.
//!
//! Wiki builds look at a single directory level only: every document with a
//! recognized extension becomes a page, every recognized asset is copied, and
//! subdirectories (including the output root) are ignored. Results are sorted
//! by path so page order and the generated page list are stable.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files directly inside `dir` whose extension is one of `extensions`
/// (ASCII case-insensitive), sorted by path. Symlinks to files count as
/// files; dangling links are skipped.
pub fn files_with_extensions(dir: &Path, extensions: &[String]) -> walkdir::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.path().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Produced pages in an output root.
pub fn html_pages(dir: &Path) -> walkdir::Result<Vec<PathBuf>> {
    files_with_extensions(dir, &["html".to_string()])
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

/// Output page name for a document: stem + `.html`.
pub fn page_file_name(document: &Path) -> String {
    let stem = document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn finds_documents_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["zeta.md", "alpha.md", "notes.txt", "Mixed.MD"] {
            fs::write(tmp.path().join(name), "x").unwrap();
        }
        let found = files_with_extensions(tmp.path(), &exts(&["md"])).unwrap();
        assert_eq!(names(&found), vec!["Mixed.MD", "alpha.md", "zeta.md"]);
    }

    #[test]
    fn ignores_subdirectories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("_site")).unwrap();
        fs::write(tmp.path().join("_site/old.md"), "x").unwrap();
        fs::create_dir(tmp.path().join("dir.md")).unwrap();
        fs::write(tmp.path().join("page.md"), "x").unwrap();

        let found = files_with_extensions(tmp.path(), &exts(&["md"])).unwrap();
        assert_eq!(names(&found), vec!["page.md"]);
    }

    #[test]
    fn multiple_asset_extensions() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.png", "b.jpg", "c.gif", "d"] {
            fs::write(tmp.path().join(name), "x").unwrap();
        }
        let found = files_with_extensions(tmp.path(), &exts(&["png", "jpg"])).unwrap();
        assert_eq!(names(&found), vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn empty_directory_finds_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(html_pages(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(html_pages(&tmp.path().join("nope")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_found() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        fs::write(shared.path().join("shared.md"), "x").unwrap();
        fs::write(shared.path().join("pic.png"), "x").unwrap();
        fs::create_dir(shared.path().join("folder.md")).unwrap();
        fs::write(tmp.path().join("index.md"), "x").unwrap();
        symlink(shared.path().join("shared.md"), tmp.path().join("shared.md")).unwrap();
        symlink(shared.path().join("pic.png"), tmp.path().join("pic.png")).unwrap();
        symlink(shared.path().join("folder.md"), tmp.path().join("folder.md")).unwrap();
        symlink(shared.path().join("gone.md"), tmp.path().join("dangling.md")).unwrap();

        let documents = files_with_extensions(tmp.path(), &exts(&["md"])).unwrap();
        assert_eq!(names(&documents), vec!["index.md", "shared.md"]);
        let images = files_with_extensions(tmp.path(), &exts(&["png", "jpg"])).unwrap();
        assert_eq!(names(&images), vec!["pic.png"]);
    }

    #[test]
    fn page_file_name_swaps_extension() {
        assert_eq!(page_file_name(Path::new("dir/My Page.md")), "My Page.html");
        assert_eq!(page_file_name(Path::new("index.md")), "index.html");
    }
}
