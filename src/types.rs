//! Types shared by the wiki and standalone pipelines.

use crate::convert::ConvertError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    /// A filesystem step failed; `op` is the short tag of that step
    /// (`mkdir`, `html read`, `asset copy`, ...).
    #[error("Error ({op}): {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("Error: input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),
}

impl BuildError {
    /// Adapter for `map_err`: tag an I/O error with the step and path.
    pub fn io(op: &'static str, path: &Path) -> impl FnOnce(io::Error) -> BuildError {
        let path = path.to_path_buf();
        move |source| BuildError::Io { op, path, source }
    }

    /// Same as [`BuildError::io`] for directory walks.
    pub fn walk(op: &'static str, path: &Path) -> impl FnOnce(walkdir::Error) -> BuildError {
        let path = path.to_path_buf();
        move |err| BuildError::Io {
            op,
            path: err.path().map(Path::to_path_buf).unwrap_or(path),
            source: err.into(),
        }
    }
}

/// Progress reported while a build runs.
///
/// Paths are as the user would type them from the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    WikiStarted,
    OutputRootCreated(PathBuf),
    OutputRootRecreated(PathBuf),
    /// A support file (stylesheet, favicon, page list) was written.
    Created(PathBuf),
    ListingRemoved(PathBuf),
    Converted {
        input: PathBuf,
        output: PathBuf,
    },
    /// A page was rewritten in place with injected fragments.
    Updated(PathBuf),
    Copied {
        from: PathBuf,
        to: PathBuf,
    },
    StandaloneStarted(PathBuf),
    Injecting(PathBuf),
    Generated(PathBuf),
    Finished,
}
