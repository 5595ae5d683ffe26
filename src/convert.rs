//! Document conversion through an external program.
//!
//! The [`Converter`] trait is the single operation the pipelines need: turn
//! one input document into one standalone HTML5 page. The production
//! implementation is [`Pandoc`], which shells out to `pandoc` with a fixed
//! flag set:
//!
//! ```text
//! pandoc --standalone --toc --css=style.css --to=html5 [extra args] -o <output> <input>
//! ```
//!
//! The executable is resolved against `PATH` up front ([`Pandoc::locate`]) so
//! that a missing converter is reported before the build touches the output
//! directory.

use crate::assets::STYLESHEET_FILE;
use crate::config::ConverterConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Error: {0} is not installed.")]
    NotInstalled(String),
    #[error("Error ({program}): could not start {}: {source}", executable.display())]
    Spawn {
        program: String,
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error ({program}): {status}\n{diagnostics}")]
    Failed {
        program: String,
        status: String,
        diagnostics: String,
    },
}

/// Converts a single document to a standalone HTML page.
pub trait Converter {
    /// Convert `input` into an HTML document written at `output`.
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError>;
}

/// Pandoc invoked as a subprocess.
#[derive(Debug, Clone)]
pub struct Pandoc {
    program: String,
    executable: PathBuf,
    extra_args: Vec<String>,
}

impl Pandoc {
    /// Resolve the configured program to an executable path.
    pub fn locate(config: &ConverterConfig) -> Result<Self, ConvertError> {
        let executable = find_on_path(&config.program)
            .ok_or_else(|| ConvertError::NotInstalled(config.program.clone()))?;
        Ok(Self {
            program: config.program.clone(),
            executable,
            extra_args: config.extra_args.clone(),
        })
    }

    fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--standalone".into(),
            "--toc".into(),
            format!("--css={STYLESHEET_FILE}").into(),
            "--to=html5".into(),
        ];
        args.extend(self.extra_args.iter().map(OsString::from));
        args.push("-o".into());
        args.push(output.into());
        args.push(input.into());
        args
    }
}

impl Converter for Pandoc {
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let result = Command::new(&self.executable)
            .args(self.args(input, output))
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                executable: self.executable.clone(),
                source,
            })?;

        if !result.status.success() {
            let mut diagnostics = String::from_utf8_lossy(&result.stderr).into_owned();
            diagnostics.push_str(&String::from_utf8_lossy(&result.stdout));
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                status: result.status.to_string(),
                diagnostics: diagnostics.trim_end().to_string(),
            });
        }
        Ok(())
    }
}

/// Find an executable the way a shell would.
///
/// A program containing a path separator is checked as-is; otherwise each
/// `PATH` entry is searched in order. An unset or empty `PATH` finds nothing.
pub fn find_on_path(program: &str) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }
    let direct = Path::new(program);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(format!("{program}.exe")), dir.join(program)]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
