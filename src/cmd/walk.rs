use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cmd::sort;
use crate::domain::error::WalkError;
use crate::io::is_translation_file_name;

/// Directory name appended to the install location when no base is given.
pub const I18N_DIR_NAME: &str = "i18n";

/// Run-level options for a walk over language directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub base_dir: PathBuf,
}

impl RunOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Derive the base directory from the running executable's location.
    pub fn from_install_location() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let install_dir = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("executable `{}` has no parent directory", exe.display()),
            )
        })?;
        Ok(Self::new(install_dir.join(I18N_DIR_NAME)))
    }
}

/// Sort every `<base_dir>/<language>/*.json` file, reporting on `out`.
///
/// A directory listing failure ends the walk and is reported as a single
/// line; files handled before it stay sorted.
pub fn process_all<W: Write>(base_dir: &Path, out: &mut W) {
    if let Err(error) = walk(base_dir, out) {
        let _ = writeln!(out, "Error while processing language directories: {error}");
    }
}

/// Walk language directories under `base_dir` and sort each translation file.
///
/// Per-file failures are reported by [`sort::run_file`] and never stop the walk.
pub fn walk<W: Write>(base_dir: &Path, out: &mut W) -> Result<(), WalkError> {
    for entry in read_dir(base_dir)? {
        let language_dir = entry.map_err(|source| read_dir_error(base_dir, source))?.path();
        if !language_dir.is_dir() {
            continue;
        }

        for file in read_dir(&language_dir)? {
            let file = file.map_err(|source| read_dir_error(&language_dir, source))?;
            if is_translation_file_name(&file.file_name()) {
                sort::run_file(&file.path(), out);
            }
        }
    }
    Ok(())
}

pub fn run<W: Write>(options: &RunOptions, out: &mut W) {
    process_all(&options.base_dir, out);
}

fn read_dir(path: &Path) -> Result<fs::ReadDir, WalkError> {
    fs::read_dir(path).map_err(|source| read_dir_error(path, source))
}

fn read_dir_error(path: &Path, source: io::Error) -> WalkError {
    WalkError::ReadDir {
        path: path.display().to_string(),
        source,
    }
}
